//! SVG output for a scribble field.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::stroke::{BlurTier, Stroke};

const SOFT_FILTER_ID: &str = "sBlur1";
const HEAVY_FILTER_ID: &str = "sBlur2";

/// Renders strokes into a stretchable `<svg>` band whose coordinate space is
/// the generator's canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgDocument {
    width: f64,
    height: f64,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Strokes are emitted in slice order so later ones paint on top.
    pub fn render(&self, strokes: &[Stroke]) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_document(&mut out, strokes);
        out
    }

    fn write_document(&self, out: &mut String, strokes: &[Stroke]) -> std::fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 {} {}" preserveAspectRatio="none">"#,
            self.width, self.height
        )?;
        writeln!(out, "  <defs>")?;
        for (id, tier) in [(SOFT_FILTER_ID, BlurTier::Soft), (HEAVY_FILTER_ID, BlurTier::Heavy)] {
            writeln!(
                out,
                r#"    <filter id="{}" x="-20%" y="-20%" width="140%" height="140%"><feGaussianBlur stdDeviation="{}" /></filter>"#,
                id,
                tier.std_deviation()
            )?;
        }
        writeln!(out, "  </defs>")?;

        for stroke in strokes {
            self.write_stroke(out, stroke)?;
        }
        writeln!(out, "</svg>")
    }

    fn write_stroke(&self, out: &mut String, stroke: &Stroke) -> std::fmt::Result {
        write!(
            out,
            r#"  <path d="{}" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" fill="none" opacity="{}""#,
            stroke.path,
            stroke.color,
            stroke.width,
            stroke.render_opacity()
        )?;
        if let Some(dash) = stroke.dash {
            write!(out, r#" stroke-dasharray="{}""#, dash)?;
        }
        match stroke.blur_tier() {
            BlurTier::None => {}
            BlurTier::Soft => write!(out, r#" filter="url(#{})""#, SOFT_FILTER_ID)?,
            BlurTier::Heavy => write!(out, r#" filter="url(#{})""#, HEAVY_FILTER_ID)?,
        }
        writeln!(out, " />")
    }
}

/// Writes the rendered field to `file_name`, creating parent directories.
pub fn write_svg<P: AsRef<Path>>(
    file_name: P,
    width: f64,
    height: f64,
    strokes: &[Stroke],
) -> Result<()> {
    let file_name = file_name.as_ref();
    if let Some(parent) = file_name.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(file_name)?;
    let mut file_writer = BufWriter::new(file);
    file_writer.write_all(SvgDocument::new(width, height).render(strokes).as_bytes())?;
    file_writer.flush()?;
    Ok(())
}
