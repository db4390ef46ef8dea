//! Seeded generator for hand-drawn looking scribble strokes.
//!
//! A field is a list of quadratic-curve strokes scattered over a
//! `width` x `height` band, followed by one or more bold "signature" strokes.
//! The same seed and canvas always produce the same field.
//!
//! ```
//! let strokes = scribble_field::generate(42, 5, 600.0, 140.0).unwrap();
//! assert_eq!(strokes.len(), 6);
//! assert_eq!(strokes, scribble_field::generate(42, 5, 600.0, 140.0).unwrap());
//!
//! let svg = scribble_field::SvgDocument::new(600.0, 140.0).render(&strokes);
//! assert_eq!(svg.matches("<path").count(), 6);
//! ```

pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod lcg;
pub mod path;
pub mod scribble;
pub mod stroke;
pub mod svg;

pub use color::{Rgb, PALETTE, SIGNATURE_INK};
pub use config::ScribbleConfig;
pub use error::{Error, Result};
pub use lcg::Lcg32;
pub use path::{Path, PathCommand, PathParseError};
pub use scribble::ScribbleField;
pub use stroke::{BlurTier, DashPattern, Stroke};
pub use svg::{write_svg, SvgDocument};

/// Generates `count` regular strokes plus the signature strokes with the
/// canonical tuning.
pub fn generate(seed: u32, count: u32, width: f64, height: f64) -> Result<Vec<Stroke>> {
    generate_with(seed, &ScribbleConfig::new(count, width, height))
}

pub fn generate_with(seed: u32, config: &ScribbleConfig) -> Result<Vec<Stroke>> {
    let field = ScribbleField::new(config.clone(), Lcg32::new(seed))?;
    Ok(field.generate())
}
