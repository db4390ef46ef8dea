use serde::{Serialize, Serializer};
use std::fmt;

use crate::color::{Rgb, SIGNATURE_INK};
use crate::path::Path;

/// Compositing damping applied to every stroke's opacity.
pub const OPACITY_DAMPING: f64 = 0.7;

/// Blur amounts at or below this use the soft filter.
pub const SOFT_BLUR_LIMIT: f64 = 0.45;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashPattern {
    pub on: u32,
    pub off: u32,
}

impl fmt::Display for DashPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.on, self.off)
    }
}

impl Serialize for DashPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Gaussian blur filter a renderer should use for a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurTier {
    None,
    Soft,
    Heavy,
}

impl BlurTier {
    pub fn std_deviation(self) -> f64 {
        match self {
            BlurTier::None => 0.0,
            BlurTier::Soft => 0.35,
            BlurTier::Heavy => 0.6,
        }
    }
}

/// One decorative curve and its style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub path: Path,
    pub color: Rgb,
    pub width: f64,
    pub opacity: f64,
    pub dash: Option<DashPattern>,
    pub blur: f64,
}

impl Stroke {
    pub fn is_signature(&self) -> bool {
        self.color == SIGNATURE_INK
    }

    pub fn blur_tier(&self) -> BlurTier {
        if self.blur <= 0.0 {
            BlurTier::None
        } else if self.blur <= SOFT_BLUR_LIMIT {
            BlurTier::Soft
        } else {
            BlurTier::Heavy
        }
    }

    pub fn render_opacity(&self) -> f64 {
        (self.opacity * OPACITY_DAMPING).min(1.0)
    }
}
