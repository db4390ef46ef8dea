use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Canvas size, stroke count and the probability knobs of the scribble routine.
///
/// `Default` is the canonical parameter set: 30 strokes on a 600x140 band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScribbleConfig {
    pub count: u32,
    pub width: f64,
    pub height: f64,
    /// Chance a stroke is "loopy".
    pub loop_chance: f64,
    /// Chance each segment of a loopy stroke becomes a double curve.
    pub loop_segment_chance: f64,
    pub flick_chance: f64,
    pub dash_chance: f64,
    pub blur_chance: f64,
    /// Heavy strokes drawn: `max(1, floor(unit * signature_spread))`.
    pub signature_spread: u32,
}

impl Default for ScribbleConfig {
    fn default() -> Self {
        Self {
            count: 30,
            width: 600.0,
            height: 140.0,
            loop_chance: 0.2,
            loop_segment_chance: 0.35,
            flick_chance: 0.18,
            dash_chance: 0.06,
            blur_chance: 0.08,
            signature_spread: 2,
        }
    }
}

impl ScribbleConfig {
    pub fn new(count: u32, width: f64, height: f64) -> Self {
        Self {
            count,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidDimension { name, value });
            }
        }

        let probabilities = [
            ("loop_chance", self.loop_chance),
            ("loop_segment_chance", self.loop_segment_chance),
            ("flick_chance", self.flick_chance),
            ("dash_chance", self.dash_chance),
            ("blur_chance", self.blur_chance),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidProbability { name, value });
            }
        }

        if self.signature_spread == 0 {
            return Err(Error::InvalidSpread);
        }
        Ok(())
    }
}
