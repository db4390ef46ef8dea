//! Error types for scribble generation.

use thiserror::Error;

/// Result type alias for scribble operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Canvas width or height is negative or not finite
    #[error("canvas {name} must be finite and non-negative, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    /// A tuning probability lies outside [0, 1]
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("signature_spread must be at least 1")]
    InvalidSpread,

    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
