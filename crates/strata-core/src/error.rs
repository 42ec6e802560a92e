use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected generator configuration. Generation aborts before touching any
/// previously generated state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("no layers supplied: at least one layer marker is required")]
    NoLayers,
    #[error("grid dimensions {width}x{height} are invalid (each side must be 1..={max})")]
    InvalidDimensions { width: usize, height: usize, max: usize },
    #[error("noise scale {0} must be finite and in (0, 1]")]
    InvalidScale(f64),
    #[error("noise seed {0} must be finite")]
    InvalidSeed(f64),
    #[error("border width {value} exceeds the maximum of {max}")]
    InvalidBorder { value: usize, max: usize },
    #[error("weight {value} for layer {index} must be finite and non-negative")]
    InvalidWeight { index: usize, value: f32 },
    #[error("layer weights sum to zero")]
    ZeroTotalWeight,
}

/// Failure to load a [`GeneratorConfig`](crate::config::GeneratorConfig) from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse generator config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read generator config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("generator config is invalid: {0}")]
    Invalid(#[from] ConfigError),
}
