//! Generator configuration, validated once at the start of every pass.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::coastline::CoastlineShape;
use crate::coords::CellTransform;
use crate::error::{ConfigError, LoadError};
use crate::weights::WeightTable;

/// Largest accepted grid side. Cell coordinates are `i32`.
pub const MAX_DIMENSION: usize = 16_384;

/// Upper bound (exclusive) for seeds drawn by [`GeneratorConfig::with_random_seed`].
pub const RANDOM_SEED_RANGE: u32 = 10_000;

const LOG_TARGET: &str = "strata::config";

/// User-facing generation options. Defaults produce a 64×64 four-layer island.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// One opaque marker per layer, lowest (most water-like) first.
    pub markers: Vec<String>,
    /// Per-layer weights; missing entries default to 1.0, extras are ignored.
    pub weights: Vec<f32>,
    pub width: usize,
    pub height: usize,
    /// Noise frequency divisor in (0, 1]. Smaller values give larger features.
    pub scale: f64,
    /// Noise coordinate offset. Equal seeds give equal maps.
    pub seed: f64,
    /// Put cell (0, 0) at the grid centre. Forced on by the ellipse coastline.
    pub centered: bool,
    pub coastline: CoastlineShape,
    /// Rings of layer 0 painted outside the grid; 0 disables.
    pub border_width: usize,
    /// Paint each layer's overlap halo onto the layer beneath.
    pub fade_out_tiles: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            markers: ["water", "sand", "grass", "rock"].map(String::from).to_vec(),
            weights: vec![3.0, 1.0, 3.0, 2.0],
            width: 64,
            height: 64,
            scale: 0.5,
            seed: 0.0,
            centered: false,
            coastline: CoastlineShape::Rectangle,
            border_width: 2,
            fade_out_tiles: true,
        }
    }
}

impl GeneratorConfig {
    pub fn layer_count(&self) -> usize {
        self.markers.len()
    }

    /// Check every option and reconcile the weight table.
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        if self.markers.is_empty() {
            return Err(ConfigError::NoLayers);
        }
        let dims_ok = |d: usize| (1..=MAX_DIMENSION).contains(&d);
        if !dims_ok(self.width) || !dims_ok(self.height) {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
                max: MAX_DIMENSION,
            });
        }
        if !self.scale.is_finite() || self.scale <= 0.0 || self.scale > 1.0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        if !self.seed.is_finite() {
            return Err(ConfigError::InvalidSeed(self.seed));
        }
        if self.border_width > MAX_DIMENSION {
            return Err(ConfigError::InvalidBorder { value: self.border_width, max: MAX_DIMENSION });
        }
        let weights = WeightTable::reconcile(&self.weights, self.layer_count())?;

        let centered = self.centered || self.coastline.requires_centered();
        if centered && !self.centered {
            tracing::debug!(
                target: LOG_TARGET,
                coastline = ?self.coastline,
                "config.centered_forced"
            );
        }

        Ok(ValidatedConfig {
            markers: self.markers.clone(),
            weights,
            width: self.width,
            height: self.height,
            scale: self.scale,
            seed: self.seed,
            centered,
            coastline: self.coastline,
            border_width: self.border_width,
            fade_out_tiles: self.fade_out_tiles,
        })
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(
            target: LOG_TARGET,
            path = %path.display(),
            layers = config.layer_count(),
            "config.loaded"
        );
        Ok(config)
    }

    /// Replace the seed with one drawn from `rng`.
    pub fn with_random_seed<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.seed = rng.gen_range(0..RANDOM_SEED_RANGE) as f64;
        self
    }
}

/// A config that passed validation, with the weight table reconciled and
/// `centered` resolved against the coastline shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    pub markers: Vec<String>,
    pub weights: WeightTable,
    pub width: usize,
    pub height: usize,
    pub scale: f64,
    pub seed: f64,
    pub centered: bool,
    pub coastline: CoastlineShape,
    pub border_width: usize,
    pub fade_out_tiles: bool,
}

impl ValidatedConfig {
    pub fn layer_count(&self) -> usize {
        self.weights.layer_count()
    }

    pub fn transform(&self) -> CellTransform {
        CellTransform::new(self.width, self.height, self.centered)
    }
}
