//! Per-layer weight reconciliation.
//!
//! Callers may supply fewer weights than layers (missing ones default to
//! [`DEFAULT_WEIGHT`]) or more (the extras are ignored). The reconciled table
//! is built once per generation pass and shared by classification and
//! coastline shaping.

use crate::error::ConfigError;

/// Weight given to a layer with no supplied weight.
pub const DEFAULT_WEIGHT: f32 = 1.0;

const LOG_TARGET: &str = "strata::weights";

/// Effective weights for exactly `layer_count` layers.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    weights: Vec<f32>,
    /// `cumulative[i]` = sum of `weights[0..=i]`.
    cumulative: Vec<f32>,
}

impl WeightTable {
    pub fn reconcile(weights: &[f32], layer_count: usize) -> Result<Self, ConfigError> {
        if layer_count < 1 {
            return Err(ConfigError::NoLayers);
        }
        if weights.len() < layer_count {
            tracing::warn!(
                target: LOG_TARGET,
                supplied = weights.len(),
                layer_count,
                default_weight = DEFAULT_WEIGHT,
                "weights.defaulted"
            );
        } else if weights.len() > layer_count {
            tracing::debug!(
                target: LOG_TARGET,
                supplied = weights.len(),
                layer_count,
                "weights.truncated"
            );
        }

        let effective: Vec<f32> = (0..layer_count)
            .map(|i| weights.get(i).copied().unwrap_or(DEFAULT_WEIGHT))
            .collect();
        if let Some((index, &value)) =
            effective.iter().enumerate().find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(ConfigError::InvalidWeight { index, value });
        }

        let mut cumulative = Vec::with_capacity(layer_count);
        let mut acc = 0.0f32;
        for &w in &effective {
            acc += w;
            cumulative.push(acc);
        }
        if acc <= 0.0 {
            return Err(ConfigError::ZeroTotalWeight);
        }

        Ok(Self { weights: effective, cumulative })
    }

    pub fn layer_count(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Sum of all effective weights.
    pub fn total(&self) -> f32 {
        // reconcile guarantees at least one layer
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Sum of weights for layers `0..=layer`.
    pub fn cumulative(&self, layer: usize) -> f32 {
        self.cumulative[layer.min(self.cumulative.len() - 1)]
    }

    /// Sum of weights for layers `0..layer`; 0 for layer 0.
    pub fn cumulative_before(&self, layer: usize) -> f32 {
        match layer {
            0 => 0.0,
            l => self.cumulative(l - 1),
        }
    }

    /// Lower edge of `layer`'s bucket, normalized to [0, 1]. Classifies back
    /// to `layer` whenever its weight is non-zero.
    pub fn floor(&self, layer: usize) -> f32 {
        self.cumulative_before(layer) / self.total()
    }
}
