//! Coherent-noise sampling and min/max normalization.
//!
//! Each cell `(x, y)` samples 2D Perlin noise at
//! `((x + seed) / width / scale, (y + seed) / height / scale)`, remapped from
//! Perlin's ±1 output to [0, 1]. The fill pass tracks the observed extremes,
//! and normalization rescales the field so the lowest sample is 0 and the
//! highest is 1.
use noise::{NoiseFn, Perlin};

/// Permutation-table seed. Variation between maps comes from the float
/// `seed` coordinate offset, not from re-permuting the lattice.
const PERLIN_SEED: u32 = 0;

pub struct NoiseField {
    perlin: Perlin,
    seed: f64,
    scale: f64,
    width: usize,
    height: usize,
}

impl NoiseField {
    pub fn new(seed: f64, scale: f64, width: usize, height: usize) -> Self {
        Self { perlin: Perlin::new(PERLIN_SEED), seed, scale, width, height }
    }

    /// Raw noise value in [0, 1] at map cell `(x, y)`.
    pub fn sample(&self, x: usize, y: usize) -> f32 {
        let nx = (x as f64 + self.seed) / self.width as f64 / self.scale;
        let ny = (y as f64 + self.seed) / self.height as f64 / self.scale;
        ((self.perlin.get([nx, ny]) + 1.0) * 0.5).clamp(0.0, 1.0) as f32
    }

    /// Sample every cell row-major, tracking min/max along the way.
    pub fn fill(&self) -> RawField {
        let mut data = Vec::with_capacity(self.width * self.height);
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for y in 0..self.height {
            for x in 0..self.width {
                let v = self.sample(x, y);
                min = min.min(v);
                max = max.max(v);
                data.push(v);
            }
        }
        RawField { data, width: self.width, height: self.height, min, max }
    }
}

/// Un-normalized samples plus the extremes seen while filling.
#[derive(Debug, Clone)]
pub struct RawField {
    /// Row-major raw samples.
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
    pub min: f32,
    pub max: f32,
}

impl RawField {
    /// Rescale to [0, 1] using the tracked extremes.
    ///
    /// A flat field (`max == min`, or an empty grid) has no usable range; every
    /// cell is then set to 0 and `degenerate` is raised.
    pub fn normalize(self) -> NormalizedField {
        let range = self.max - self.min;
        if !range.is_finite() || range <= 0.0 {
            return NormalizedField {
                data: vec![0.0; self.data.len()],
                width: self.width,
                height: self.height,
                degenerate: true,
            };
        }
        let min = self.min;
        let data = self.data.into_iter().map(|v| ((v - min) / range).clamp(0.0, 1.0)).collect();
        NormalizedField { data, width: self.width, height: self.height, degenerate: false }
    }
}

/// Noise values rescaled to [0, 1].
#[derive(Debug, Clone)]
pub struct NormalizedField {
    /// Row-major normalized values.
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
    /// Set when the raw field was flat and every value was forced to 0.
    pub degenerate: bool,
}

impl NormalizedField {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }
}
