//! Coastline shaping: pull cells near the map boundary down toward layer 0
//! so the map reads as a landmass surrounded by the lowest layer.
//!
//! Both policies only ever lower a cell (see [`GridModel::clamp_to_depth`]),
//! so interior minima survive and no layer index increases.

pub mod ellipse;
pub mod rectangle;

use serde::{Deserialize, Serialize};

use crate::grid::GridModel;
use crate::weights::WeightTable;

pub use ellipse::apply_elliptical_mask;
pub use rectangle::apply_rectangular_inset;

/// Boundary treatment selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoastlineShape {
    None,
    #[default]
    Rectangle,
    Ellipse,
}

impl CoastlineShape {
    /// The ellipse is defined around the grid centre, so it always runs in the
    /// centered frame.
    pub fn requires_centered(self) -> bool {
        matches!(self, CoastlineShape::Ellipse)
    }
}

/// Apply `shape` to a freshly classified grid.
pub fn shape(mut grid: GridModel, shape: CoastlineShape, table: &WeightTable) -> GridModel {
    match shape {
        CoastlineShape::None => {}
        CoastlineShape::Rectangle => apply_rectangular_inset(&mut grid, table),
        CoastlineShape::Ellipse => apply_elliptical_mask(&mut grid, table),
    }
    grid
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::coords::CellTransform;
    use crate::grid::GridModel;
    use crate::noise_field::NoiseField;
    use crate::sink::UniformMapping;
    use crate::weights::WeightTable;

    pub fn classified(w: usize, h: usize, seed: f64, weights: &[f32], centered: bool) -> (GridModel, WeightTable) {
        let table = WeightTable::reconcile(weights, weights.len()).unwrap();
        let field = NoiseField::new(seed, 0.5, w, h).fill().normalize();
        let grid = GridModel::classify(&field, &table, CellTransform::new(w, h, centered), &UniformMapping::default());
        (grid, table)
    }
}
