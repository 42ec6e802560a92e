use serde::Serialize;

use crate::grid::GridModel;

/// Cell count per layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerHistogram {
    pub counts: Vec<usize>,
}

impl LayerHistogram {
    pub fn from_grid(grid: &GridModel, layer_count: usize) -> Self {
        let mut counts = vec![0usize; layer_count];
        for cell in grid.cells() {
            if let Some(n) = counts.get_mut(cell.layer) {
                *n += 1;
            }
        }
        Self { counts }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of cells at `layer`, 0 for an empty grid or unknown layer.
    pub fn fraction(&self, layer: usize) -> f32 {
        let total = self.total();
        match self.counts.get(layer) {
            Some(&n) if total > 0 => n as f32 / total as f32,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::CellTransform;
    use crate::noise_field::NoiseField;
    use crate::sink::UniformMapping;
    use crate::weights::WeightTable;

    #[test]
    fn counts_cover_every_cell() {
        let table = WeightTable::reconcile(&[1.0, 1.0, 1.0], 3).unwrap();
        let field = NoiseField::new(2.0, 0.5, 20, 15).fill().normalize();
        let grid = GridModel::classify(&field, &table, CellTransform::new(20, 15, false), &UniformMapping::default());
        let hist = LayerHistogram::from_grid(&grid, 3);
        assert_eq!(hist.total(), 20 * 15);
        let sum: f32 = (0..3).map(|l| hist.fraction(l)).sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert_eq!(hist.fraction(7), 0.0);
    }
}
