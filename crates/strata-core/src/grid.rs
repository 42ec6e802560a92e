use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::coords::{CellPos, CellTransform, MapPos, WorldPos};
use crate::noise_field::NormalizedField;
use crate::sink::CellMapping;
use crate::weights::WeightTable;

/// One classified grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// 0-based position inside the matrix.
    pub map: MapPos,
    /// Caller-visible position (centered frame when enabled).
    pub cell: CellPos,
    /// World position resolved once through the host mapping.
    pub world: WorldPos,
    /// Normalized noise value in [0, 1].
    pub z: f32,
    pub layer: usize,
}

/// Dense `width × height` matrix of cells, row-major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridModel {
    cells: Vec<Cell>,
    transform: CellTransform,
}

impl GridModel {
    /// Classify every cell of `field` against `table`.
    pub fn classify<M: CellMapping + ?Sized>(
        field: &NormalizedField,
        table: &WeightTable,
        transform: CellTransform,
        mapping: &M,
    ) -> Self {
        let (w, h) = (field.width, field.height);
        let mut cells = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                let map = MapPos::new(x as i32, y as i32);
                let cell = transform.map_to_cell(map);
                let z = field.get(x, y);
                // A flat field is all layer 0 regardless of weights.
                let layer = if field.degenerate { 0 } else { classify(z, table) };
                cells.push(Cell { map, cell, world: mapping.cell_to_world(cell), z, layer });
            }
        }
        Self { cells, transform }
    }

    pub fn width(&self) -> usize {
        self.transform.width()
    }

    pub fn height(&self) -> usize {
        self.transform.height()
    }

    pub fn transform(&self) -> &CellTransform {
        &self.transform
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Lookup by map-space coordinate; `None` outside the grid.
    #[inline]
    pub fn at_map(&self, map: MapPos) -> Option<&Cell> {
        let idx = self.transform.index(map)?;
        Some(&self.cells[idx])
    }

    #[inline]
    pub fn at_map_mut(&mut self, map: MapPos) -> Option<&mut Cell> {
        let idx = self.transform.index(map)?;
        Some(&mut self.cells[idx])
    }

    /// Lookup by caller coordinate; `None` outside the grid.
    pub fn at_cell(&self, cell: CellPos) -> Option<&Cell> {
        self.at_map(self.transform.cell_to_map(cell))
    }

    /// Layer of the cell at map `(x, y)`.
    #[inline]
    pub fn layer(&self, x: usize, y: usize) -> Option<usize> {
        let (x, y) = (i32::try_from(x).ok()?, i32::try_from(y).ok()?);
        self.at_map(MapPos::new(x, y)).map(|c| c.layer)
    }

    /// Force the cell to layer 0 with `z = 0`. No-op outside the grid.
    pub fn flood(&mut self, map: MapPos) {
        if let Some(cell) = self.at_map_mut(map) {
            cell.z = 0.0;
            cell.layer = 0;
        }
    }

    /// Cap the cell at coastline depth `depth`: anything above the lower edge
    /// of bucket `depth` is forced to `(z = table.floor(depth), layer = depth)`,
    /// so `z` still classifies to `layer`. Never raises either. No-op outside
    /// the grid.
    pub fn clamp_to_depth(&mut self, map: MapPos, depth: usize, table: &WeightTable) {
        let Some(cell) = self.at_map_mut(map) else {
            return;
        };
        // `layer > depth` only fires on its own when the buckets between are
        // zero-weight; the band cap on the layer wins there.
        if cell.z * table.total() > table.cumulative_before(depth) || cell.layer > depth {
            cell.z = cell.z.min(table.floor(depth));
            cell.layer = cell.layer.min(depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise_field::NoiseField;
    use crate::sink::UniformMapping;

    fn model(w: usize, h: usize, centered: bool) -> GridModel {
        let field = NoiseField::new(0.0, 0.5, w, h).fill().normalize();
        let table = WeightTable::reconcile(&[1.0, 1.0, 1.0], 3).unwrap();
        GridModel::classify(&field, &table, CellTransform::new(w, h, centered), &UniformMapping::default())
    }

    #[test]
    fn every_cell_is_populated_and_in_range() {
        let g = model(12, 9, false);
        assert_eq!(g.cells().len(), 12 * 9);
        for y in 0..9 {
            for x in 0..12 {
                let layer = g.layer(x, y).unwrap();
                assert!(layer < 3, "layer {layer} out of range at ({x}, {y})");
            }
        }
    }

    #[test]
    fn lookups_agree_across_spaces() {
        let g = model(10, 8, true);
        let c = g.at_cell(CellPos::new(-5, -4)).unwrap();
        assert_eq!(c.map, MapPos::new(0, 0));
        let same = g.at_map(MapPos::new(0, 0)).unwrap();
        assert_eq!(c, same);
        assert_eq!(c.world, UniformMapping::default().cell_to_world(c.cell));
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let g = model(6, 6, true);
        assert!(g.at_cell(CellPos::new(3, 0)).is_none());
        assert!(g.at_cell(CellPos::new(0, -4)).is_none());
        assert!(g.at_map(MapPos::new(-1, 0)).is_none());
        assert!(g.layer(6, 0).is_none());
    }

    #[test]
    fn clamp_to_depth_never_raises() {
        let table = WeightTable::reconcile(&[1.0, 1.0, 1.0], 3).unwrap();
        let mut g = model(16, 16, false);
        let before = g.cells().to_vec();
        for y in 0..16 {
            for x in 0..16 {
                g.clamp_to_depth(MapPos::new(x, y), 1, &table);
            }
        }
        for (b, a) in before.iter().zip(g.cells()) {
            assert!(a.layer <= b.layer.min(1));
            assert!(a.z <= b.z);
        }
    }

    #[test]
    fn clamped_cells_classify_to_their_layer() {
        let table = WeightTable::reconcile(&[1.0, 1.0, 1.0], 3).unwrap();
        let mut g = model(16, 16, false);
        for y in 0..16 {
            for x in 0..16 {
                g.clamp_to_depth(MapPos::new(x, y), (x as usize + y as usize) % 3, &table);
            }
        }
        for c in g.cells() {
            assert_eq!(classify(c.z, &table), c.layer, "{:?} z={} layer={}", c.map, c.z, c.layer);
        }
    }

    #[test]
    fn depth_zero_clamp_is_water() {
        let table = WeightTable::reconcile(&[1.0, 1.0, 1.0], 3).unwrap();
        let mut g = model(8, 8, false);
        for x in 0..8 {
            g.clamp_to_depth(MapPos::new(x, 0), 0, &table);
        }
        for x in 0..8 {
            let c = g.at_map(MapPos::new(x, 0)).unwrap();
            assert_eq!((c.z, c.layer), (0.0, 0));
        }
    }

    #[test]
    fn layer_lookup_rejects_coordinates_past_i32() {
        let g = model(4, 4, false);
        assert_eq!(g.layer(i32::MAX as usize + 1, 0), None);
        assert_eq!(g.layer(0, usize::MAX), None);
        assert!(g.layer(3, 3).is_some());
    }

    #[test]
    fn flood_outside_grid_is_ignored() {
        let mut g = model(4, 4, false);
        let before = g.cells().to_vec();
        g.flood(MapPos::new(-1, 2));
        g.flood(MapPos::new(4, 4));
        assert_eq!(g.cells(), &before[..]);
    }
}
