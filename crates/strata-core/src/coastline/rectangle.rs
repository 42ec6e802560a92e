//! Rectangular inset: a band `layer_count` cells deep along each map edge,
//! where the cell at depth `d` is capped at layer `d`.
use crate::coords::MapPos;
use crate::grid::GridModel;
use crate::weights::WeightTable;

/// Run the four edge passes in fixed order: top (row 0), right, bottom, left.
/// Overlapping corner cells are visited by two passes; each pass can only
/// lower a cell, so the tighter cap is what remains.
pub fn apply_rectangular_inset(grid: &mut GridModel, table: &WeightTable) {
    let w = grid.width() as i32;
    let h = grid.height() as i32;
    let depth = table.layer_count() as i32;

    // top
    for d in 0..depth.min(h) {
        for x in 0..w {
            grid.clamp_to_depth(MapPos::new(x, d), d as usize, table);
        }
    }
    // right
    for d in 0..depth.min(w) {
        for y in 0..h {
            grid.clamp_to_depth(MapPos::new(w - 1 - d, y), d as usize, table);
        }
    }
    // bottom
    for d in 0..depth.min(h) {
        for x in 0..w {
            grid.clamp_to_depth(MapPos::new(x, h - 1 - d), d as usize, table);
        }
    }
    // left
    for d in 0..depth.min(w) {
        for y in 0..h {
            grid.clamp_to_depth(MapPos::new(d, y), d as usize, table);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coastline::test_support::classified;

    /// Distance from `(x, y)` to the nearest map edge.
    fn edge_depth(x: usize, y: usize, w: usize, h: usize) -> usize {
        x.min(y).min(w - 1 - x).min(h - 1 - y)
    }

    #[test]
    fn outermost_ring_is_layer_zero() {
        let (mut g, t) = classified(24, 18, 5.0, &[1.0, 1.0, 1.0, 1.0], false);
        apply_rectangular_inset(&mut g, &t);
        for c in g.cells() {
            let (x, y) = (c.map.x as usize, c.map.y as usize);
            if edge_depth(x, y, 24, 18) == 0 {
                assert_eq!(c.layer, 0, "edge cell {:?} not water", c.map);
            }
        }
    }

    #[test]
    fn band_cells_are_capped_by_depth() {
        let (mut g, t) = classified(30, 30, 9.0, &[2.0, 1.0, 1.0], false);
        apply_rectangular_inset(&mut g, &t);
        for c in g.cells() {
            let d = edge_depth(c.map.x as usize, c.map.y as usize, 30, 30);
            if d < t.layer_count() {
                assert!(c.layer <= d, "cell {:?} at depth {d} has layer {}", c.map, c.layer);
            }
        }
    }

    #[test]
    fn interior_is_untouched() {
        let (g0, t) = classified(30, 30, 9.0, &[1.0, 1.0, 1.0], false);
        let mut g = g0.clone();
        apply_rectangular_inset(&mut g, &t);
        for (b, a) in g0.cells().iter().zip(g.cells()) {
            if edge_depth(b.map.x as usize, b.map.y as usize, 30, 30) >= t.layer_count() {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn narrow_grid_stays_in_bounds() {
        let (mut g, t) = classified(2, 9, 1.0, &[1.0, 1.0, 1.0, 1.0, 1.0], false);
        apply_rectangular_inset(&mut g, &t);
        assert!(g.cells().iter().all(|c| c.layer == 0));
    }
}
