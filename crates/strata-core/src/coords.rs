//! Grid coordinate types and the cell ↔ map transform.
//!
//! Map space is internal and always 0-based: `0 <= x < width`, `0 <= y < height`.
//! Cell space is what callers see. When the transform is centered, cell
//! (0, 0) sits at map (width / 2, height / 2); otherwise the two coincide.
//! Positions outside the grid are representable in both spaces (the border
//! ring lives there).

use serde::{Deserialize, Serialize};

/// Caller-visible grid coordinate. Negative when the transform is centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Internal 0-based grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MapPos {
    pub x: i32,
    pub y: i32,
}

impl MapPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Position in the consumer's world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f64,
    pub y: f64,
}

impl WorldPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pure, invertible mapping between cell space and map space for one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellTransform {
    width: usize,
    height: usize,
    centered: bool,
}

impl CellTransform {
    pub fn new(width: usize, height: usize, centered: bool) -> Self {
        Self { width, height, centered }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn centered(&self) -> bool {
        self.centered
    }

    /// Map-space position of cell (0, 0).
    #[inline]
    fn origin(&self) -> (i32, i32) {
        if self.centered {
            ((self.width / 2) as i32, (self.height / 2) as i32)
        } else {
            (0, 0)
        }
    }

    #[inline]
    pub fn cell_to_map(&self, cell: CellPos) -> MapPos {
        let (ox, oy) = self.origin();
        MapPos::new(cell.x + ox, cell.y + oy)
    }

    #[inline]
    pub fn map_to_cell(&self, map: MapPos) -> CellPos {
        let (ox, oy) = self.origin();
        CellPos::new(map.x - ox, map.y - oy)
    }

    /// True if `map` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, map: MapPos) -> bool {
        map.x >= 0 && map.y >= 0 && (map.x as usize) < self.width && (map.y as usize) < self.height
    }

    /// Row-major index of `map`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, map: MapPos) -> Option<usize> {
        self.contains(map).then(|| map.y as usize * self.width + map.x as usize)
    }

    /// Inclusive (min, max) corners of the grid in cell space.
    pub fn cell_bounds(&self) -> (CellPos, CellPos) {
        let min = self.map_to_cell(MapPos::new(0, 0));
        let max = self.map_to_cell(MapPos::new(self.width as i32 - 1, self.height as i32 - 1));
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_map_positions(t: &CellTransform) -> impl Iterator<Item = MapPos> + '_ {
        (0..t.height() as i32).flat_map(move |y| (0..t.width() as i32).map(move |x| MapPos::new(x, y)))
    }

    #[test]
    fn roundtrip_is_identity_in_both_modes() {
        for &(w, h) in &[(1, 1), (10, 10), (7, 4), (33, 16)] {
            for centered in [false, true] {
                let t = CellTransform::new(w, h, centered);
                for m in all_map_positions(&t) {
                    let c = t.map_to_cell(m);
                    assert_eq!(t.cell_to_map(c), m, "map roundtrip failed at {m:?} ({w}x{h}, centered={centered})");
                    assert_eq!(t.map_to_cell(t.cell_to_map(c)), c);
                }
            }
        }
    }

    #[test]
    fn roundtrip_holds_outside_the_grid() {
        let t = CellTransform::new(10, 6, true);
        let c = CellPos::new(-9, 12);
        assert_eq!(t.map_to_cell(t.cell_to_map(c)), c);
    }

    #[test]
    fn centered_origin_is_grid_middle() {
        let t = CellTransform::new(10, 7, true);
        assert_eq!(t.cell_to_map(CellPos::new(0, 0)), MapPos::new(5, 3));
        let (min, max) = t.cell_bounds();
        assert_eq!(min, CellPos::new(-5, -3));
        assert_eq!(max, CellPos::new(4, 3));
    }

    #[test]
    fn uncentered_is_identity() {
        let t = CellTransform::new(8, 8, false);
        assert_eq!(t.cell_to_map(CellPos::new(3, 5)), MapPos::new(3, 5));
        assert_eq!(t.cell_bounds(), (CellPos::new(0, 0), CellPos::new(7, 7)));
    }

    #[test]
    fn index_rejects_out_of_range() {
        let t = CellTransform::new(4, 3, false);
        assert_eq!(t.index(MapPos::new(0, 0)), Some(0));
        assert_eq!(t.index(MapPos::new(3, 2)), Some(11));
        assert_eq!(t.index(MapPos::new(4, 0)), None);
        assert_eq!(t.index(MapPos::new(0, 3)), None);
        assert_eq!(t.index(MapPos::new(-1, 1)), None);
    }
}
