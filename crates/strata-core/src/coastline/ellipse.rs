//! Elliptical mask: everything outside the ellipse inscribed in the grid
//! becomes layer 0, and cells just inside its boundary fade down toward
//! layer 0 along inward diagonals.
//!
//! Geometry runs in the centered frame, `a = width / 2` and `b = height / 2`.
//! Rows are swept from the equator (`y = 0`) out to each pole. At row `y` the
//! boundary column is [`edge_column`]; cells with `|x| >= edge` are flooded.
//! The last inside column `edge - 1` anchors a diagonal walking back toward
//! the centre: the `k`-th step, at `(edge - 1 - k, |y| - k)`, is capped at
//! depth `k + 1`, mirrored into every quadrant. When the edge shrinks by more
//! than one column between rows, each skipped column is also an anchor on the
//! previous row, so a stepped coastline never leaves an uncapped land cell
//! touching water. The pole rows have an edge of zero, which floods them and
//! back-fills the row beneath.
use crate::coords::{CellPos, CellTransform};
use crate::grid::GridModel;
use crate::weights::WeightTable;

/// First `|x|` outside the ellipse on the row `dy` rows from the equator.
///
/// For even widths the column at `+width / 2` doesn't exist in the centered
/// frame, so an edge landing exactly there is pulled in by one.
pub fn edge_column(dy: i32, width: usize, height: usize) -> i32 {
    let a = width as f64 / 2.0;
    let b = height as f64 / 2.0;
    let dy = dy as f64;
    let t = 1.0 - (dy * dy) / (b * b);
    if t <= 0.0 {
        return 0;
    }
    let edge = (t * a * a).sqrt().round() as i32;
    if width % 2 == 0 && edge == (width / 2) as i32 {
        edge - 1
    } else {
        edge
    }
}

pub fn apply_elliptical_mask(grid: &mut GridModel, table: &WeightTable) {
    let frame = CellTransform::new(grid.width(), grid.height(), true);
    let (min, max) = frame.cell_bounds();
    let max_depth = table.layer_count() as i32 - 1;

    for sy in [-1, 1] {
        let mut prev_edge: Option<i32> = None;
        for dy in 0.. {
            let y = sy * dy;
            if y < min.y || y > max.y {
                break;
            }
            let edge = if y == min.y || y == max.y {
                0
            } else {
                edge_column(dy, grid.width(), grid.height())
            };

            for x in min.x..=max.x {
                if x.abs() >= edge {
                    grid.flood(frame.cell_to_map(CellPos::new(x, y)));
                }
            }

            let mut fade = |anchor_x: i32, anchor_dy: i32| {
                for k in 0..max_depth {
                    let (ax, ay) = (anchor_x - k, anchor_dy - k);
                    if ax < 0 || ay < 0 {
                        break;
                    }
                    for sx in [-1, 1] {
                        let map = frame.cell_to_map(CellPos::new(sx * ax, sy * ay));
                        grid.clamp_to_depth(map, (k + 1) as usize, table);
                    }
                }
            };

            fade(edge - 1, dy);
            if let Some(prev) = prev_edge {
                for col in edge..prev - 1 {
                    fade(col, dy - 1);
                }
            }
            prev_edge = Some(edge);
        }
    }
}
