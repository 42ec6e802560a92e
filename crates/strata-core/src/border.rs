//! Ring of layer-0 cells painted outside the grid.

use crate::coords::{CellTransform, MapPos};
use crate::sink::TileSink;

/// Whether a border of `border_width` is worth painting. Maps too small to
/// hold a full coastline band on both sides get none.
pub fn can_extend(border_width: usize, layer_count: usize, width: usize, height: usize) -> bool {
    border_width > 0 && layer_count > 0 && width > 2 * layer_count && height > 2 * layer_count
}

/// Paint `border_width` rings of layer 0 around `[0, width) × [0, height)`.
///
/// Two sweeps: full-width strips above and below the grid (these carry the
/// corners), then strips left and right of the grid's own rows. Every ring
/// cell is painted exactly once, in cell-space coordinates. A ring whose far
/// edge doesn't fit in `i32` cell coordinates paints nothing.
pub fn extend_border<S: TileSink + ?Sized>(sink: &mut S, transform: &CellTransform, border_width: usize) {
    let (Ok(w), Ok(h), Ok(b)) =
        (i32::try_from(transform.width()), i32::try_from(transform.height()), i32::try_from(border_width))
    else {
        return;
    };
    if w.checked_add(b).is_none() || h.checked_add(b).is_none() {
        return;
    }
    let mut paint = |map: MapPos| {
        let c = transform.map_to_cell(map);
        sink.paint(0, c.x, c.y);
    };

    for x in -b..w + b {
        for y in (-b..0).chain(h..h + b) {
            paint(MapPos::new(x, y));
        }
    }
    for y in 0..h {
        for x in (-b..0).chain(w..w + b) {
            paint(MapPos::new(x, y));
        }
    }
}
