//! Edge overlap ("fade-out") painting.
//!
//! Every cell at layer `L` stamps layer `L`'s marker onto each of its eight
//! neighbours that sit at layer `L - 1`, giving a one-cell halo of each layer
//! over the layer beneath it. Hosts whose markers only define fade-outs use
//! the halo instead of full adjacency rules.

use crate::coords::MapPos;
use crate::grid::{Cell, GridModel};
use crate::sink::TileSink;

/// N, NE, E, SE, S, SW, W, NW in map space (y grows downward).
const NEIGHBOURS: [(i32, i32); 8] = [(0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1)];

/// Paint the overlap halo for the whole grid. Writes only depend on the
/// classified grid, so traversal order doesn't matter; a neighbour reached
/// from several cells is painted with the same marker each time.
pub fn paint_overlap<S: TileSink + ?Sized>(grid: &GridModel, sink: &mut S) {
    for cell in grid.cells() {
        if cell.layer == 0 {
            continue;
        }
        let lower = cell.layer - 1;
        for n in neighbours(grid, cell.map).filter(|n| n.layer == lower) {
            sink.paint(cell.layer, n.cell.x, n.cell.y);
        }
    }
}

/// In-grid neighbours of `map`, in [`NEIGHBOURS`] order.
pub fn neighbours(grid: &GridModel, map: MapPos) -> impl Iterator<Item = &Cell> + '_ {
    NEIGHBOURS.iter().filter_map(move |&(dx, dy)| grid.at_map(map.offset(dx, dy)))
}
