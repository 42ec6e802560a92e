//! Capabilities the generator needs from its host: somewhere to paint layer
//! markers, and a cell ↔ world mapping.

use std::collections::BTreeSet;

use crate::coords::{CellPos, WorldPos};

/// Receives "paint layer `layer`'s marker at cell `(x, y)`" commands.
///
/// Coordinates are in cell space (the caller-visible, possibly centered frame)
/// and may lie outside the grid when the border ring is painted.
pub trait TileSink {
    fn paint(&mut self, layer: usize, x: i32, y: i32);

    /// Called once per full regeneration before any painting, so the host can
    /// (re)create one output target per layer.
    fn prepare_layers(&mut self, _layer_count: usize) {}
}

/// Host mapping between grid cells and world positions.
pub trait CellMapping {
    fn cell_to_world(&self, cell: CellPos) -> WorldPos;
    fn world_to_cell(&self, world: WorldPos) -> CellPos;
}

/// Square cells of side `cell_size`, cell (0, 0) covering
/// `[origin, origin + cell_size)` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformMapping {
    pub cell_size: f64,
    pub origin: WorldPos,
}

impl UniformMapping {
    pub fn new(cell_size: f64, origin: WorldPos) -> Self {
        Self { cell_size, origin }
    }
}

impl Default for UniformMapping {
    fn default() -> Self {
        Self { cell_size: 1.0, origin: WorldPos::default() }
    }
}

impl CellMapping for UniformMapping {
    /// Centre of the cell.
    fn cell_to_world(&self, cell: CellPos) -> WorldPos {
        WorldPos::new(
            self.origin.x + (cell.x as f64 + 0.5) * self.cell_size,
            self.origin.y + (cell.y as f64 + 0.5) * self.cell_size,
        )
    }

    fn world_to_cell(&self, world: WorldPos) -> CellPos {
        CellPos::new(
            ((world.x - self.origin.x) / self.cell_size).floor() as i32,
            ((world.y - self.origin.y) / self.cell_size).floor() as i32,
        )
    }
}

/// One recorded paint command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Paint {
    pub layer: usize,
    pub cell: CellPos,
}

/// Sink that keeps every paint command in call order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub paints: Vec<Paint>,
    /// Layer count passed to the most recent `prepare_layers`.
    pub prepared: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct cells painted with `layer`.
    pub fn painted(&self, layer: usize) -> BTreeSet<CellPos> {
        self.paints.iter().filter(|p| p.layer == layer).map(|p| p.cell).collect()
    }

    /// Distinct (layer, cell) pairs, ignoring repeats and order.
    pub fn painted_set(&self) -> BTreeSet<Paint> {
        self.paints.iter().copied().collect()
    }

    /// Highest layer painted at `cell`, if any.
    pub fn top_layer(&self, cell: CellPos) -> Option<usize> {
        self.paints.iter().filter(|p| p.cell == cell).map(|p| p.layer).max()
    }

    pub fn clear(&mut self) {
        self.paints.clear();
        self.prepared = None;
    }
}

impl TileSink for RecordingSink {
    fn paint(&mut self, layer: usize, x: i32, y: i32) {
        self.paints.push(Paint { layer, cell: CellPos::new(x, y) });
    }

    fn prepare_layers(&mut self, layer_count: usize) {
        self.paints.clear();
        self.prepared = Some(layer_count);
    }
}
