//! Pipeline orchestrator: runs every stage in order and owns the result.
//!
//! Pipeline order:
//!   1. Validate config and reconcile weights
//!   2. Noise fill (tracking min/max) and normalization
//!   3. Layer classification
//!   4. Coastline shaping
//!   5. Painting: base layer, border ring, overlap halo
//!
//! Stages 1-4 build a fresh [`GridModel`] off to the side; it replaces the
//! previous grid only once complete, so a rejected config leaves the last good
//! map untouched and readers never see a half-built grid.

use crate::border::{can_extend, extend_border};
use crate::coastline;
use crate::config::{GeneratorConfig, ValidatedConfig};
use crate::coords::{CellPos, MapPos, WorldPos};
use crate::error::ConfigError;
use crate::grid::{Cell, GridModel};
use crate::noise_field::NoiseField;
use crate::overlap::paint_overlap;
use crate::sink::{CellMapping, TileSink, UniformMapping};
use crate::stats::LayerHistogram;

const LOG_TARGET: &str = "strata::generator";

/// Build the classified, shaped grid for `config`. No painting.
pub fn build_grid<M: CellMapping + ?Sized>(config: &ValidatedConfig, mapping: &M) -> GridModel {
    let field = NoiseField::new(config.seed, config.scale, config.width, config.height)
        .fill()
        .normalize();
    if field.degenerate {
        tracing::debug!(
            target: LOG_TARGET,
            width = config.width,
            height = config.height,
            "generate.degenerate_field"
        );
    }
    let grid = GridModel::classify(&field, &config.weights, config.transform(), mapping);
    coastline::shape(grid, config.coastline, &config.weights)
}

/// Paint `grid` into `sink`: one marker per cell, then the optional border
/// ring and overlap halo.
pub fn paint_grid<S: TileSink + ?Sized>(grid: &GridModel, config: &ValidatedConfig, sink: &mut S) {
    sink.prepare_layers(config.layer_count());
    for cell in grid.cells() {
        sink.paint(cell.layer, cell.cell.x, cell.cell.y);
    }

    if config.border_width > 0 {
        if can_extend(config.border_width, config.layer_count(), config.width, config.height) {
            extend_border(sink, grid.transform(), config.border_width);
        } else {
            tracing::debug!(
                target: LOG_TARGET,
                border_width = config.border_width,
                layers = config.layer_count(),
                width = config.width,
                height = config.height,
                "generate.border_skipped"
            );
        }
    }

    if config.fade_out_tiles {
        paint_overlap(grid, sink);
    }
}

/// Owns the configuration and the most recently generated grid.
pub struct Generator<M: CellMapping = UniformMapping> {
    config: GeneratorConfig,
    mapping: M,
    /// Config the current grid was built from.
    applied: Option<ValidatedConfig>,
    grid: Option<GridModel>,
}

impl<M: CellMapping> Generator<M> {
    pub fn new(config: GeneratorConfig, mapping: M) -> Self {
        Self { config, mapping, applied: None, grid: None }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Edits take effect on the next [`regenerate`](Self::regenerate).
    pub fn config_mut(&mut self) -> &mut GeneratorConfig {
        &mut self.config
    }

    pub fn mapping(&self) -> &M {
        &self.mapping
    }

    /// Run the pipeline.
    ///
    /// With `reuse_existing_layout` the sink is not touched at all: no layer
    /// targets are recreated and nothing is painted; only the grid data is
    /// recomputed. Otherwise the sink's layers are prepared and the full map
    /// is painted.
    ///
    /// On `Err` the previous grid (if any) stays in place.
    pub fn regenerate<S: TileSink + ?Sized>(
        &mut self,
        sink: &mut S,
        reuse_existing_layout: bool,
    ) -> Result<&GridModel, ConfigError> {
        let validated = self.config.validate().map_err(|err| {
            tracing::warn!(target: LOG_TARGET, error = %err, "generate.config_rejected");
            err
        })?;

        let grid = build_grid(&validated, &self.mapping);
        if !reuse_existing_layout {
            paint_grid(&grid, &validated, sink);
        }

        let histogram = LayerHistogram::from_grid(&grid, validated.layer_count());
        tracing::info!(
            target: LOG_TARGET,
            width = validated.width,
            height = validated.height,
            seed = validated.seed,
            coastline = ?validated.coastline,
            reuse_existing_layout,
            counts = ?histogram.counts,
            "generate.done"
        );

        self.applied = Some(validated);
        Ok(self.grid.insert(grid))
    }

    /// `None` until the first successful generation.
    pub fn grid(&self) -> Option<&GridModel> {
        self.grid.as_ref()
    }

    /// Cell at 0-based grid coordinate `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        let (x, y) = (i32::try_from(x).ok()?, i32::try_from(y).ok()?);
        self.grid.as_ref()?.at_map(MapPos::new(x, y))
    }

    /// Cell at a caller coordinate (centered frame when enabled).
    pub fn cell_at(&self, pos: CellPos) -> Option<&Cell> {
        self.grid.as_ref()?.at_cell(pos)
    }

    /// Cell containing a world position, via the host mapping.
    pub fn cell_at_world(&self, world: WorldPos) -> Option<&Cell> {
        self.cell_at(self.mapping.world_to_cell(world))
    }

    /// Marker of `layer` in the config the current grid was built from.
    pub fn marker(&self, layer: usize) -> Option<&str> {
        self.applied.as_ref()?.markers.get(layer).map(String::as_str)
    }

    pub fn histogram(&self) -> Option<LayerHistogram> {
        let (grid, applied) = (self.grid.as_ref()?, self.applied.as_ref()?);
        Some(LayerHistogram::from_grid(grid, applied.layer_count()))
    }
}
