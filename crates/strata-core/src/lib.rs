//! Layered island grid generation.
//!
//! A noise field is bucketed into ordered layers by weight, the map boundary
//! is pulled down toward layer 0 (rectangular inset or elliptical mask), and
//! the result is painted into a host-supplied [`TileSink`], optionally with
//! a border ring and per-layer overlap halos.

pub mod border;
pub mod classify;
pub mod coastline;
pub mod config;
pub mod coords;
pub mod error;
pub mod generator;
pub mod grid;
pub mod noise_field;
pub mod overlap;
pub mod sink;
pub mod stats;
pub mod weights;

pub use coastline::CoastlineShape;
pub use config::{GeneratorConfig, ValidatedConfig};
pub use coords::{CellPos, CellTransform, MapPos, WorldPos};
pub use error::{ConfigError, LoadError};
pub use generator::Generator;
pub use grid::{Cell, GridModel};
pub use sink::{CellMapping, RecordingSink, TileSink, UniformMapping};
pub use stats::LayerHistogram;
pub use weights::WeightTable;
