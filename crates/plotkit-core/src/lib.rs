//! # Plotkit Core
//!
//! Core value types for the plotter pipeline: points, strokes, the
//! machine work area, the per-plot configuration bundle, and the
//! compact coordinate formatter used when emitting G-code.
//!
//! Everything here is a plain value with no I/O and no shared state.
//! A plot is compiled from an owned snapshot of these types and the
//! result is owned by the caller; nothing persists between calls.

pub mod config;
pub mod error;
pub mod format;
pub mod geometry;

pub use config::PlotConfig;
pub use error::{ConfigError, ConfigResult};
pub use format::format_coord;
pub use geometry::{Point, Stroke, WorkArea};
