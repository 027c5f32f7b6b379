//! # Plotkit Settings
//!
//! Persisted defaults for the CLI: machine address and plot
//! parameters, stored as TOML in the platform config directory.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, MachineSettings, PlotSettings};
pub use error::{SettingsError, SettingsResult};
pub use persistence::{config_path, load, load_from, save, save_to};
