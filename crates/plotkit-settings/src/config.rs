//! Persisted configuration sections.
//!
//! Defaults for the machine connection and for plot parameters, kept
//! in TOML under the platform config directory. CLI flags override
//! these per run; nothing here is consulted by the compiler itself,
//! which only ever sees a fully-resolved [`PlotConfig`].

use plotkit_core::{PlotConfig, WorkArea};
use serde::{Deserialize, Serialize};

use crate::error::SettingsResult;

/// Machine connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineSettings {
    /// Hostname or IP of the plotter's HTTP control interface.
    pub host: String,
    /// Request deadline in seconds.
    pub timeout_secs: u64,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            host: "plotter.local".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Default plot parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    /// Work area width in millimeters.
    pub width: f64,
    /// Work area height in millimeters.
    pub height: f64,
    /// Pen-up Z offset in machine units.
    pub lift_height: f64,
    /// Feed rate in machine units per minute.
    pub feed_rate: u32,
    /// Curve flattening tolerance.
    pub tolerance: f64,
    /// Mirror plots top-to-bottom by default.
    pub flip_vertical: bool,
    /// Mirror plots left-to-right by default.
    pub flip_horizontal: bool,
    /// Reorder strokes to shorten travel.
    pub optimize: bool,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            lift_height: 5.0,
            feed_rate: 10_000,
            tolerance: 0.1,
            flip_vertical: false,
            flip_horizontal: false,
            optimize: false,
        }
    }
}

/// The complete persisted configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub machine: MachineSettings,
    pub plot: PlotSettings,
}

impl Config {
    /// Resolve the persisted plot defaults into a compiler config.
    pub fn plot_config(&self) -> PlotConfig {
        PlotConfig {
            work_area: WorkArea::new(self.plot.width, self.plot.height),
            lift_height: self.plot.lift_height,
            feed_rate: self.plot.feed_rate,
            tolerance: self.plot.tolerance,
            flip_vertical: self.plot.flip_vertical,
            flip_horizontal: self.plot.flip_horizontal,
            optimize: self.plot.optimize,
        }
    }

    /// Validate the plot section against compiler preconditions.
    pub fn validate(&self) -> SettingsResult<()> {
        self.plot_config().validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_plot_config_resolution() {
        let mut config = Config::default();
        config.plot.width = 210.0;
        config.plot.flip_vertical = true;
        config.plot.optimize = true;

        let plot = config.plot_config();
        assert_eq!(plot.work_area.width, 210.0);
        assert!(plot.flip_vertical);
        assert!(!plot.flip_horizontal);
        assert!(plot.optimize);
    }

    #[test]
    fn test_invalid_plot_section_rejected() {
        let mut config = Config::default();
        config.plot.feed_rate = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[machine]\nhost = \"10.0.0.5\"\n").unwrap();
        assert_eq!(config.machine.host, "10.0.0.5");
        assert_eq!(config.plot, PlotSettings::default());
    }
}
