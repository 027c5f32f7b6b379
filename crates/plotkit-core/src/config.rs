//! Per-plot compilation parameters.
//!
//! One immutable, validated bundle passed by value into the compiler,
//! replacing the ad hoc per-request parameter scatter of earlier
//! iterations of this system.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::geometry::WorkArea;

/// Parameters for a single compilation run.
///
/// Constructed fresh per plot; the compiler takes it by reference and
/// holds nothing afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Drawable region in machine millimeters.
    pub work_area: WorkArea,
    /// Z offset for pen-up (non-drawing) moves, in machine units.
    pub lift_height: f64,
    /// Commanded traversal speed in machine units per minute.
    pub feed_rate: u32,
    /// Curve flattening tolerance handed to SVG ingestion.
    pub tolerance: f64,
    /// Mirror the drawing top-to-bottom inside the work area.
    pub flip_vertical: bool,
    /// Mirror the drawing left-to-right inside the work area.
    pub flip_horizontal: bool,
    /// Reorder strokes with the nearest-neighbor heuristic.
    pub optimize: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            work_area: WorkArea::new(100.0, 100.0),
            lift_height: 5.0,
            feed_rate: 10_000,
            tolerance: 0.1,
            flip_vertical: false,
            flip_horizontal: false,
            optimize: false,
        }
    }
}

impl PlotConfig {
    /// Check field preconditions.
    ///
    /// The compiler itself is total over well-formed input; this is
    /// the single place ill-formed parameters are rejected.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.work_area.width > 0.0) || !self.work_area.width.is_finite() {
            return Err(ConfigError::InvalidDimension {
                name: "work_area.width",
                value: self.work_area.width,
            });
        }
        if !(self.work_area.height > 0.0) || !self.work_area.height.is_finite() {
            return Err(ConfigError::InvalidDimension {
                name: "work_area.height",
                value: self.work_area.height,
            });
        }
        if !self.lift_height.is_finite() || self.lift_height < 0.0 {
            return Err(ConfigError::InvalidDimension {
                name: "lift_height",
                value: self.lift_height,
            });
        }
        if self.feed_rate == 0 {
            return Err(ConfigError::ZeroFeedRate);
        }
        if !(self.tolerance > 0.0) || !self.tolerance.is_finite() {
            return Err(ConfigError::InvalidDimension {
                name: "tolerance",
                value: self.tolerance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(PlotConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_work_area() {
        let mut config = PlotConfig::default();
        config.work_area.width = 0.0;
        assert!(config.validate().is_err());

        config = PlotConfig::default();
        config.work_area.height = -10.0;
        assert!(config.validate().is_err());

        config = PlotConfig::default();
        config.work_area.width = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_feed_rate() {
        let config = PlotConfig {
            feed_rate: 0,
            ..PlotConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroFeedRate)));
    }

    #[test]
    fn test_rejects_negative_lift() {
        let config = PlotConfig {
            lift_height: -1.0,
            ..PlotConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        let config = PlotConfig {
            tolerance: 0.0,
            ..PlotConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
