//! Unit conversion utilities
//!
//! Plotters address their bed in integer plotter units, 1016 per inch.
//! Everything the user types (widths, margins, blade offsets) is in
//! millimeters and gets converted at the edge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plotter units per inch
pub const PLOTTER_UNITS_PER_INCH: f64 = 1016.0;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Convert millimeters to (fractional) plotter units
pub fn mm_to_plotter(mm: f64) -> f64 {
    mm / MM_PER_INCH * PLOTTER_UNITS_PER_INCH
}

/// Convert plotter units to millimeters
///
/// The value is rounded to the nearest whole plotter unit first, the
/// same rounding the device applies when it receives a coordinate.
pub fn plotter_to_mm(units: f64) -> f64 {
    units.round() / PLOTTER_UNITS_PER_INCH * MM_PER_INCH
}

/// Measurement system used for human-readable summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

impl MeasurementSystem {
    /// Unit label ("mm" or "in")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Metric => "mm",
            Self::Imperial => "in",
        }
    }
}

/// Format length value for display
///
/// * `value_mm` - Value in millimeters
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1} {}", value_mm, system.label()),
        MeasurementSystem::Imperial => {
            format!("{:.2} {}", value_mm / MM_PER_INCH, system.label())
        }
    }
}
