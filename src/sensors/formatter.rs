//! Reading formatter for the sensor cards.
//!
//! Converts raw readings into rounded `label: value` lines.

use crate::sensors::types::{Reading, ReadingValues, SensorKind};

/// Decimal places used for every displayed and recorded value.
pub const DISPLAY_PRECISION: i32 = 3;

/// Round `value` to `precision` decimal places, half away from zero.
///
/// Non-finite values and values too large to carry a fractional part are
/// returned unchanged. Negative zero is normalized to zero.
pub fn round(value: f64, precision: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(precision);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }

    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Render a number in its shortest form (`300`, `100.123`, `-0.5`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoid printing "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

/// Round to display precision and render.
pub fn format_rounded(value: f64) -> String {
    format_number(round(value, DISPLAY_PRECISION))
}

/// Formatted lines for one reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayReading {
    /// `timestamp: <value>`
    pub timestamp: String,
    /// One line per value, in positional order
    pub values: Vec<String>,
}

impl DisplayReading {
    /// All lines, timestamp first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.timestamp.as_str()).chain(self.values.iter().map(String::as_str))
    }
}

/// Format a reading for display.
///
/// The labels depend on the sensor kind; the values are taken positionally
/// from the reading.
pub fn format_reading(kind: SensorKind, reading: &Reading) -> DisplayReading {
    let timestamp = format!("timestamp: {}", format_rounded(reading.timestamp));

    let values = match reading.values {
        ReadingValues::Illuminance(lux) => {
            vec![format!("illuminance: {}", format_rounded(lux))]
        }
        ReadingValues::Vector(v) => ["x", "y", "z"]
            .iter()
            .zip([v.x, v.y, v.z])
            .map(|(label, value)| format!("{}: {}", label, format_rounded(value)))
            .collect(),
        ReadingValues::Quaternion(q) => ["X", "Y", "Z", "W"]
            .iter()
            .zip(q.to_array())
            .map(|(axis, value)| format!("quaternion.{}: {}", axis, format_rounded(value)))
            .collect(),
    };

    if reading.values.shape() != kind.shape() {
        tracing::debug!(
            "Reading shape {:?} does not match sensor kind {}",
            reading.values.shape(),
            kind.name()
        );
    }

    DisplayReading { timestamp, values }
}
