//! Sensor types and enums for platform motion/environment sensors.
//!
//! Defines the sensor kinds the application knows about, the frequency hint a
//! user may supply when adding a sensor, the reading values a platform emits,
//! and the errors raised while acquiring sensors.

use std::str::FromStr;
use thiserror::Error;

/// Sampling frequency written to CSV rows when no frequency was configured.
pub const DEFAULT_CSV_FREQUENCY_HZ: f64 = 60.0;

/// Kind of platform sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    /// Ambient light sensor (illuminance in lux)
    AmbientLight,
    /// Accelerometer including gravity (m/s²)
    Accelerometer,
    /// Accelerometer excluding gravity (m/s²)
    LinearAcceleration,
    /// Angular velocity (rad/s)
    Gyroscope,
    /// Magnetic field (µT)
    Magnetometer,
    /// Orientation relative to the Earth's reference frame
    AbsoluteOrientation,
    /// Orientation relative to a stationary reference frame
    RelativeOrientation,
}

/// Shape of the values a sensor kind produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingShape {
    /// Single illuminance value
    Illuminance,
    /// x, y, z triple
    Vector,
    /// 4-component quaternion
    Quaternion,
}

impl SensorKind {
    /// Every supported kind, in the order offered to the user.
    pub const ALL: [SensorKind; 7] = [
        SensorKind::AmbientLight,
        SensorKind::Accelerometer,
        SensorKind::LinearAcceleration,
        SensorKind::Gyroscope,
        SensorKind::Magnetometer,
        SensorKind::AbsoluteOrientation,
        SensorKind::RelativeOrientation,
    ];

    /// Identifier used in the `SensorType` CSV column.
    pub fn name(&self) -> &'static str {
        match self {
            SensorKind::AmbientLight => "AmbientLight",
            SensorKind::Accelerometer => "Accelerometer",
            SensorKind::LinearAcceleration => "LinearAcceleration",
            SensorKind::Gyroscope => "Gyroscope",
            SensorKind::Magnetometer => "Magnetometer",
            SensorKind::AbsoluteOrientation => "AbsoluteOrientation",
            SensorKind::RelativeOrientation => "RelativeOrientation",
        }
    }

    /// Label shown in the add-sensor dialog and on sensor cards.
    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::AmbientLight => "Ambient light",
            other => other.name(),
        }
    }

    /// Shape of the readings this kind produces.
    pub fn shape(&self) -> ReadingShape {
        match self {
            SensorKind::AmbientLight => ReadingShape::Illuminance,
            SensorKind::Accelerometer
            | SensorKind::LinearAcceleration
            | SensorKind::Gyroscope
            | SensorKind::Magnetometer => ReadingShape::Vector,
            SensorKind::AbsoluteOrientation | SensorKind::RelativeOrientation => {
                ReadingShape::Quaternion
            }
        }
    }
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SensorKind {
    type Err = SensorError;

    /// Accepts either the CSV name or the display label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.is_empty() {
            return Err(SensorError::MissingSelection);
        }

        SensorKind::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(wanted) || kind.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| SensorError::UnknownKind(wanted.to_string()))
    }
}

/// Sampling frequency requested when a sensor is added.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FrequencyHint {
    /// Let the platform pick its default rate
    #[default]
    Default,
    /// Explicit frequency in Hz (positive, finite)
    Hz(f64),
}

impl FrequencyHint {
    /// Build a hint from a numeric value; anything not positive and finite is `Default`.
    pub fn from_hz(hz: f64) -> Self {
        if hz.is_finite() && hz > 0.0 {
            FrequencyHint::Hz(hz)
        } else {
            FrequencyHint::Default
        }
    }

    /// Parse the free-text frequency field of the add-sensor dialog.
    ///
    /// Empty or non-numeric text yields `Default` rather than an error.
    pub fn parse(text: &str) -> Self {
        text.trim()
            .parse::<f64>()
            .map(Self::from_hz)
            .unwrap_or(FrequencyHint::Default)
    }

    /// The configured frequency, if any.
    pub fn hz(&self) -> Option<f64> {
        match self {
            FrequencyHint::Default => None,
            FrequencyHint::Hz(hz) => Some(*hz),
        }
    }

    /// Frequency written to CSV rows.
    pub fn csv_value(&self) -> f64 {
        self.hz().unwrap_or(DEFAULT_CSV_FREQUENCY_HZ)
    }
}

impl std::fmt::Display for FrequencyHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrequencyHint::Default => write!(f, "default"),
            FrequencyHint::Hz(hz) => write!(f, "{} Hz", hz),
        }
    }
}

/// 3D vector for accelerometer/gyroscope/magnetometer readings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Create a new vector with specified components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Orientation quaternion in platform order (x, y, z, w).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    /// Create a new quaternion from its x, y, z, w components.
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Identity quaternion (no rotation).
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Components as an array in x, y, z, w order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

/// Values carried by a single reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReadingValues {
    /// Illuminance in lux
    Illuminance(f64),
    /// Three-axis value
    Vector(Vector3),
    /// Orientation quaternion
    Quaternion(Quaternion),
}

impl ReadingValues {
    /// Shape of these values.
    pub fn shape(&self) -> ReadingShape {
        match self {
            ReadingValues::Illuminance(_) => ReadingShape::Illuminance,
            ReadingValues::Vector(_) => ReadingShape::Vector,
            ReadingValues::Quaternion(_) => ReadingShape::Quaternion,
        }
    }
}

/// One timestamped sample emitted by a sensor subscription.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Milliseconds since the platform's time origin
    pub timestamp: f64,
    /// Sample values
    pub values: ReadingValues,
}

impl Reading {
    /// Ambient light reading.
    pub fn illuminance(timestamp: f64, lux: f64) -> Self {
        Self {
            timestamp,
            values: ReadingValues::Illuminance(lux),
        }
    }

    /// Three-axis reading.
    pub fn vector(timestamp: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            timestamp,
            values: ReadingValues::Vector(Vector3::new(x, y, z)),
        }
    }

    /// Orientation reading.
    pub fn quaternion(timestamp: f64, quaternion: Quaternion) -> Self {
        Self {
            timestamp,
            values: ReadingValues::Quaternion(quaternion),
        }
    }
}

/// Runtime error reported by the platform for one sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorFault {
    /// Error kind, e.g. `NotReadableError`
    pub name: String,
    /// Human-readable message
    pub message: String,
}

impl SensorFault {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// First display line.
    pub fn type_line(&self) -> String {
        format!("Error: {}", self.name)
    }

    /// Second display line.
    pub fn message_line(&self) -> String {
        format!("Error message: {}", self.message)
    }
}

impl std::fmt::Display for SensorFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

/// Stable key linking platform events to a handle, unaffected by id renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionKey(pub u64);

/// Notification kinds a subscription emits.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEventKind {
    /// New sample available
    Reading(Reading),
    /// Sensor started delivering data
    Activated,
    /// Sensor failed
    Error(SensorFault),
}

/// Event sent from a platform subscription to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformEvent {
    /// Subscription that produced the event
    pub key: SubscriptionKey,
    /// What happened
    pub kind: PlatformEventKind,
}

impl PlatformEvent {
    pub fn reading(key: SubscriptionKey, reading: Reading) -> Self {
        Self {
            key,
            kind: PlatformEventKind::Reading(reading),
        }
    }

    pub fn activated(key: SubscriptionKey) -> Self {
        Self {
            key,
            kind: PlatformEventKind::Activated,
        }
    }

    pub fn error(key: SubscriptionKey, fault: SensorFault) -> Self {
        Self {
            key,
            kind: PlatformEventKind::Error(fault),
        }
    }
}

/// Errors that can occur while acquiring a sensor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SensorError {
    /// No sensor kind was chosen
    #[error("Please select sensor.")]
    MissingSelection,

    /// The platform has no sensor of the requested kind
    #[error("Selected sensor is not supported: {0}")]
    UnsupportedSensorKind(SensorKind),

    /// Text did not name a known sensor kind
    #[error("Unknown sensor type: {0}")]
    UnknownKind(String),
}

impl SensorError {
    /// Short notice shown to the user when adding a sensor fails.
    pub fn notice(&self) -> String {
        match self {
            SensorError::UnsupportedSensorKind(_) => "Selected sensor is not supported.".to_string(),
            other => other.to_string(),
        }
    }
}
