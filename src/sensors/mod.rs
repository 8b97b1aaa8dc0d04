//! Sensor module: kinds, readings, the handle registry and platform backends.

pub mod formatter;
pub mod iio;
pub mod platform;
pub mod registry;
pub mod types;

pub use formatter::{format_reading, round, DisplayReading};
pub use iio::{IioDevice, IioPlatform};
pub use platform::{SensorPlatform, SensorSubscription};
pub use registry::{SensorHandle, SensorRegistry};
pub use types::{
    FrequencyHint, PlatformEvent, PlatformEventKind, Quaternion, Reading, ReadingShape,
    ReadingValues, SensorError, SensorFault, SensorKind, SubscriptionKey, Vector3,
};
