//! Platform sensor interface.
//!
//! The registry never talks to hardware directly. A [`SensorPlatform`]
//! constructs one [`SensorSubscription`] per added sensor and the subscription
//! reports readings, activation and failures as [`PlatformEvent`]s on the
//! channel handed to it at construction.

use crate::sensors::types::{FrequencyHint, PlatformEvent, SensorError, SensorKind, SubscriptionKey};
use crossbeam::channel::Sender;

/// Source of sensor subscriptions.
pub trait SensorPlatform {
    /// Construct a subscription for `kind`.
    ///
    /// The subscription is created stopped. Events it produces must carry `key`.
    /// Returns [`SensorError::UnsupportedSensorKind`] when the platform has no
    /// sensor of that kind.
    fn open(
        &self,
        kind: SensorKind,
        frequency: FrequencyHint,
        key: SubscriptionKey,
        events: Sender<PlatformEvent>,
    ) -> Result<Box<dyn SensorSubscription>, SensorError>;

    /// Kinds this platform can currently provide.
    fn available_kinds(&self) -> Vec<SensorKind> {
        Vec::new()
    }
}

/// A live connection to one platform sensor.
///
/// `start` and `stop` are requests; the platform confirms activation
/// asynchronously through an `Activated` event.
pub trait SensorSubscription {
    /// Begin delivering readings.
    fn start(&mut self);

    /// Stop delivering readings.
    fn stop(&mut self);

    /// Whether the subscription has been started and not stopped since.
    fn is_running(&self) -> bool;
}
