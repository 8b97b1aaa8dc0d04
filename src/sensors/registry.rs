//! Sensor handle registry.
//!
//! Holds the sensors the user has added, in display order. A handle's `id`
//! is always its index in that order; removing a handle renumbers everything
//! after it. Platform events are routed by [`SubscriptionKey`], which never
//! changes, so renumbering does not misroute in-flight readings.

use crate::sensors::formatter::{format_reading, DisplayReading};
use crate::sensors::platform::{SensorPlatform, SensorSubscription};
use crate::sensors::types::{
    FrequencyHint, PlatformEvent, PlatformEventKind, Reading, SensorError, SensorFault,
    SensorKind, SubscriptionKey,
};
use crossbeam::channel::{Receiver, Sender};

/// One user-added sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorHandle {
    /// Position in the registry
    pub id: usize,
    /// Sensor kind
    pub kind: SensorKind,
    /// Requested frequency
    pub frequency: FrequencyHint,
    /// User intent: the sensor should be running
    pub active: bool,
    /// Platform reported the sensor as delivering data
    pub activated: bool,
    /// Most recent reading
    pub last_reading: Option<Reading>,
    /// Most recent reading, formatted for display
    pub display: Option<DisplayReading>,
    /// Most recent runtime error
    pub last_error: Option<SensorFault>,
    key: SubscriptionKey,
}

impl SensorHandle {
    /// Key the platform uses for this handle's events.
    pub fn key(&self) -> SubscriptionKey {
        self.key
    }
}

struct Entry {
    handle: SensorHandle,
    subscription: Box<dyn SensorSubscription>,
}

/// Registry of added sensors.
pub struct SensorRegistry<P: SensorPlatform> {
    platform: P,
    entries: Vec<Entry>,
    next_key: u64,
    event_tx: Sender<PlatformEvent>,
    event_rx: Receiver<PlatformEvent>,
}

impl<P: SensorPlatform> SensorRegistry<P> {
    /// Create an empty registry backed by `platform`.
    pub fn new(platform: P) -> Self {
        let (event_tx, event_rx) = crossbeam::channel::unbounded();
        Self {
            platform,
            entries: Vec::new(),
            next_key: 0,
            event_tx,
            event_rx,
        }
    }

    /// The platform backing this registry.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Add a sensor of `kind`.
    ///
    /// The subscription is constructed but not started.
    pub fn add(
        &mut self,
        kind: Option<SensorKind>,
        frequency: FrequencyHint,
    ) -> Result<&SensorHandle, SensorError> {
        let kind = kind.ok_or(SensorError::MissingSelection)?;

        let key = SubscriptionKey(self.next_key);
        let subscription = self
            .platform
            .open(kind, frequency, key, self.event_tx.clone())
            .inspect_err(|e| tracing::warn!("Cannot add {} sensor: {}", kind.name(), e))?;
        self.next_key += 1;

        let id = self.entries.len();
        self.entries.push(Entry {
            handle: SensorHandle {
                id,
                kind,
                frequency,
                active: false,
                activated: false,
                last_reading: None,
                display: None,
                last_error: None,
                key,
            },
            subscription,
        });

        tracing::info!("Added {} sensor as #{} ({})", kind.name(), id, frequency);
        Ok(&self.entries[id].handle)
    }

    /// Remove the sensor with `id`, stopping it first. Unknown ids are ignored.
    pub fn remove(&mut self, id: usize) {
        if id >= self.entries.len() {
            tracing::debug!("Ignoring removal of unknown sensor #{}", id);
            return;
        }

        let mut entry = self.entries.remove(id);
        entry.subscription.stop();

        for (index, remaining) in self.entries.iter_mut().enumerate().skip(id) {
            remaining.handle.id = index;
        }

        tracing::info!("Removed {} sensor #{}", entry.handle.kind.name(), id);
    }

    /// Start or stop the sensor with `id`. Unknown ids are ignored.
    pub fn set_active(&mut self, id: usize, active: bool) {
        let Some(entry) = self.entries.get_mut(id) else {
            tracing::debug!("Ignoring toggle of unknown sensor #{}", id);
            return;
        };

        if active {
            entry.subscription.start();
        } else {
            entry.subscription.stop();
            entry.handle.activated = false;
        }
        entry.handle.active = active;

        tracing::info!(
            "{} {} sensor #{}",
            if active { "Started" } else { "Stopped" },
            entry.handle.kind.name(),
            id
        );
    }

    /// Handle with `id`.
    pub fn get(&self, id: usize) -> Option<&SensorHandle> {
        self.entries.get(id).map(|entry| &entry.handle)
    }

    /// All handles in id order.
    pub fn handles(&self) -> impl Iterator<Item = &SensorHandle> {
        self.entries.iter().map(|entry| &entry.handle)
    }

    /// Number of handles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no sensor has been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the subscription behind `id` is running.
    pub fn is_running(&self, id: usize) -> bool {
        self.entries
            .get(id)
            .is_some_and(|entry| entry.subscription.is_running())
    }

    /// Apply every pending platform event without blocking.
    ///
    /// Returns the readings that belonged to a live handle, paired with the
    /// handle's current id.
    pub fn drain_events(&mut self) -> Vec<(usize, Reading)> {
        let events: Vec<PlatformEvent> = self.event_rx.try_iter().collect();

        let mut readings = Vec::new();
        for event in events {
            if let Some(reading) = self.apply_event(event) {
                readings.push(reading);
            }
        }
        readings
    }

    /// Apply one event to the handle that owns it.
    fn apply_event(&mut self, event: PlatformEvent) -> Option<(usize, Reading)> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.handle.key == event.key) else {
            tracing::debug!("Dropping event for removed subscription {:?}", event.key);
            return None;
        };
        let handle = &mut entry.handle;

        match event.kind {
            PlatformEventKind::Reading(reading) => {
                handle.display = Some(format_reading(handle.kind, &reading));
                handle.last_reading = Some(reading);
                Some((handle.id, reading))
            }
            PlatformEventKind::Activated => {
                handle.activated = true;
                None
            }
            PlatformEventKind::Error(fault) => {
                tracing::warn!("{} sensor #{} reported {}", handle.kind.name(), handle.id, fault);
                handle.activated = false;
                handle.last_error = Some(fault);
                None
            }
        }
    }
}

impl<P: SensorPlatform> Drop for SensorRegistry<P> {
    fn drop(&mut self) {
        for entry in &mut self.entries {
            entry.subscription.stop();
        }
    }
}
