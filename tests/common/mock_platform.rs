//! Mock sensor platform for tests.
//!
//! Subscriptions never produce data by themselves; tests inject events
//! through the platform handle and inspect the start/stop calls it logged.

#![allow(dead_code)]

use crossbeam::channel::Sender;
use sensorinfo::sensors::platform::{SensorPlatform, SensorSubscription};
use sensorinfo::sensors::types::{
    FrequencyHint, PlatformEvent, Reading, SensorError, SensorFault, SensorKind, SubscriptionKey,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Start/stop call made on a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Start(SubscriptionKey),
    Stop(SubscriptionKey),
}

/// One opened subscription.
pub struct Opened {
    pub key: SubscriptionKey,
    pub kind: SensorKind,
    pub frequency: FrequencyHint,
    pub events: Sender<PlatformEvent>,
}

#[derive(Default)]
struct MockState {
    unsupported: Vec<SensorKind>,
    opened: Vec<Opened>,
    calls: Vec<Call>,
}

/// Cloneable handle; clones share the same log.
#[derive(Clone, Default)]
pub struct MockPlatform {
    state: Rc<RefCell<MockState>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform that refuses `kinds`.
    pub fn without(kinds: &[SensorKind]) -> Self {
        let platform = Self::new();
        platform.state.borrow_mut().unsupported = kinds.to_vec();
        platform
    }

    /// Number of subscriptions opened so far.
    pub fn opened_count(&self) -> usize {
        self.state.borrow().opened.len()
    }

    /// Key of the `index`-th opened subscription.
    pub fn key(&self, index: usize) -> SubscriptionKey {
        self.state.borrow().opened[index].key
    }

    /// Frequency the `index`-th subscription was opened with.
    pub fn frequency(&self, index: usize) -> FrequencyHint {
        self.state.borrow().opened[index].frequency
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn emit(&self, key: SubscriptionKey, event: PlatformEvent) {
        let state = self.state.borrow();
        let opened = state
            .opened
            .iter()
            .find(|o| o.key == key)
            .expect("unknown subscription key");
        opened.events.send(event).expect("registry dropped");
    }

    pub fn emit_reading(&self, key: SubscriptionKey, reading: Reading) {
        self.emit(key, PlatformEvent::reading(key, reading));
    }

    pub fn emit_activated(&self, key: SubscriptionKey) {
        self.emit(key, PlatformEvent::activated(key));
    }

    pub fn emit_error(&self, key: SubscriptionKey, name: &str, message: &str) {
        self.emit(key, PlatformEvent::error(key, SensorFault::new(name, message)));
    }
}

struct MockSubscription {
    key: SubscriptionKey,
    running: bool,
    state: Rc<RefCell<MockState>>,
}

impl SensorSubscription for MockSubscription {
    fn start(&mut self) {
        self.running = true;
        self.state.borrow_mut().calls.push(Call::Start(self.key));
    }

    fn stop(&mut self) {
        self.running = false;
        self.state.borrow_mut().calls.push(Call::Stop(self.key));
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

impl SensorPlatform for MockPlatform {
    fn open(
        &self,
        kind: SensorKind,
        frequency: FrequencyHint,
        key: SubscriptionKey,
        events: Sender<PlatformEvent>,
    ) -> Result<Box<dyn SensorSubscription>, SensorError> {
        let mut state = self.state.borrow_mut();
        if state.unsupported.contains(&kind) {
            return Err(SensorError::UnsupportedSensorKind(kind));
        }

        state.opened.push(Opened {
            key,
            kind,
            frequency,
            events,
        });

        Ok(Box::new(MockSubscription {
            key,
            running: false,
            state: Rc::clone(&self.state),
        }))
    }

    fn available_kinds(&self) -> Vec<SensorKind> {
        let unsupported = &self.state.borrow().unsupported;
        SensorKind::ALL
            .into_iter()
            .filter(|kind| !unsupported.contains(kind))
            .collect()
    }
}
