//! Application state shared by the presentation layer.
//!
//! One owned object holds the registry, the recording session and the
//! export history. The UI thread is its only mutator.

use crate::recording::{ExportManager, RecordingSession, RecordingState};
use crate::sensors::platform::SensorPlatform;
use crate::sensors::registry::SensorRegistry;

/// Registry, session and exports for one application run.
pub struct SensorInfoState<P: SensorPlatform> {
    pub registry: SensorRegistry<P>,
    pub session: RecordingSession,
    pub exports: ExportManager,
}

impl<P: SensorPlatform> SensorInfoState<P> {
    /// Create the state around `platform`.
    pub fn new(platform: P) -> Self {
        Self {
            registry: SensorRegistry::new(platform),
            session: RecordingSession::new(),
            exports: ExportManager::new(),
        }
    }

    /// Apply pending platform events and record readings.
    ///
    /// Returns the number of CSV rows appended.
    pub fn process_events(&mut self) -> usize {
        let readings = self.registry.drain_events();

        let mut appended = 0;
        for (id, reading) in readings {
            let Some(handle) = self.registry.get(id) else {
                continue;
            };
            if self.session.on_reading(handle.kind, handle.frequency, &reading) {
                appended += 1;
            }
        }
        appended
    }

    /// Whether Suspend/Resume applies.
    pub fn can_suspend(&self) -> bool {
        matches!(
            self.session.state(),
            RecordingState::Recording | RecordingState::Suspended
        )
    }

    /// Whether Stop applies.
    pub fn can_stop(&self) -> bool {
        self.can_suspend()
    }

    /// Whether there is a buffer to export.
    pub fn can_export(&self) -> bool {
        self.session.is_started()
    }

    /// Caption for the suspend/resume button.
    pub fn suspend_label(&self) -> &'static str {
        if self.session.state() == RecordingState::Suspended {
            "Resume"
        } else {
            "Suspend"
        }
    }
}
