//! Recording session: accumulates CSV rows while recording.
//!
//! Controls never fail. A control that does not apply to the current state
//! is ignored, since the presentation layer normally disables it anyway.

use crate::recording::exporter_csv::{format_row, CSV_HEADER};
use crate::recording::types::RecordingState;
use crate::sensors::types::{FrequencyHint, Reading, SensorKind};

/// In-memory CSV capture.
#[derive(Debug, Clone)]
pub struct RecordingSession {
    state: RecordingState,
    buffer: String,
    row_count: u64,
    started_at: Option<i64>,
}

impl Default for RecordingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSession {
    /// Create an idle session with an empty buffer.
    pub fn new() -> Self {
        Self {
            state: RecordingState::Idle,
            buffer: String::new(),
            row_count: 0,
            started_at: None,
        }
    }

    /// Start a new recording now, discarding any previous buffer.
    pub fn start(&mut self) {
        self.start_at(chrono::Utc::now().timestamp());
    }

    /// Start a new recording stamped with `epoch_seconds`.
    pub fn start_at(&mut self, epoch_seconds: i64) {
        self.buffer.clear();
        self.buffer.push_str(CSV_HEADER);
        self.buffer.push('\n');
        self.row_count = 0;
        self.started_at = Some(epoch_seconds);
        self.state = RecordingState::Recording;

        tracing::info!("Started recording at {}", epoch_seconds);
    }

    /// Recording → Suspended.
    pub fn suspend(&mut self) {
        if self.state == RecordingState::Recording {
            self.state = RecordingState::Suspended;
            tracing::info!("Suspended recording after {} rows", self.row_count);
        } else {
            tracing::debug!("Ignoring suspend while {}", self.state);
        }
    }

    /// Suspended → Recording.
    pub fn resume(&mut self) {
        if self.state == RecordingState::Suspended {
            self.state = RecordingState::Recording;
            tracing::info!("Resumed recording");
        } else {
            tracing::debug!("Ignoring resume while {}", self.state);
        }
    }

    /// The suspend/resume button: flips between Recording and Suspended.
    pub fn toggle_suspend(&mut self) {
        match self.state {
            RecordingState::Recording => self.suspend(),
            RecordingState::Suspended => self.resume(),
            RecordingState::Idle | RecordingState::Stopped => {
                tracing::debug!("Ignoring suspend/resume while {}", self.state);
            }
        }
    }

    /// Recording or Suspended → Stopped.
    pub fn stop(&mut self) {
        match self.state {
            RecordingState::Recording | RecordingState::Suspended => {
                self.state = RecordingState::Stopped;
                tracing::info!("Stopped recording with {} rows", self.row_count);
            }
            RecordingState::Idle | RecordingState::Stopped => {
                tracing::debug!("Ignoring stop while {}", self.state);
            }
        }
    }

    /// Append a row for `reading` if currently recording.
    ///
    /// Returns whether a row was appended.
    pub fn on_reading(&mut self, kind: SensorKind, frequency: FrequencyHint, reading: &Reading) -> bool {
        if self.state != RecordingState::Recording {
            return false;
        }

        self.buffer.push_str(&format_row(kind, frequency, reading));
        self.row_count += 1;
        true
    }

    /// Current state.
    pub fn state(&self) -> RecordingState {
        self.state
    }

    /// Rows appended since the last start.
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Epoch seconds of the last start.
    pub fn started_at(&self) -> Option<i64> {
        self.started_at
    }

    /// Whether the session was ever started.
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Buffered CSV text, header included once started.
    pub fn csv(&self) -> &str {
        &self.buffer
    }
}
