//! Sensor Info - motion and environment sensor viewer
//!
//! A desktop front-end for the sensors the host exposes. Sensors are added
//! from a fixed list of kinds, toggled on and off, and their readings shown
//! live. Readings can be recorded into an in-memory CSV buffer and exported
//! to files under a chosen name.

pub mod recording;
pub mod sensors;
pub mod state;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use recording::{ExportManager, RecordingSession};
pub use sensors::{IioPlatform, SensorRegistry};
pub use state::SensorInfoState;
pub use storage::config::AppConfig;
