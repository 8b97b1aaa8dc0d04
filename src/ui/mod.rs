//! UI module for the egui window.

pub mod add_sensor_dialog;
pub mod recording_panel;
pub mod sensor_list;
pub mod theme;
pub mod toast;

pub use add_sensor_dialog::{AddSensorDialog, AddSensorRequest};
pub use recording_panel::{RecordingAction, RecordingPanel};
pub use sensor_list::SensorAction;
pub use theme::Palette;
pub use toast::{ToastLevel, Toasts};
