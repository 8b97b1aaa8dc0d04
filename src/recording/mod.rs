//! Recording module for CSV capture and export.

pub mod export;
pub mod exporter_csv;
pub mod session;
pub mod types;

pub use export::{ExportManager, ExportSink};
pub use exporter_csv::{format_row, DirectorySink, CSV_HEADER};
pub use session::RecordingSession;
pub use types::{ExportError, ExportRecord, RecordingState};
