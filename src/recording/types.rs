//! Recording types for CSV capture and export.

use std::path::PathBuf;
use thiserror::Error;

/// State of the recording session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingState {
    /// Never started
    #[default]
    Idle,
    /// Appending rows
    Recording,
    /// Started, rows are not appended until resumed
    Suspended,
    /// Finished; terminal until the next start
    Stopped,
}

impl std::fmt::Display for RecordingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordingState::Idle => write!(f, "Idle"),
            RecordingState::Recording => write!(f, "Recording"),
            RecordingState::Suspended => write!(f, "Suspended"),
            RecordingState::Stopped => write!(f, "Stopped"),
        }
    }
}

/// One completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    /// File name, always ending in `.csv`
    pub file_name: String,
    /// Rows in the buffer at export time
    pub row_count: u64,
    /// Start time (epoch seconds) of the recording that was exported
    pub session_started_at: i64,
    /// Where the sink stored the file
    pub path: PathBuf,
}

/// Errors during export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A file with this name was already exported in this session
    #[error("The csv name {0} already exists, please choose a new one.")]
    DuplicateName(String),

    /// Recording was never started
    #[error("Nothing has been recorded yet")]
    NothingRecorded,

    /// Name cannot be used as a file name
    #[error("Invalid file name: {0}")]
    InvalidName(String),

    /// Failed to write export data
    #[error("Failed to write data: {0}")]
    WriteFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
