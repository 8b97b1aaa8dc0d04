//! Export history and file naming for recorded sessions.

use crate::recording::session::RecordingSession;
use crate::recording::types::{ExportError, ExportRecord};
use std::path::PathBuf;

const CSV_EXTENSION: &str = ".csv";

/// Destination for exported CSV files.
pub trait ExportSink {
    /// Store `contents` under `file_name`, returning where it went.
    fn save(&self, file_name: &str, contents: &str) -> Result<PathBuf, ExportError>;
}

/// Tracks exports and hands the buffered CSV to a sink.
#[derive(Debug, Default)]
pub struct ExportManager {
    records: Vec<ExportRecord>,
}

impl ExportManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default name for the next export of `session`.
    ///
    /// `None` until the session has been started.
    pub fn proposed_name(&self, session: &RecordingSession) -> Option<String> {
        let started_at = session.started_at()?;
        let exported = self.exports_for(started_at);

        Some(if exported == 0 {
            format!("sensor_{}{}", started_at, CSV_EXTENSION)
        } else {
            format!("sensor_{}_{}{}", started_at, exported, CSV_EXTENSION)
        })
    }

    /// Export the session buffer as `name`.
    ///
    /// A missing `.csv` extension is appended; a blank name falls back to
    /// [`ExportManager::proposed_name`].
    pub fn export(
        &mut self,
        name: &str,
        session: &RecordingSession,
        sink: &dyn ExportSink,
    ) -> Result<&ExportRecord, ExportError> {
        let started_at = session.started_at().ok_or(ExportError::NothingRecorded)?;

        let trimmed = name.trim();
        let file_name = if trimmed.is_empty() {
            self.proposed_name(session)
                .ok_or(ExportError::NothingRecorded)?
        } else {
            normalize_name(trimmed)
        };

        if self.records.iter().any(|r| r.file_name == file_name) {
            tracing::warn!("Export name {} already used", file_name);
            return Err(ExportError::DuplicateName(file_name));
        }

        let path = sink.save(&file_name, session.csv()).inspect_err(|e| {
            tracing::error!("Failed to export {}: {}", file_name, e);
        })?;

        tracing::info!(
            "Exported {} rows to {}",
            session.row_count(),
            path.display()
        );

        self.records.push(ExportRecord {
            file_name,
            row_count: session.row_count(),
            session_started_at: started_at,
            path,
        });

        Ok(&self.records[self.records.len() - 1])
    }

    /// Export history, oldest first.
    pub fn records(&self) -> &[ExportRecord] {
        &self.records
    }

    fn exports_for(&self, started_at: i64) -> usize {
        self.records
            .iter()
            .filter(|r| r.session_started_at == started_at)
            .count()
    }
}

/// Append `.csv` unless the name already ends with it.
pub fn normalize_name(name: &str) -> String {
    if name.ends_with(CSV_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, CSV_EXTENSION)
    }
}
