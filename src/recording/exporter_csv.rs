//! CSV row layout and file output for recorded readings.

use crate::recording::export::ExportSink;
use crate::recording::types::ExportError;
use crate::sensors::formatter::{format_number, format_rounded};
use crate::sensors::types::{FrequencyHint, Reading, ReadingValues, SensorKind};
use std::path::{Path, PathBuf};

/// First line of every recording.
pub const CSV_HEADER: &str = "SensorType,frequency,timestamp,illuminance,x,y,z,quaternion.x,quaternion.y,quaternion.z,quaternion.w";

/// Build one CSV row, newline included.
///
/// Columns that do not apply to the reading are left empty; trailing empty
/// columns are omitted.
pub fn format_row(kind: SensorKind, frequency: FrequencyHint, reading: &Reading) -> String {
    let prefix = format!(
        "{},{},{}",
        kind.name(),
        format_number(frequency.csv_value()),
        format_rounded(reading.timestamp)
    );

    match reading.values {
        ReadingValues::Illuminance(lux) => format!("{},{}\n", prefix, format_rounded(lux)),
        ReadingValues::Vector(v) => format!(
            "{},,{},{},{}\n",
            prefix,
            format_rounded(v.x),
            format_rounded(v.y),
            format_rounded(v.z)
        ),
        ReadingValues::Quaternion(q) => format!(
            "{},,,,,{},{},{},{}\n",
            prefix,
            format_rounded(q.x),
            format_rounded(q.y),
            format_rounded(q.z),
            format_rounded(q.w)
        ),
    }
}

/// Export sink that writes files into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    /// Write exports into `directory`, creating it on first use.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Target directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl ExportSink for DirectorySink {
    fn save(&self, file_name: &str, contents: &str) -> Result<PathBuf, ExportError> {
        if file_name.contains(|c: char| c == '/' || c == '\\') || file_name.starts_with('.') {
            return Err(ExportError::InvalidName(file_name.to_string()));
        }

        std::fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(file_name);
        std::fs::write(&path, contents)
            .map_err(|e| ExportError::WriteFailed(format!("{}: {}", path.display(), e)))?;

        Ok(path)
    }
}
