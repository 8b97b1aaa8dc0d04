//! Application configuration.
//!
//! Loaded from `config.toml` in the platform config directory. A missing file
//! yields defaults; every table and field is optional.

use crate::sensors::iio::{DEFAULT_IIO_ROOT, FALLBACK_POLL_HZ};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "Dark"),
            Theme::Light => write!(f, "Light"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Sensor settings
    pub sensors: SensorSettings,
    /// Export settings
    pub export: ExportSettings,
    /// UI settings
    pub ui: UiSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            sensors: SensorSettings::default(),
            export: ExportSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl AppConfig {
    /// Directory exports are written to.
    ///
    /// The configured directory if set, else the user's download directory,
    /// else `<data dir>/exports`.
    pub fn export_directory(&self) -> PathBuf {
        if let Some(dir) = &self.export.directory {
            return dir.clone();
        }

        directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| self.data_dir.join("exports"))
    }
}

/// Sensor-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorSettings {
    /// Root of the IIO sysfs tree
    pub iio_root: PathBuf,
    /// Poll rate for sensors added without a frequency
    pub default_poll_hz: f64,
}

impl Default for SensorSettings {
    fn default() -> Self {
        Self {
            iio_root: PathBuf::from(DEFAULT_IIO_ROOT),
            default_poll_hz: FALLBACK_POLL_HZ,
        }
    }
}

/// Export-related settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Output directory; unset means the download directory
    pub directory: Option<PathBuf>,
}

/// UI-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Theme
    pub theme: Theme,
    /// How long toasts stay on screen
    pub toast_seconds: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            toast_seconds: 4.0,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "sensorinfo", "SensorInfo")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    directories::ProjectDirs::from("org", "sensorinfo", "SensorInfo")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("No config at {}, using defaults", path.display());
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
