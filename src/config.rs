//! Configuration for the image panner/zoomer.
//!
//! [`WidgetConfig`] holds the per-widget layout parameters. [`Settings`] is
//! the settings file wrapping it together with keybindings and logging, which
//! native builds load from the platform config directory.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_GRID_SPACING, DEFAULT_IMAGE_WIDTH, DEFAULT_STORAGE_NAMESPACE, DEFAULT_ZOOM_INCREMENT,
};
use crate::error::ConstructionError;
use crate::keybindings::KeyBindings;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to log crate's Level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Layout parameters of one widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Zoom step for keyboard and wheel commands
    #[serde(default = "default_zoom_increment")]
    pub zoom_increment: f64,

    /// Logical width every image is laid out with
    #[serde(default = "default_image_width")]
    pub image_width: f64,

    /// Spacing of the snapping grid
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: f64,

    /// Namespace tag prefixed to every persisted key
    #[serde(default = "default_storage_namespace")]
    pub storage_namespace: String,
}

fn default_zoom_increment() -> f64 {
    DEFAULT_ZOOM_INCREMENT
}

fn default_image_width() -> f64 {
    DEFAULT_IMAGE_WIDTH
}

fn default_grid_spacing() -> f64 {
    DEFAULT_GRID_SPACING
}

fn default_storage_namespace() -> String {
    DEFAULT_STORAGE_NAMESPACE.to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            zoom_increment: default_zoom_increment(),
            image_width: default_image_width(),
            grid_spacing: default_grid_spacing(),
            storage_namespace: default_storage_namespace(),
        }
    }
}

impl WidgetConfig {
    pub fn with_zoom_increment(mut self, zoom_increment: f64) -> Self {
        self.zoom_increment = zoom_increment;
        self
    }

    pub fn with_image_width(mut self, image_width: f64) -> Self {
        self.image_width = image_width;
        self
    }

    pub fn with_grid_spacing(mut self, grid_spacing: f64) -> Self {
        self.grid_spacing = grid_spacing;
        self
    }

    pub fn with_storage_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.storage_namespace = namespace.into();
        self
    }

    /// Check every value is usable.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        if !self.zoom_increment.is_finite() {
            return Err(ConstructionError::invalid_config(
                "zoomIncrement must be a finite number",
            ));
        }
        if !(self.image_width.is_finite() && self.image_width > 0.0) {
            return Err(ConstructionError::invalid_config(
                "imageWidth must be a positive number",
            ));
        }
        if !(self.grid_spacing.is_finite() && self.grid_spacing > 0.0) {
            return Err(ConstructionError::invalid_config(
                "gridSpacing must be a positive number",
            ));
        }
        if self.storage_namespace.is_empty() {
            return Err(ConstructionError::invalid_config(
                "storageNamespace must not be empty",
            ));
        }
        Ok(())
    }
}

/// Current settings file format version.
/// Increment this when making breaking changes to the settings format.
pub const SETTINGS_VERSION: u32 = 1;

/// Settings file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Version of the settings file format
    pub version: u32,

    /// Layout parameters
    #[serde(default)]
    pub widget: WidgetConfig,

    /// Keyboard commands and modifiers
    #[serde(default)]
    pub keybindings: KeyBindings,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            version: SETTINGS_VERSION,
            widget: WidgetConfig::default(),
            keybindings: KeyBindings::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the settings to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;

        if settings.version > SETTINGS_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: settings.version,
                supported_version: SETTINGS_VERSION,
            });
        }

        Ok(settings)
    }

    /// Get the default filename for the settings file.
    pub fn default_filename() -> &'static str {
        "ipz-settings.json"
    }

    /// Get the default settings file path.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("ipz").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("ipz")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load settings from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No settings file found at {:?}", path);
            return None;
        }

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {:?}", path);
                    Some(settings)
                }
                Err(e) => {
                    log::warn!("Failed to parse settings file {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read settings file {:?}: {}", path, e);
                None
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Settings version is newer than supported
    #[error(
        "Settings file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing settings
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.zoom_increment, 0.5);
        assert_eq!(config.image_width, 128.0);
        assert_eq!(config.grid_spacing, 32.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_overrides_from_json() {
        let config: WidgetConfig = serde_json::from_str(r#"{"gridSpacing": 16}"#).unwrap();
        assert_eq!(config.grid_spacing, 16.0);
        assert_eq!(config.image_width, 128.0);
        assert_eq!(config.storage_namespace, "imagePannerZoomer");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(WidgetConfig::default().with_grid_spacing(0.0).validate().is_err());
        assert!(WidgetConfig::default().with_image_width(-1.0).validate().is_err());
        assert!(WidgetConfig::default()
            .with_zoom_increment(f64::NAN)
            .validate()
            .is_err());
        assert!(WidgetConfig::default()
            .with_storage_namespace("")
            .validate()
            .is_err());
    }

    #[test]
    fn test_settings_roundtrip() {
        let mut settings = Settings::new();
        settings.log_level = LogLevel::Debug;
        settings.widget.image_width = 200.0;

        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_settings_version_too_new() {
        let json = r#"{"version": 99}"#;
        assert!(matches!(
            Settings::from_json(json),
            Err(ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: SETTINGS_VERSION
            })
        ));
    }

    #[test]
    fn test_minimal_settings_use_defaults() {
        let settings = Settings::from_json(r#"{"version": 1}"#).unwrap();
        assert_eq!(settings, Settings::new());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
    }
}
