//! Configuration for CropKit
//!
//! Provides configuration file handling and validation. Supports JSON and TOML
//! file formats; the default location is platform-specific.
//!
//! Configuration is organized into sections:
//! - Editor settings (minimum crop size, touch radius, default ratio, mapping)

use cropkit_core::constants::{DEFAULT_MIN_CROP_SIZE, DEFAULT_TOUCH_THRESHOLD};
use cropkit_editor::{AspectRatio, MappingMode, SessionOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// File name of the configuration inside the CropKit config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Crop editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Smallest crop width/height in display units
    pub min_crop_size: f64,
    /// Radius around a corner that grabs its handle
    pub touch_threshold: f64,
    /// Ratio selected when a session starts
    pub default_aspect_ratio: AspectRatio,
    /// Frame the crop is mapped from
    pub mapping_mode: MappingMode,
    /// Draw the thirds grid while dragging
    pub show_grid_while_dragging: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            min_crop_size: DEFAULT_MIN_CROP_SIZE,
            touch_threshold: DEFAULT_TOUCH_THRESHOLD,
            default_aspect_ratio: AspectRatio::default(),
            mapping_mode: MappingMode::default(),
            show_grid_while_dragging: true,
        }
    }
}

impl From<&EditorSettings> for SessionOptions {
    fn from(settings: &EditorSettings) -> Self {
        SessionOptions {
            min_crop_size: settings.min_crop_size,
            touch_threshold: settings.touch_threshold,
            default_aspect_ratio: settings.default_aspect_ratio,
            mapping_mode: settings.mapping_mode,
            show_grid_while_dragging: settings.show_grid_while_dragging,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Editor settings
    pub editor: EditorSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::LoadError {
            path: path.display().to_string(),
            source,
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else the default config file if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match default_config_path() {
            Ok(path) if path.is_file() => Self::load_from_file(&path),
            Ok(path) => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => {
                info!("{}; using default settings", e);
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        check_positive("editor.min_crop_size", self.editor.min_crop_size)?;
        check_positive("editor.touch_threshold", self.editor.touch_threshold)?;
        Ok(())
    }

    /// Session options for a new crop session.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions::from(&self.editor)
    }
}

fn check_positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Path of the default config file, e.g. `~/.config/cropkit/config.toml`.
pub fn default_config_path() -> ConfigResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("cropkit").join(CONFIG_FILE_NAME))
        .ok_or_else(|| {
            ConfigError::UnsupportedPlatform("no configuration directory".to_string())
        })
}
