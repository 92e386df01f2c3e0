//! CropKit Settings Crate
//!
//! Handles reading and validating the application configuration.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, EditorSettings, CONFIG_FILE_NAME};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
