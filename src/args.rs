//! Command-line argument definitions for the replay binary.

use clap::{ArgAction, Parser};
use cropkit::LogFormat;
use std::path::PathBuf;

/// Replay a recorded crop-session event log and print the confirmed region.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// JSON file holding an array of session events.
    pub events: PathBuf,

    /// Optional settings file (.json or .toml). Defaults to the platform
    /// config directory when present, otherwise built-in settings.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit log records as JSON instead of pretty text.
    #[arg(long, action = ArgAction::SetTrue)]
    pub log_json: bool,
}

impl Args {
    pub fn log_format(&self) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}
