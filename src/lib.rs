//! # CropKit
//!
//! Geometry engine for an interactive image-cropping screen:
//! - Aspect-ratio presets (free-form, 1:1, 3:2, 2:3)
//! - Corner dragging with minimum-size and in-bounds constraints
//! - One-shot gesture classification (corner drag, center drag, pinch/pan)
//! - Canvas-to-source-pixel mapping of the confirmed crop
//!
//! ## Architecture
//!
//! CropKit is organized as a workspace with multiple crates:
//!
//! 1. **cropkit-core** - Geometry primitives, constants, errors
//! 2. **cropkit-editor** - Presets, corner editor, gestures, mapping, session
//! 3. **cropkit-settings** - Configuration loading and validation
//! 4. **cropkit** - Event-replay binary that integrates all crates

pub use cropkit_core::{
    clamp_saturating, constants, CropError, ImageSize, Point, Rect, Result, Size,
};

pub use cropkit_editor::{
    classify, extract_region, fit_ratio, image_size, near_corner, to_source_rect,
    try_to_source_rect, update_corners, update_corners_default, AspectRatio, Corner,
    CropCorners, CropOverlay, CropSession, DragTarget, GestureContext, GestureMode,
    GestureTracker, MappingMode, MoveStep, PixelRect, PointerMove, Segment, SessionEvent,
    SessionOptions, TransformState,
};

pub use cropkit_settings::{
    default_config_path, Config, ConfigError, EditorSettings, SettingsError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line records
    #[default]
    Pretty,
    /// One JSON object per record
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::Pretty)
}

/// Initialize logging in the given format.
///
/// Records go to stderr so stdout stays free for command output.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
