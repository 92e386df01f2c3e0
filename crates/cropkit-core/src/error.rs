//! Error handling for CropKit
//!
//! The crop geometry itself is total: every clamp saturates and no function in
//! the editor fails. Errors only surface at the checked entry points a host
//! calls when it is about to commit to a crop:
//! - mapping a crop onto source pixels with a missing or zero-sized image/canvas
//! - confirming a crop when no image is loaded or cropping was never started
//! - extracting a pixel region that does not fit inside the bitmap
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Crop error type
///
/// Represents the "no valid crop yet" conditions a host has to handle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CropError {
    /// A size the mapper divides by is zero, negative or not finite
    #[error("Invalid {what} dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Which size was rejected ("canvas", "source image", ...).
        what: &'static str,
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },

    /// No image has been loaded into the session
    #[error("No image loaded")]
    NoImage,

    /// The session is not in cropping mode
    #[error("Cropping has not been started")]
    NotCropping,

    /// A pixel region does not fit inside the bitmap it is cut from
    #[error("Region {x},{y} {width}x{height} exceeds image bounds {image_width}x{image_height}")]
    OutOfBounds {
        /// Left edge of the region.
        x: u32,
        /// Top edge of the region.
        y: u32,
        /// Width of the region.
        width: u32,
        /// Height of the region.
        height: u32,
        /// Width of the bitmap.
        image_width: u32,
        /// Height of the bitmap.
        image_height: u32,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl CropError {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        CropError::Other(msg.into())
    }

    /// Check if this error means "there is nothing to crop yet" rather than a bad input
    pub fn is_no_selection(&self) -> bool {
        matches!(self, CropError::NoImage | CropError::NotCropping)
    }
}

/// Result type using CropError
pub type Result<T> = std::result::Result<T, CropError>;
