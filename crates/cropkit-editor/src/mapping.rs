//! Mapping a crop rectangle from canvas coordinates to source-bitmap pixels.
//!
//! The image is laid out to the canvas with a uniform fit ratio
//! (`min(canvas / source)` per axis). Every crop edge is divided by that ratio,
//! rounded to the nearest pixel and clamped into the bitmap; the result is at
//! least one pixel wide and tall.

use cropkit_core::{CropError, ImageSize, Rect, Result, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::transform::TransformState;

/// Which frame the crop rectangle's coordinates are taken in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingMode {
    /// Crop coordinates are read against the laid-out image, ignoring the
    /// user zoom/pan. A crop drawn while zoomed in selects the region under
    /// the overlay as if the image were not zoomed.
    #[default]
    Layout,
    /// Crop coordinates are read against what is visible on screen: the
    /// zoom/pan is undone about the center of the laid-out display box before
    /// the fit ratio is applied.
    Visual,
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout => write!(f, "layout"),
            Self::Visual => write!(f, "visual"),
        }
    }
}

impl FromStr for MappingMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "layout" => Ok(Self::Layout),
            "visual" => Ok(Self::Visual),
            _ => Err(format!("Unknown mapping mode: {}", s)),
        }
    }
}

/// A crop region in source-bitmap pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// True when the region lies fully inside an image of `size`.
    pub fn fits(&self, size: ImageSize) -> bool {
        self.right() <= size.width && self.bottom() <= size.height
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Uniform scale that fits `source` into `canvas`.
pub fn fit_ratio(canvas: Size, source: ImageSize) -> f64 {
    let source = source.as_size();
    (canvas.width / source.width).min(canvas.height / source.height)
}

/// Maps a crop rectangle in canvas coordinates onto source pixels.
///
/// `display` is the laid-out image box the zoom/pan was applied to; only
/// [`MappingMode::Visual`] reads it. Callers must pass a positive canvas and a non-empty source; otherwise the
/// fit ratio is zero or undefined and the result is a meaningless (but still
/// in-range) one-pixel rectangle. [`try_to_source_rect`] checks this instead.
pub fn to_source_rect(
    crop: Rect,
    canvas: Size,
    display: Size,
    source: ImageSize,
    transform: &TransformState,
    mode: MappingMode,
) -> PixelRect {
    let crop = match mode {
        MappingMode::Layout => crop,
        MappingMode::Visual => Rect::from_corners(
            transform.to_layout(crop.top_left(), display),
            transform.to_layout(crop.bottom_right(), display),
        ),
    };

    let ratio = fit_ratio(canvas, source);
    let left = to_pixel(crop.left, ratio, source.width);
    let top = to_pixel(crop.top, ratio, source.height);
    let right = to_pixel(crop.right, ratio, source.width);
    let bottom = to_pixel(crop.bottom, ratio, source.height);

    let rect = PixelRect::new(
        left,
        top,
        right.saturating_sub(left).max(1),
        bottom.saturating_sub(top).max(1),
    );
    trace!(
        "Mapped crop {} on {} canvas to {} (fit ratio {:.4}, {} mode)",
        crop,
        canvas,
        rect,
        ratio,
        mode
    );
    rect
}

/// Checked variant of [`to_source_rect`].
///
/// Returns [`CropError::InvalidDimensions`] when the canvas is not positive or
/// the source image is empty, the "no valid crop yet" case for the host.
pub fn try_to_source_rect(
    crop: Rect,
    canvas: Size,
    display: Size,
    source: ImageSize,
    transform: &TransformState,
    mode: MappingMode,
) -> Result<PixelRect> {
    if !canvas.is_positive() {
        return Err(CropError::InvalidDimensions {
            what: "canvas",
            width: canvas.width,
            height: canvas.height,
        });
    }
    if source.is_empty() {
        return Err(CropError::InvalidDimensions {
            what: "source image",
            width: f64::from(source.width),
            height: f64::from(source.height),
        });
    }
    Ok(to_source_rect(crop, canvas, display, source, transform, mode))
}

/// Divides by the fit ratio, rounds half away from zero and clamps into `0..=limit`.
fn to_pixel(coordinate: f64, ratio: f64, limit: u32) -> u32 {
    let pixel = (coordinate / ratio).round();
    if pixel.is_nan() || pixel <= 0.0 {
        0
    } else if pixel >= f64::from(limit) {
        limit
    } else {
        pixel as u32
    }
}
