//! User pinch-zoom and pan applied to the displayed image.
//!
//! The host draws the image scaled by `scale` about the center of its laid-out
//! box and then shifted by `pan`. The crop overlay is not transformed.

use cropkit_core::constants::{MAX_SCALE, MIN_SCALE};
use cropkit_core::{Point, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the zoom/pan state of the displayed image.
///
/// Deserialization goes through [`TransformState::new`], so a stored scale
/// outside the zoom range is clamped on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredTransform")]
pub struct TransformState {
    scale: f64,
    pan: Point,
}

#[derive(Deserialize)]
struct StoredTransform {
    scale: f64,
    pan: Point,
}

impl From<StoredTransform> for TransformState {
    fn from(stored: StoredTransform) -> Self {
        Self::new(stored.scale, stored.pan)
    }
}

impl TransformState {
    /// Identity transform (scale 1, no pan).
    pub const IDENTITY: TransformState = TransformState {
        scale: MIN_SCALE,
        pan: Point::ZERO,
    };

    /// Creates a transform, clamping `scale` into the supported zoom range.
    pub fn new(scale: f64, pan: Point) -> Self {
        Self {
            scale: clamp_scale(scale),
            pan,
        }
    }

    /// Gets the current zoom level (1.0 = fit).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Gets the pan offset.
    pub fn pan(&self) -> Point {
        self.pan
    }

    /// True when the image is zoomed past the fitted size.
    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_SCALE
    }

    /// Applies one pinch/pan event.
    ///
    /// The zoom is multiplied by `zoom_change` and clamped to
    /// [`MIN_SCALE`]..[`MAX_SCALE`]. The pan grows by `pan_change` scaled by the
    /// new zoom and is limited to half of the extra size the zoom adds, so the
    /// image edge never comes inside the laid-out box.
    pub fn apply_pinch(&self, zoom_change: f64, pan_change: Point, display: Size) -> Self {
        let scale = clamp_scale(self.scale * zoom_change);
        let max_x = ((scale - 1.0) * display.width / 2.0).max(0.0);
        let max_y = ((scale - 1.0) * display.height / 2.0).max(0.0);

        let pan = Point::new(
            (self.pan.x + scale * pan_change.x).clamp(-max_x, max_x),
            (self.pan.y + scale * pan_change.y).clamp(-max_y, max_y),
        );

        Self { scale, pan }
    }

    /// Converts a point in the laid-out image frame to where it appears on screen.
    ///
    /// Formula:
    /// ```text
    /// display = center + (layout - center) * scale + pan
    /// ```
    pub fn to_display(&self, layout: Point, display: Size) -> Point {
        let center = display.center();
        center + (layout - center) * self.scale + self.pan
    }

    /// Converts an on-screen point back to the laid-out image frame.
    ///
    /// Inverse of [`TransformState::to_display`].
    pub fn to_layout(&self, point: Point, display: Size) -> Point {
        let center = display.center();
        center + (point - self.pan - center) * (1.0 / self.scale)
    }

    /// Resets zoom and pan.
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }
}

fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        MIN_SCALE
    } else {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for TransformState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.scale, self.pan.x, self.pan.y
        )
    }
}
