//! Crop session controller for host integration.
//! Owns the state of one crop screen and feeds host events through the
//! geometry functions.
//!
//! This module is split into submodules:
//! - `pointer`: Touch-down, movement and release handling
//! - `events`: Serializable event log and replay

mod events;
mod pointer;

pub use events::SessionEvent;
pub use pointer::PointerMove;

use cropkit_core::constants::{DEFAULT_MIN_CROP_SIZE, DEFAULT_TOUCH_THRESHOLD};
use cropkit_core::{CropError, ImageSize, Result, Size};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aspect_ratio::AspectRatio;
use crate::corners::CropCorners;
use crate::gesture::{GestureMode, GestureTracker};
use crate::mapping::{try_to_source_rect, MappingMode, PixelRect};
use crate::overlay::CropOverlay;
use crate::transform::TransformState;

/// Tunables of a crop session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionOptions {
    pub min_crop_size: f64,
    pub touch_threshold: f64,
    pub default_aspect_ratio: AspectRatio,
    pub mapping_mode: MappingMode,
    pub show_grid_while_dragging: bool,
}

impl Default for SessionOptions {
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

/// State of one crop screen.
///
/// Every method takes `&mut self`, so events are applied one at a time in the
/// order the host delivers them.
#[derive(Debug, Clone)]
pub struct CropSession {
    options: SessionOptions,
    image: Option<ImageSize>,
    /// Laid-out size of the displayed image; the bounds for corner drags.
    display: Size,
    /// Size of the overlay canvas; the frame of the fit ratio.
    canvas: Size,
    cropping: bool,
    finished: bool,
    aspect_ratio: AspectRatio,
    corners: CropCorners,
    transform: TransformState,
    tracker: GestureTracker,
    dragging: bool,
}

impl CropSession {
    /// Creates an empty session.
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            image: None,
            display: Size::ZERO,
            canvas: Size::ZERO,
            cropping: false,
            finished: false,
            aspect_ratio: options.default_aspect_ratio,
            corners: CropCorners::ZERO,
            transform: TransformState::IDENTITY,
            tracker: GestureTracker::new(),
            dragging: false,
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Sets the natural pixel size of a newly picked image.
    ///
    /// Zoom, pan and the finished flag start over; the corners are re-seeded
    /// once the host reports the new layout.
    pub fn load_image(&mut self, size: ImageSize) {
        debug!("Loaded image {}", size);
        self.image = Some(size);
        self.finished = false;
        self.transform.reset();
        self.tracker.release();
        self.dragging = false;
    }

    /// Records the laid-out image size and the overlay canvas size.
    ///
    /// A changed display size re-seeds the corners from the selected ratio.
    pub fn set_layout(&mut self, display: Size, canvas: Size) {
        let reseed = display != self.display;
        self.display = display;
        self.canvas = canvas;
        if reseed {
            debug!("Display resized to {}, canvas {}", self.display, self.canvas);
            self.reseed_corners();
        }
    }

    /// Shows the crop overlay.
    pub fn start_cropping(&mut self) {
        self.cropping = true;
    }

    /// Backs out one step: from a finished crop back to editing, or from
    /// editing out of cropping mode.
    pub fn close(&mut self) {
        if self.finished {
            self.finished = false;
        } else {
            self.cropping = false;
        }
    }

    /// Switches the aspect ratio and re-seeds the corners for it.
    pub fn select_ratio(&mut self, ratio: AspectRatio) {
        debug!("Aspect ratio {} -> {}", self.aspect_ratio, ratio);
        self.aspect_ratio = ratio;
        self.reseed_corners();
    }

    /// Maps the current crop onto source pixels and marks the crop finished.
    pub fn confirm(&mut self) -> Result<PixelRect> {
        let rect = self.source_rect()?;
        self.finished = true;
        debug!("Confirmed crop {} -> {}", self.corners, rect);
        Ok(rect)
    }

    /// Source-pixel region of the current crop, without finishing it.
    pub fn source_rect(&self) -> Result<PixelRect> {
        let image = self.image.ok_or(CropError::NoImage)?;
        if !self.cropping {
            return Err(CropError::NotCropping);
        }
        try_to_source_rect(
            self.corners.rect(),
            self.canvas,
            self.display,
            image,
            &self.transform,
            self.options.mapping_mode,
        )
    }

    /// Overlay geometry for the current frame, `None` when nothing is drawn.
    pub fn overlay(&self) -> Option<CropOverlay> {
        if !self.cropping || self.finished || self.image.is_none() {
            return None;
        }
        Some(
            CropOverlay::new(
                self.corners,
                self.canvas,
                self.aspect_ratio.is_free_form(),
                self.dragging,
            )
            .with_grid(self.options.show_grid_while_dragging),
        )
    }

    pub fn image_size(&self) -> Option<ImageSize> {
        self.image
    }

    pub fn display_size(&self) -> Size {
        self.display
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    pub fn is_cropping(&self) -> bool {
        self.cropping
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// True while a crop adjustment gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    pub fn corners(&self) -> CropCorners {
        self.corners
    }

    pub fn transform(&self) -> TransformState {
        self.transform
    }

    /// Mode of the gesture in progress.
    pub fn gesture_mode(&self) -> GestureMode {
        self.tracker.mode()
    }

    fn reseed_corners(&mut self) {
        self.corners = self.aspect_ratio.crop_corners(self.display);
    }
}

impl Default for CropSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}
