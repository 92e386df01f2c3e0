//! Pointer handling: touch-down, movement and release.

use cropkit_core::Point;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::CropSession;
use crate::editor::update_corners;
use crate::gesture::{GestureContext, GestureMode, MoveStep};

/// One movement sample from the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerMove {
    /// Movement of the primary pointer since the previous sample.
    pub delta: Point,
    /// Pointers currently down.
    #[serde(default = "default_pointer_count")]
    pub pointer_count: usize,
    /// Pinch zoom factor since the previous sample.
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    /// Centroid movement since the previous sample; the primary pointer's
    /// delta when absent.
    #[serde(default)]
    pub pan: Option<Point>,
}

fn default_pointer_count() -> usize {
    1
}

fn default_zoom() -> f64 {
    1.0
}

impl PointerMove {
    /// A single-pointer drag.
    pub fn drag(delta: Point) -> Self {
        Self {
            delta,
            pointer_count: 1,
            zoom: 1.0,
            pan: None,
        }
    }

    /// A multi-pointer pinch.
    pub fn pinch(zoom: f64, pan: Point, pointer_count: usize) -> Self {
        Self {
            delta: pan,
            pointer_count,
            zoom,
            pan: Some(pan),
        }
    }

    /// Centroid movement used for panning.
    pub fn pan(&self) -> Point {
        self.pan.unwrap_or(self.delta)
    }
}

impl CropSession {
    /// First pointer of a gesture went down at `position`.
    pub fn pointer_down(&mut self, position: Point) {
        self.tracker.press(position);
    }

    /// Applies one movement sample and returns the gesture's mode.
    ///
    /// The sample that classifies the gesture only decides the mode; its delta
    /// is not applied. Later samples zoom/pan the image when transforming, and
    /// otherwise edit the corners while a free-form crop is active.
    pub fn pointer_move(&mut self, movement: PointerMove) -> GestureMode {
        let ctx = GestureContext {
            corners: self.corners,
            scale: self.transform.scale(),
            pointer_count: movement.pointer_count,
            cropping: self.cropping,
            aspect_ratio: self.aspect_ratio,
            threshold: self.options.touch_threshold,
        };

        let mode = match self.tracker.on_move(&ctx) {
            MoveStep::Classified(mode) => return mode,
            MoveStep::Continued(mode) => mode,
        };

        if !self.tracker.is_pressed() {
            return mode;
        }

        if mode == GestureMode::Transforming {
            self.transform =
                self.transform
                    .apply_pinch(movement.zoom, movement.pan(), self.display);
            trace!("Transform now {}", self.transform);
        } else if self.cropping && self.aspect_ratio.is_free_form() {
            self.dragging = true;
            self.corners = update_corners(
                mode.drag_target(),
                &self.corners,
                movement.delta,
                self.display,
                self.options.min_crop_size,
            );
            trace!("Corners now {}", self.corners);
        }

        mode
    }

    /// Every pointer is up; ends the gesture and returns the mode it had.
    pub fn pointer_up(&mut self) -> GestureMode {
        self.dragging = false;
        self.tracker.release()
    }
}
