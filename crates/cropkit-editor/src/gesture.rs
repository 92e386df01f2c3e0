//! Gesture classification for the crop screen.
//!
//! A touch sequence (first pointer down until every pointer is up) is
//! classified exactly once, on the first movement after the touch-down, and
//! keeps that mode until release:
//!
//! ```text
//! Released --press--> Pressed --first move / classify--> Active(mode)
//!    ^                                                      |
//!    +------------------------release-----------------------+
//! ```
//!
//! Classification order:
//! 1. More than one pointer, or zoomed in while not touching the crop shape: transform.
//! 2. Touching a handle of a free-form crop: corner drag (first match in
//!    [`Corner::ALL`] order).
//! 3. Inside a free-form crop rectangle: center drag.
//! 4. Anything else: idle.

use cropkit_core::constants::DEFAULT_TOUCH_THRESHOLD;
use cropkit_core::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::aspect_ratio::AspectRatio;
use crate::corners::{Corner, CropCorners};
use crate::editor::DragTarget;

/// Interaction mode of one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "corner")]
pub enum GestureMode {
    /// No crop interaction; events pass through.
    #[default]
    Idle,
    /// Pinch-zoom / pan of the displayed image.
    Transforming,
    /// Resizing via one corner handle.
    CornerDragging(Corner),
    /// Moving the whole crop rectangle.
    CenterDragging,
}

impl GestureMode {
    /// The drag target this mode edits, if any.
    pub fn drag_target(&self) -> DragTarget {
        match self {
            GestureMode::CornerDragging(corner) => DragTarget::Corner(*corner),
            GestureMode::CenterDragging => DragTarget::Whole,
            GestureMode::Idle | GestureMode::Transforming => DragTarget::None,
        }
    }

    /// True for the two modes that edit the crop rectangle.
    pub fn is_crop_drag(&self) -> bool {
        matches!(
            self,
            GestureMode::CornerDragging(_) | GestureMode::CenterDragging
        )
    }
}

impl fmt::Display for GestureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureMode::Idle => write!(f, "idle"),
            GestureMode::Transforming => write!(f, "transforming"),
            GestureMode::CornerDragging(corner) => write!(f, "dragging {} corner", corner),
            GestureMode::CenterDragging => write!(f, "dragging crop"),
        }
    }
}

/// Everything the classifier looks at besides the touch-down position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureContext {
    pub corners: CropCorners,
    /// Current user zoom.
    pub scale: f64,
    /// Pointers down when the first movement arrives.
    pub pointer_count: usize,
    /// Whether the crop overlay is active.
    pub cropping: bool,
    pub aspect_ratio: AspectRatio,
    /// Handle proximity radius.
    pub threshold: f64,
}

impl GestureContext {
    /// Context for a single pointer with the default touch threshold.
    pub fn new(corners: CropCorners, scale: f64, cropping: bool, aspect_ratio: AspectRatio) -> Self {
        Self {
            corners,
            scale,
            pointer_count: 1,
            cropping,
            aspect_ratio,
            threshold: DEFAULT_TOUCH_THRESHOLD,
        }
    }

    pub fn with_pointer_count(mut self, pointer_count: usize) -> Self {
        self.pointer_count = pointer_count;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    fn handles_active(&self) -> bool {
        self.cropping && self.aspect_ratio.is_free_form()
    }
}

/// The first handle within `threshold` of `position`, in [`Corner::ALL`] order.
pub fn near_corner(position: Point, corners: &CropCorners, threshold: f64) -> Option<Corner> {
    Corner::ALL
        .into_iter()
        .find(|&corner| position.is_near(corners.corner(corner), threshold))
}

/// Decides the interaction mode for a gesture that started at `start`.
pub fn classify(start: Point, ctx: &GestureContext) -> GestureMode {
    let (handle, inside) = if ctx.handles_active() {
        (
            near_corner(start, &ctx.corners, ctx.threshold),
            ctx.corners.rect().contains(start),
        )
    } else {
        (None, false)
    };
    let on_crop_shape = handle.is_some() || inside;

    if ctx.pointer_count > 1 || (ctx.scale > 1.0 && !on_crop_shape) {
        GestureMode::Transforming
    } else if let Some(corner) = handle {
        GestureMode::CornerDragging(corner)
    } else if inside {
        GestureMode::CenterDragging
    } else {
        GestureMode::Idle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Phase {
    #[default]
    Released,
    Pressed {
        start: Point,
    },
    Active {
        start: Point,
        mode: GestureMode,
    },
}

/// Result of feeding one movement into the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStep {
    /// This movement decided the mode. It carries no drag delta of its own.
    Classified(GestureMode),
    /// A later movement of an already classified gesture.
    Continued(GestureMode),
}

impl MoveStep {
    pub fn mode(&self) -> GestureMode {
        match self {
            MoveStep::Classified(mode) | MoveStep::Continued(mode) => *mode,
        }
    }
}

/// Tracks one gesture from touch-down to release.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    phase: Phase,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the first pointer going down. A press during an active gesture
    /// (an extra finger) does not restart classification.
    pub fn press(&mut self, position: Point) {
        if matches!(self.phase, Phase::Released) {
            self.phase = Phase::Pressed { start: position };
        }
    }

    /// Feeds a movement event. The first movement after a press classifies the
    /// gesture with `ctx`; later movements reuse the frozen mode.
    pub fn on_move(&mut self, ctx: &GestureContext) -> MoveStep {
        match self.phase {
            Phase::Released => MoveStep::Continued(GestureMode::Idle),
            Phase::Pressed { start } => {
                let mode = classify(start, ctx);
                debug!("Gesture at {} classified as {}", start, mode);
                self.phase = Phase::Active { start, mode };
                MoveStep::Classified(mode)
            }
            Phase::Active { mode, .. } => MoveStep::Continued(mode),
        }
    }

    /// Ends the gesture and returns the mode it had (idle if it never moved).
    pub fn release(&mut self) -> GestureMode {
        let mode = self.mode();
        self.phase = Phase::Released;
        mode
    }

    /// Mode of the current gesture, idle when none is classified.
    pub fn mode(&self) -> GestureMode {
        match self.phase {
            Phase::Active { mode, .. } => mode,
            Phase::Released | Phase::Pressed { .. } => GestureMode::Idle,
        }
    }

    /// Touch-down position of the current gesture.
    pub fn start(&self) -> Option<Point> {
        match self.phase {
            Phase::Released => None,
            Phase::Pressed { start } | Phase::Active { start, .. } => Some(start),
        }
    }

    /// True between press and release.
    pub fn is_pressed(&self) -> bool {
        !matches!(self.phase, Phase::Released)
    }
}
