//! Numeric geometry of the crop overlay.
//!
//! The host paints; this module only says where. Features:
//! - dimmed area outside the crop rectangle
//! - rule-of-thirds grid while a free-form crop is being dragged
//! - L-shaped corner handles for free-form crops

use cropkit_core::constants::{GRID_DIVISIONS, HANDLE_ARM_LENGTH};
use cropkit_core::{clamp_saturating, Point, Rect, Size};

use crate::corners::{Corner, CropCorners};

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }
}

/// Overlay layout for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropOverlay {
    corners: CropCorners,
    canvas: Size,
    free_form: bool,
    dragging: bool,
    grid: bool,
}

impl CropOverlay {
    pub fn new(corners: CropCorners, canvas: Size, free_form: bool, dragging: bool) -> Self {
        Self {
            corners,
            canvas,
            free_form,
            dragging,
            grid: true,
        }
    }

    /// Turns the drag grid on or off.
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// The crop rectangle itself.
    pub fn crop_rect(&self) -> Rect {
        self.corners.rect()
    }

    /// Whether the host should dim the outside. Dimming is lifted during a drag
    /// so the whole image stays visible.
    pub fn dims_outside(&self) -> bool {
        !self.dragging
    }

    /// The canvas area outside the crop rectangle as four bands: a full-width
    /// band above, a full-width band below, and left/right bands between them.
    ///
    /// Bands are clipped to the canvas and may be empty.
    pub fn dim_regions(&self) -> [Rect; 4] {
        let crop = self.crop_rect();
        let w = self.canvas.width;
        let h = self.canvas.height;
        let top = clamp_saturating(crop.top, 0.0, h.max(0.0), false);
        let bottom = clamp_saturating(crop.bottom, top, h.max(top), true);
        let left = clamp_saturating(crop.left, 0.0, w.max(0.0), false);
        let right = clamp_saturating(crop.right, left, w.max(left), true);

        [
            Rect::new(0.0, 0.0, w, top),
            Rect::new(0.0, bottom, w, h.max(bottom)),
            Rect::new(0.0, top, left, bottom),
            Rect::new(right, top, w.max(right), bottom),
        ]
    }

    /// Inner grid lines, vertical ones first. Empty unless a free-form crop is
    /// being dragged with the grid enabled.
    pub fn grid_lines(&self) -> Vec<Segment> {
        if !(self.grid && self.free_form && self.dragging) {
            return Vec::new();
        }

        let rect = self.crop_rect();
        let mut lines = Vec::with_capacity(2 * (GRID_DIVISIONS - 1));
        for i in 1..GRID_DIVISIONS {
            let x = rect.left + rect.width() * i as f64 / GRID_DIVISIONS as f64;
            lines.push(Segment::new(
                Point::new(x, rect.top),
                Point::new(x, rect.bottom),
            ));
        }
        for i in 1..GRID_DIVISIONS {
            let y = rect.top + rect.height() * i as f64 / GRID_DIVISIONS as f64;
            lines.push(Segment::new(
                Point::new(rect.left, y),
                Point::new(rect.right, y),
            ));
        }
        lines
    }

    /// Vertical and horizontal arms of the handle at `corner`, both starting
    /// at the corner and pointing into the rectangle. `None` for fixed ratios.
    pub fn handle_arms(&self, corner: Corner) -> Option<(Segment, Segment)> {
        if !self.free_form {
            return None;
        }

        let at = self.corners.corner(corner);
        let dir = corner.inward();
        Some((
            Segment::new(at, at.with_y(at.y + dir.y * HANDLE_ARM_LENGTH)),
            Segment::new(at, at.with_x(at.x + dir.x * HANDLE_ARM_LENGTH)),
        ))
    }
}
