//! The four-corner representation of a crop rectangle.

use cropkit_core::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four draggable handles of the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, in the order handles are hit-tested.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Unit direction from this corner towards the inside of the rectangle.
    pub fn inward(&self) -> Point {
        match self {
            Corner::TopLeft => Point::new(1.0, 1.0),
            Corner::TopRight => Point::new(-1.0, 1.0),
            Corner::BottomLeft => Point::new(1.0, -1.0),
            Corner::BottomRight => Point::new(-1.0, -1.0),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corner::TopLeft => write!(f, "top-left"),
            Corner::TopRight => write!(f, "top-right"),
            Corner::BottomLeft => write!(f, "bottom-left"),
            Corner::BottomRight => write!(f, "bottom-right"),
        }
    }
}

/// The crop rectangle as four explicit corner points.
///
/// The corners always describe an axis-aligned rectangle: neighbours share one
/// coordinate (`top_right.y == top_left.y`, `bottom_left.x == top_left.x`,
/// `bottom_right.x == top_right.x`, `bottom_right.y == bottom_left.y`).
/// Values are immutable; edits return a new set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropCorners {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl CropCorners {
    /// All four corners at the origin.
    pub const ZERO: CropCorners = CropCorners {
        top_left: Point::ZERO,
        top_right: Point::ZERO,
        bottom_left: Point::ZERO,
        bottom_right: Point::ZERO,
    };

    /// Builds a consistent corner set from edge coordinates.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            top_left: Point::new(left, top),
            top_right: Point::new(right, top),
            bottom_left: Point::new(left, bottom),
            bottom_right: Point::new(right, bottom),
        }
    }

    /// Builds a consistent corner set from a rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        Self::from_edges(rect.left, rect.top, rect.right, rect.bottom)
    }

    /// The rectangle spanned by the top-left and bottom-right corners.
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.top_left, self.bottom_right)
    }

    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }

    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    /// Moves every corner by `delta`.
    pub fn translate(&self, delta: Point) -> Self {
        Self {
            top_left: self.top_left + delta,
            top_right: self.top_right + delta,
            bottom_left: self.bottom_left + delta,
            bottom_right: self.bottom_right + delta,
        }
    }

    /// True when neighbouring corners share their coordinates.
    pub fn is_consistent(&self) -> bool {
        self.top_right.y == self.top_left.y
            && self.bottom_left.x == self.top_left.x
            && self.bottom_right.x == self.top_right.x
            && self.bottom_right.y == self.bottom_left.y
    }
}

impl From<Rect> for CropCorners {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl fmt::Display for CropCorners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.top_left, self.bottom_right)
    }
}
