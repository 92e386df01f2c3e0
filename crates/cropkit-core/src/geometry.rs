//! Geometry primitives for crop regions and touch coordinates.
//!
//! All coordinates are display units with (0,0) at the top-left and +Y going
//! down, matching how touch positions arrive from the host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Clamps `value` into `[min, max]` without panicking when the range is inverted.
///
/// `f64::clamp` panics when `min > max` or either bound is NaN. Crop ranges invert whenever the
/// rectangle is already smaller than the minimum crop size, so in that case the
/// bound named by `prefer_max` wins.
pub fn clamp_saturating(value: f64, min: f64, max: f64, prefer_max: bool) -> f64 {
    if min <= max {
        value.max(min).min(max)
    } else if prefer_max {
        max
    } else {
        min
    }
}

/// A 2D point or vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        (*self - other).length()
    }

    /// Length of this point taken as a vector.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// True when `other` lies within `threshold` of this point (inclusive).
    pub fn is_near(&self, other: Point, threshold: f64) -> bool {
        self.distance_to(other) <= threshold
    }

    /// Clamps each component into the matching component range of `min`..`max`.
    pub fn clamp(&self, min: Point, max: Point) -> Point {
        Point::new(
            clamp_saturating(self.x, min.x, max.x, false),
            clamp_saturating(self.y, min.y, max.y, false),
        )
    }

    /// Returns a copy with `x` replaced.
    pub fn with_x(self, x: f64) -> Point {
        Point { x, ..self }
    }

    /// Returns a copy with `y` replaced.
    pub fn with_y(self, y: f64) -> Point {
        Point { y, ..self }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// A width/height pair in display units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// The empty size.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The smaller of the two dimensions.
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// True when both dimensions are finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Center point of a box of this size anchored at the origin.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x{:.1}", self.width, self.height)
    }
}

/// Natural pixel dimensions of a source bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    /// Creates a new image size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The same dimensions as a floating point [`Size`].
    pub fn as_size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}px", self.width, self.height)
    }
}

/// An axis-aligned rectangle given by its edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Create a new rectangle from edge coordinates.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle spanning two opposite corners.
    pub fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    /// Create a rectangle from its origin and size.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Check if this rectangle contains a point.
    ///
    /// Left and top edges are inclusive, right and bottom edges exclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Translate the rectangle by the given offset.
    pub fn translate(&self, delta: Point) -> Rect {
        Rect::new(
            self.left + delta.x,
            self.top + delta.y,
            self.right + delta.x,
            self.bottom + delta.y,
        )
    }

    /// True when the rectangle lies inside `[0, bounds.width] x [0, bounds.height]`.
    pub fn is_within(&self, bounds: Size) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.right <= bounds.width
            && self.bottom <= bounds.height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.1}, {:.1}] - [{:.1}, {:.1}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}
