//! Crop-corner editing.
//!
//! Applies one drag delta to a [`CropCorners`] value and returns the result.
//! A corner drag clamps the moved corner against the opposite, fixed corner
//! (keeping at least `min_crop_size` in each direction) and against the image
//! bounds, then carries the new coordinates over to the two neighbouring
//! corners. A whole-rectangle drag is all-or-nothing: a translation that would
//! leave the image is dropped instead of being clamped.

use cropkit_core::constants::DEFAULT_MIN_CROP_SIZE;
use cropkit_core::{clamp_saturating, Point, Size};
use serde::{Deserialize, Serialize};

use crate::corners::{Corner, CropCorners};

/// What a drag event acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "corner")]
pub enum DragTarget {
    /// Nothing is grabbed; drags leave the corners untouched.
    #[default]
    None,
    /// A single corner handle.
    Corner(Corner),
    /// The whole rectangle, moved without resizing.
    Whole,
}

/// Applies `delta` to `corners` for the given drag target.
///
/// `bounds` is the size of the image area the crop must stay inside.
/// The function is total: when a clamp range is inverted (the rectangle is
/// already smaller than `min_crop_size`), the image bound wins.
pub fn update_corners(
    target: DragTarget,
    corners: &CropCorners,
    delta: Point,
    bounds: Size,
    min_crop_size: f64,
) -> CropCorners {
    match target {
        DragTarget::None => *corners,
        DragTarget::Corner(corner) => drag_corner(corner, corners, delta, bounds, min_crop_size),
        DragTarget::Whole => drag_whole(corners, delta, bounds),
    }
}

/// [`update_corners`] with the default minimum crop size.
pub fn update_corners_default(
    target: DragTarget,
    corners: &CropCorners,
    delta: Point,
    bounds: Size,
) -> CropCorners {
    update_corners(target, corners, delta, bounds, DEFAULT_MIN_CROP_SIZE)
}

fn drag_corner(
    corner: Corner,
    c: &CropCorners,
    delta: Point,
    bounds: Size,
    min: f64,
) -> CropCorners {
    let candidate = c.corner(corner) + delta;

    match corner {
        Corner::TopLeft => {
            let moved = Point::new(
                clamp_saturating(candidate.x, 0.0, c.bottom_right.x - min, false),
                clamp_saturating(candidate.y, 0.0, c.bottom_right.y - min, false),
            );
            CropCorners {
                top_left: moved,
                top_right: c.top_right.with_y(moved.y),
                bottom_left: c.bottom_left.with_x(moved.x),
                bottom_right: c.bottom_right,
            }
        }
        Corner::TopRight => {
            let moved = Point::new(
                clamp_saturating(candidate.x, c.top_left.x + min, bounds.width, true),
                clamp_saturating(candidate.y, 0.0, c.bottom_left.y - min, false),
            );
            CropCorners {
                top_left: c.top_left.with_y(moved.y),
                top_right: moved,
                bottom_left: c.bottom_left,
                bottom_right: c.bottom_right.with_x(moved.x),
            }
        }
        Corner::BottomLeft => {
            let moved = Point::new(
                clamp_saturating(candidate.x, 0.0, c.bottom_right.x - min, false),
                clamp_saturating(candidate.y, c.top_left.y + min, bounds.height, true),
            );
            CropCorners {
                top_left: c.top_left.with_x(moved.x),
                top_right: c.top_right,
                bottom_left: moved,
                bottom_right: c.bottom_right.with_y(moved.y),
            }
        }
        Corner::BottomRight => {
            let moved = Point::new(
                clamp_saturating(candidate.x, c.bottom_left.x + min, bounds.width, true),
                clamp_saturating(candidate.y, c.top_right.y + min, bounds.height, true),
            );
            CropCorners {
                top_left: c.top_left,
                top_right: c.top_right.with_x(moved.x),
                bottom_left: c.bottom_left.with_y(moved.y),
                bottom_right: moved,
            }
        }
    }
}

fn drag_whole(c: &CropCorners, delta: Point, bounds: Size) -> CropCorners {
    if c.rect().translate(delta).is_within(bounds) {
        c.translate(delta)
    } else {
        *c
    }
}
