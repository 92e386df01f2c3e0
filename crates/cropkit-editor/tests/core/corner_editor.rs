use cropkit_core::{Point, Size};
use cropkit_editor::{update_corners, update_corners_default, Corner, CropCorners, DragTarget};
use proptest::prelude::*;

fn sample() -> CropCorners {
    CropCorners::from_edges(50.0, 50.0, 950.0, 750.0)
}

const BOUNDS: Size = Size::new(1000.0, 800.0);

#[test]
fn test_top_left_drag_to_far_outside() {
    let out = update_corners(
        DragTarget::Corner(Corner::TopLeft),
        &sample(),
        Point::new(-1000.0, -1000.0),
        BOUNDS,
        100.0,
    );
    assert_eq!(out.top_left, Point::new(0.0, 0.0));
    assert_eq!(out.top_right.y, 0.0);
    assert_eq!(out.bottom_left.x, 0.0);
    assert_eq!(out.bottom_right, Point::new(950.0, 750.0));
    assert!(out.is_consistent());
}

#[test]
fn test_top_right_drag_moves_neighbours() {
    let out = update_corners_default(
        DragTarget::Corner(Corner::TopRight),
        &sample(),
        Point::new(20.0, 30.0),
        BOUNDS,
    );
    assert_eq!(out.top_right, Point::new(970.0, 80.0));
    assert_eq!(out.top_left, Point::new(50.0, 80.0));
    assert_eq!(out.bottom_right, Point::new(970.0, 750.0));
    assert_eq!(out.bottom_left, Point::new(50.0, 750.0));
}

#[test]
fn test_bottom_left_drag_stops_at_min_size() {
    // Try to collapse the rectangle onto its right/top edges
    let out = update_corners_default(
        DragTarget::Corner(Corner::BottomLeft),
        &sample(),
        Point::new(5000.0, -5000.0),
        BOUNDS,
    );
    assert_eq!(out.bottom_left, Point::new(850.0, 150.0));
    assert_eq!(out.width(), 100.0);
    assert_eq!(out.height(), 100.0);
    assert_eq!(out.top_left, Point::new(850.0, 50.0));
    assert_eq!(out.bottom_right, Point::new(950.0, 150.0));
}

#[test]
fn test_bottom_right_clamped_to_image_bounds() {
    let out = update_corners_default(
        DragTarget::Corner(Corner::BottomRight),
        &sample(),
        Point::new(300.0, 300.0),
        BOUNDS,
    );
    assert_eq!(out.bottom_right, Point::new(1000.0, 800.0));
    assert_eq!(out.top_right, Point::new(1000.0, 50.0));
    assert_eq!(out.bottom_left, Point::new(50.0, 800.0));
}

#[test]
fn test_sequential_corner_drags_use_current_positions() {
    let first = update_corners_default(
        DragTarget::Corner(Corner::TopLeft),
        &sample(),
        Point::new(10.0, 10.0),
        BOUNDS,
    );
    let second = update_corners_default(
        DragTarget::Corner(Corner::BottomRight),
        &first,
        Point::new(-10.0, -10.0),
        BOUNDS,
    );
    assert_eq!(second.rect().left, 60.0);
    assert_eq!(second.rect().top, 60.0);
    assert_eq!(second.rect().right, 940.0);
    assert_eq!(second.rect().bottom, 740.0);
}

#[test]
fn test_whole_drag_translates_inside_bounds() {
    let out = update_corners_default(
        DragTarget::Whole,
        &sample(),
        Point::new(-50.0, 50.0),
        BOUNDS,
    );
    assert_eq!(out, CropCorners::from_edges(0.0, 100.0, 900.0, 800.0));
}

#[test]
fn test_whole_drag_rejected_when_leaving_bounds() {
    let c = sample();
    let out = update_corners_default(DragTarget::Whole, &c, Point::new(-50.1, 0.0), BOUNDS);
    assert_eq!(out, c);
    let out = update_corners_default(DragTarget::Whole, &c, Point::new(0.0, 60.0), BOUNDS);
    assert_eq!(out, c);
}

#[test]
fn test_undersized_rectangle_does_not_panic() {
    // Narrower than the minimum: the clamp range for the left edge is inverted
    let tiny = CropCorners::from_edges(10.0, 10.0, 60.0, 60.0);
    let out = update_corners_default(
        DragTarget::Corner(Corner::TopLeft),
        &tiny,
        Point::new(5.0, 5.0),
        BOUNDS,
    );
    assert_eq!(out.top_left, Point::new(0.0, 0.0));
    assert!(out.is_consistent());
}

fn arb_target() -> impl Strategy<Value = DragTarget> {
    prop_oneof![
        Just(DragTarget::None),
        Just(DragTarget::Whole),
        Just(DragTarget::Corner(Corner::TopLeft)),
        Just(DragTarget::Corner(Corner::TopRight)),
        Just(DragTarget::Corner(Corner::BottomLeft)),
        Just(DragTarget::Corner(Corner::BottomRight)),
    ]
}

/// Valid crop rectangles inside a 1000x800 image with at least 100 per side.
fn arb_corners() -> impl Strategy<Value = CropCorners> {
    (0f64..900.0, 0f64..700.0).prop_flat_map(|(left, top)| {
        ((left + 100.0)..=1000.0, (top + 100.0)..=800.0)
            .prop_map(move |(right, bottom)| CropCorners::from_edges(left, top, right, bottom))
    })
}

proptest! {
    #[test]
    fn prop_corner_drags_keep_min_size_and_bounds(
        corners in arb_corners(),
        target in arb_target(),
        dx in -2000f64..2000.0,
        dy in -2000f64..2000.0,
    ) {
        let out = update_corners_default(target, &corners, Point::new(dx, dy), BOUNDS);
        prop_assert!(out.is_consistent());
        prop_assert!(out.width() >= 100.0 - 1e-9);
        prop_assert!(out.height() >= 100.0 - 1e-9);
        prop_assert!(out.top_left.x >= 0.0 && out.top_left.y >= 0.0);
        prop_assert!(out.bottom_right.x <= 1000.0 && out.bottom_right.y <= 800.0);
    }

    #[test]
    fn prop_zero_delta_is_identity(corners in arb_corners(), target in arb_target()) {
        let out = update_corners_default(target, &corners, Point::ZERO, BOUNDS);
        prop_assert_eq!(out, corners);
    }

    #[test]
    fn prop_whole_drag_all_or_nothing(
        corners in arb_corners(),
        dx in -1000f64..1000.0,
        dy in -1000f64..1000.0,
    ) {
        let delta = Point::new(dx, dy);
        let out = update_corners_default(DragTarget::Whole, &corners, delta, BOUNDS);
        if corners.rect().translate(delta).is_within(BOUNDS) {
            prop_assert_eq!(out, corners.translate(delta));
        } else {
            prop_assert_eq!(out, corners);
        }
    }
}
