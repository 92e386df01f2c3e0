use cropkit_core::{Point, Size};
use cropkit_editor::TransformState;
use proptest::prelude::*;

const DISPLAY: Size = Size::new(1000.0, 800.0);

#[test]
fn test_identity() {
    let t = TransformState::default();
    assert_eq!(t.scale(), 1.0);
    assert_eq!(t.pan(), Point::ZERO);
    assert!(!t.is_zoomed());
    assert_eq!(t.to_display(Point::new(12.0, 34.0), DISPLAY), Point::new(12.0, 34.0));
}

#[test]
fn test_pinch_scales_pan_by_new_zoom() {
    let t = TransformState::IDENTITY.apply_pinch(2.0, Point::new(10.0, -5.0), DISPLAY);
    assert_eq!(t.scale(), 2.0);
    assert_eq!(t.pan(), Point::new(20.0, -10.0));
    assert!(t.is_zoomed());
}

#[test]
fn test_zoom_is_clamped() {
    let t = TransformState::IDENTITY.apply_pinch(10.0, Point::ZERO, DISPLAY);
    assert_eq!(t.scale(), 5.0);
    let t = t.apply_pinch(0.01, Point::ZERO, DISPLAY);
    assert_eq!(t.scale(), 1.0);
    assert_eq!(TransformState::new(f64::NAN, Point::ZERO).scale(), 1.0);
}

#[test]
fn test_pan_is_limited_to_zoom_overflow() {
    let t = TransformState::IDENTITY.apply_pinch(2.0, Point::new(1000.0, -1000.0), DISPLAY);
    assert_eq!(t.pan(), Point::new(500.0, -400.0));

    // Zooming back out pulls the pan in with it
    let t = t.apply_pinch(0.5, Point::ZERO, DISPLAY);
    assert_eq!(t.pan(), Point::ZERO);
}

#[test]
fn test_pan_without_zoom_is_ignored() {
    let t = TransformState::IDENTITY.apply_pinch(1.0, Point::new(50.0, 50.0), DISPLAY);
    assert_eq!(t.pan(), Point::ZERO);
}

#[test]
fn test_display_mapping_about_center() {
    let t = TransformState::new(2.0, Point::new(10.0, 0.0));
    assert_eq!(t.to_display(Point::new(500.0, 400.0), DISPLAY), Point::new(510.0, 400.0));
    assert_eq!(t.to_display(Point::new(0.0, 0.0), DISPLAY), Point::new(-490.0, -400.0));
    assert_eq!(t.to_layout(Point::new(510.0, 400.0), DISPLAY), Point::new(500.0, 400.0));
}

#[test]
fn test_reset_and_display() {
    let mut t = TransformState::new(2.5, Point::new(1.0, 2.0));
    assert_eq!(t.to_string(), "Zoom: 2.50x | Pan: (1.0, 2.0)");
    t.reset();
    assert_eq!(t, TransformState::IDENTITY);
}

#[test]
fn test_deserialize_clamps_scale() {
    let t: TransformState =
        serde_json::from_str(r#"{"scale":10.0,"pan":{"x":3.0,"y":-4.0}}"#).unwrap();
    assert_eq!(t.scale(), 5.0);
    assert_eq!(t.pan(), Point::new(3.0, -4.0));

    let t: TransformState =
        serde_json::from_str(r#"{"scale":0.25,"pan":{"x":0.0,"y":0.0}}"#).unwrap();
    assert_eq!(t, TransformState::IDENTITY);

    let zoomed = TransformState::new(2.5, Point::new(7.0, 1.0));
    let json = serde_json::to_string(&zoomed).unwrap();
    assert_eq!(serde_json::from_str::<TransformState>(&json).unwrap(), zoomed);
}

proptest! {
    #[test]
    fn prop_pinch_stays_in_range(
        zooms in prop::collection::vec((0.2f64..3.0, -300f64..300.0, -300f64..300.0), 1..20),
    ) {
        let mut t = TransformState::IDENTITY;
        for (zoom, dx, dy) in zooms {
            t = t.apply_pinch(zoom, Point::new(dx, dy), DISPLAY);
            let max_x = (t.scale() - 1.0) * DISPLAY.width / 2.0;
            let max_y = (t.scale() - 1.0) * DISPLAY.height / 2.0;
            prop_assert!((1.0..=5.0).contains(&t.scale()));
            prop_assert!(t.pan().x.abs() <= max_x + 1e-9);
            prop_assert!(t.pan().y.abs() <= max_y + 1e-9);
        }
    }

    #[test]
    fn prop_layout_display_round_trip(
        scale in 1f64..5.0,
        px in -400f64..400.0,
        py in -400f64..400.0,
        x in -1000f64..2000.0,
        y in -1000f64..2000.0,
    ) {
        let t = TransformState::new(scale, Point::new(px, py));
        let back = t.to_layout(t.to_display(Point::new(x, y), DISPLAY), DISPLAY);
        prop_assert!(back.distance_to(Point::new(x, y)) < 1e-6);
    }
}
