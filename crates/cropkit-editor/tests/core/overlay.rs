use cropkit_core::{Point, Rect, Size};
use cropkit_editor::{Corner, CropCorners, CropOverlay, Segment};

const CANVAS: Size = Size::new(1000.0, 800.0);

fn corners() -> CropCorners {
    CropCorners::from_edges(100.0, 100.0, 900.0, 700.0)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_dim_regions_surround_crop() {
    let overlay = CropOverlay::new(corners(), CANVAS, true, false);
    assert!(overlay.dims_outside());
    let [top, bottom, left, right] = overlay.dim_regions();
    assert_eq!(top, Rect::new(0.0, 0.0, 1000.0, 100.0));
    assert_eq!(bottom, Rect::new(0.0, 700.0, 1000.0, 800.0));
    assert_eq!(left, Rect::new(0.0, 100.0, 100.0, 700.0));
    assert_eq!(right, Rect::new(900.0, 100.0, 1000.0, 700.0));
}

#[test]
fn test_dim_regions_with_nan_edges() {
    let broken = CropCorners::from_edges(f64::NAN, 100.0, 900.0, f64::NAN);
    let overlay = CropOverlay::new(broken, CANVAS, true, false);
    for band in overlay.dim_regions() {
        assert!(band.left.is_finite() && band.top.is_finite());
        assert!(band.right.is_finite() && band.bottom.is_finite());
    }

    let overlay = CropOverlay::new(corners(), Size::new(f64::NAN, 800.0), true, false);
    assert_eq!(overlay.dim_regions().len(), 4);
}

#[test]
fn test_dim_regions_clip_to_canvas() {
    let wide = CropCorners::from_edges(-50.0, 0.0, 1100.0, 900.0);
    let overlay = CropOverlay::new(wide, CANVAS, true, false);
    for band in overlay.dim_regions() {
        assert!(band.width() >= 0.0 && band.height() >= 0.0);
        assert!(band.is_within(CANVAS));
        assert_eq!(band.width() * band.height(), 0.0);
    }
}

#[test]
fn test_dimming_lifted_while_dragging() {
    let overlay = CropOverlay::new(corners(), CANVAS, true, true);
    assert!(!overlay.dims_outside());
}

#[test]
fn test_grid_lines_split_into_thirds() {
    let overlay = CropOverlay::new(corners(), CANVAS, true, true);
    let lines = overlay.grid_lines();
    assert_eq!(lines.len(), 4);

    assert!(approx(lines[0].from.x, 100.0 + 800.0 / 3.0));
    assert_eq!(lines[0].from.y, 100.0);
    assert_eq!(lines[0].to.y, 700.0);
    assert!(approx(lines[1].from.x, 100.0 + 1600.0 / 3.0));

    assert!(approx(lines[2].from.y, 300.0));
    assert_eq!(lines[2].from.x, 100.0);
    assert_eq!(lines[2].to.x, 900.0);
    assert!(approx(lines[3].from.y, 500.0));
}

#[test]
fn test_grid_only_for_free_form_drag() {
    assert!(CropOverlay::new(corners(), CANVAS, true, false).grid_lines().is_empty());
    assert!(CropOverlay::new(corners(), CANVAS, false, true).grid_lines().is_empty());
    assert!(CropOverlay::new(corners(), CANVAS, true, true)
        .with_grid(false)
        .grid_lines()
        .is_empty());
}

#[test]
fn test_handle_arms_point_inward() {
    let overlay = CropOverlay::new(corners(), CANVAS, true, false);

    let (vertical, horizontal) = overlay.handle_arms(Corner::TopLeft).unwrap();
    assert_eq!(vertical, Segment::new(Point::new(100.0, 100.0), Point::new(100.0, 175.0)));
    assert_eq!(horizontal, Segment::new(Point::new(100.0, 100.0), Point::new(175.0, 100.0)));

    let (vertical, horizontal) = overlay.handle_arms(Corner::BottomRight).unwrap();
    assert_eq!(vertical.to, Point::new(900.0, 625.0));
    assert_eq!(horizontal.to, Point::new(825.0, 700.0));

    for corner in Corner::ALL {
        let (v, h) = overlay.handle_arms(corner).unwrap();
        assert_eq!(v.length(), 75.0);
        assert_eq!(h.length(), 75.0);
    }
}

#[test]
fn test_fixed_ratio_has_no_handles() {
    let overlay = CropOverlay::new(corners(), CANVAS, false, false);
    assert!(overlay.handle_arms(Corner::TopRight).is_none());
    assert_eq!(overlay.crop_rect(), Rect::new(100.0, 100.0, 900.0, 700.0));
}
