//! # CropKit Editor
//!
//! This crate provides the crop-rectangle engine behind an interactive image
//! cropping screen. Everything here is pure geometry over plain values: the
//! host delivers positions, deltas and sizes and draws whatever comes back.
//!
//! ## Core Components
//!
//! - **Aspect ratios**: Free-form, 1:1, 3:2 and 2:3 presets that seed the crop
//! - **Corner editor**: Corner resizing and whole-rectangle moves with
//!   minimum-size and in-bounds constraints
//! - **Gestures**: One-shot classification of a touch sequence into corner
//!   drag, center drag, pinch/pan or pass-through
//! - **Transform**: User zoom and pan of the displayed image
//! - **Mapping**: Canvas crop rectangle to source-bitmap pixels
//! - **Overlay**: Dim bands, grid and handle geometry for the renderer
//! - **Session**: Screen-level controller tying the pieces together
//!
//! ## Architecture
//!
//! ```text
//! Session (owns corners, transform, ratio, flags)
//!   ├── GestureTracker ──> classify()        (once per gesture)
//!   ├── update_corners()                     (per movement)
//!   ├── AspectRatio::crop_corners()          (on ratio/layout change)
//!   └── to_source_rect()                     (on confirm)
//!         └── extract_region()               (host bitmap)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use cropkit_core::{ImageSize, Point, Size};
//! use cropkit_editor::{CropSession, PointerMove};
//!
//! let mut session = CropSession::default();
//! session.load_image(ImageSize::new(2000, 1600));
//! session.set_layout(Size::new(1000.0, 800.0), Size::new(1000.0, 800.0));
//! session.start_cropping();
//!
//! // Drag the bottom-right handle inwards
//! session.pointer_down(Point::new(950.0, 750.0));
//! session.pointer_move(PointerMove::drag(Point::new(-1.0, -1.0)));
//! session.pointer_move(PointerMove::drag(Point::new(-100.0, -50.0)));
//! session.pointer_up();
//!
//! let pixels = session.confirm().unwrap();
//! assert_eq!((pixels.x, pixels.y), (100, 100));
//! assert_eq!((pixels.width, pixels.height), (1600, 1300));
//! ```

pub mod aspect_ratio;
pub mod corners;
pub mod editor;
pub mod extract;
pub mod gesture;
pub mod mapping;
pub mod overlay;
pub mod session;
pub mod transform;

pub use aspect_ratio::AspectRatio;
pub use corners::{Corner, CropCorners};
pub use editor::{update_corners, update_corners_default, DragTarget};
pub use extract::{extract_region, image_size};
pub use gesture::{
    classify, near_corner, GestureContext, GestureMode, GestureTracker, MoveStep,
};
pub use mapping::{fit_ratio, to_source_rect, try_to_source_rect, MappingMode, PixelRect};
pub use overlay::{CropOverlay, Segment};
pub use session::{CropSession, PointerMove, SessionEvent, SessionOptions};
pub use transform::TransformState;
