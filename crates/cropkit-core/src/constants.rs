//! Tuning constants shared by the crop editor and its hosts.

/// Smallest width or height a crop rectangle may be resized to, in display units.
pub const DEFAULT_MIN_CROP_SIZE: f64 = 100.0;

/// Radius around a corner handle that still counts as touching it.
pub const DEFAULT_TOUCH_THRESHOLD: f64 = 80.0;

/// Inset from every display edge used by the free-form preset.
pub const CUSTOM_RATIO_PADDING: f64 = 50.0;

/// Share of the display the fixed-ratio presets fill along their limiting axis.
pub const PRESET_FILL_FRACTION: f64 = 0.8;

/// Lower bound of the user zoom.
pub const MIN_SCALE: f64 = 1.0;

/// Upper bound of the user zoom.
pub const MAX_SCALE: f64 = 5.0;

/// Length of each arm of an L-shaped corner handle.
pub const HANDLE_ARM_LENGTH: f64 = 75.0;

/// Number of cells per side of the rule-of-thirds grid.
pub const GRID_DIVISIONS: usize = 3;
