//! # CropKit Core
//!
//! Core types and utilities for CropKit.
//! Provides the geometry primitives every other crate builds on, the tuning
//! constants of the crop editor, and the shared error type.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{CropError, Result};
pub use geometry::{clamp_saturating, ImageSize, Point, Rect, Size};
