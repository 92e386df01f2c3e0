//! Aspect-ratio presets and the initial crop rectangle each one seeds.
//!
//! A fixed ratio is applied once, when it is selected. Corner handles are only
//! offered for [`AspectRatio::Custom`], so nothing re-derives the ratio while a
//! drag is in progress.

use cropkit_core::constants::{CUSTOM_RATIO_PADDING, PRESET_FILL_FRACTION};
use cropkit_core::Size;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::corners::CropCorners;

/// Aspect-ratio preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// Free-form, every corner draggable
    #[default]
    #[serde(rename = "custom")]
    Custom,
    /// Square
    #[serde(rename = "1:1")]
    OneToOne,
    /// Landscape 3:2
    #[serde(rename = "3:2")]
    ThreeToTwo,
    /// Portrait 2:3
    #[serde(rename = "2:3")]
    TwoToThree,
}

impl AspectRatio {
    /// Every preset, in the order they are offered to the user.
    pub const ALL: [AspectRatio; 4] = [
        AspectRatio::Custom,
        AspectRatio::OneToOne,
        AspectRatio::ThreeToTwo,
        AspectRatio::TwoToThree,
    ];

    /// Short label shown on the ratio picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::OneToOne => "1:1",
            Self::ThreeToTwo => "3:2",
            Self::TwoToThree => "2:3",
        }
    }

    /// True for the preset whose corners move independently.
    pub fn is_free_form(&self) -> bool {
        matches!(self, Self::Custom)
    }

    /// Width divided by height, or `None` for free-form.
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Self::Custom => None,
            Self::OneToOne => Some(1.0),
            Self::ThreeToTwo => Some(3.0 / 2.0),
            Self::TwoToThree => Some(2.0 / 3.0),
        }
    }

    /// Initial corners for this preset on a display of `display` size.
    ///
    /// Fixed ratios are centered. Zero or negative display sizes are not
    /// rejected and produce a degenerate rectangle.
    pub fn crop_corners(&self, display: Size) -> CropCorners {
        match self {
            Self::Custom => CropCorners::from_edges(
                CUSTOM_RATIO_PADDING,
                CUSTOM_RATIO_PADDING,
                display.width - CUSTOM_RATIO_PADDING,
                display.height - CUSTOM_RATIO_PADDING,
            ),
            Self::OneToOne => {
                let side = display.min_dimension() * PRESET_FILL_FRACTION;
                centered(display, side, side)
            }
            Self::ThreeToTwo => {
                let width = display.width * PRESET_FILL_FRACTION;
                centered(display, width, width * 2.0 / 3.0)
            }
            Self::TwoToThree => {
                let height = display.height * PRESET_FILL_FRACTION;
                centered(display, height * 2.0 / 3.0, height)
            }
        }
    }
}

fn centered(display: Size, width: f64, height: f64) -> CropCorners {
    let left = (display.width - width) / 2.0;
    let top = (display.height - height) / 2.0;
    CropCorners::from_edges(left, top, left + width, top + height)
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "custom" | "free" | "freeform" => Ok(Self::Custom),
            "1:1" | "square" => Ok(Self::OneToOne),
            "3:2" => Ok(Self::ThreeToTwo),
            "2:3" => Ok(Self::TwoToThree),
            _ => Err(format!("Unknown aspect ratio: {}", s)),
        }
    }
}
