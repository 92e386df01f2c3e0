//! Cutting the confirmed pixel region out of the source bitmap.
//!
//! Decoding and encoding stay with the host; this only slices an
//! already-decoded `DynamicImage`.

use cropkit_core::{CropError, ImageSize, Result};
use image::{DynamicImage, GenericImageView};

use crate::mapping::PixelRect;

/// Natural dimensions of a decoded bitmap.
pub fn image_size(image: &DynamicImage) -> ImageSize {
    let (width, height) = image.dimensions();
    ImageSize::new(width, height)
}

/// Copies `region` out of `image`.
///
/// Regions produced by the mapper always fit the image they were mapped
/// against; a region from a different or resized bitmap is rejected with
/// [`CropError::OutOfBounds`].
pub fn extract_region(image: &DynamicImage, region: PixelRect) -> Result<DynamicImage> {
    let size = image_size(image);
    if region.width == 0 || region.height == 0 || !region.fits(size) {
        return Err(CropError::OutOfBounds {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            image_width: size.width,
            image_height: size.height,
        });
    }

    Ok(image.crop_imm(region.x, region.y, region.width, region.height))
}
