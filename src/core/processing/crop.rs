use image::DynamicImage;
use tracing::info;

use crate::error::{Error, Result};
use crate::types::CropRegion;

/// Derive the crop rectangle for a uniform border inset.
///
/// Fails when the margin would leave no pixels in either axis, i.e. when
/// `2 * margin >= width` or `2 * margin >= height`.
pub fn inset_region(width: u32, height: u32, margin: u32) -> Result<CropRegion> {
    let inset = margin.saturating_mul(2);
    if inset >= width || inset >= height {
        return Err(Error::MarginTooLarge {
            margin,
            width,
            height,
        });
    }

    Ok(CropRegion {
        left: margin,
        top: margin,
        right: width - margin,
        bottom: height - margin,
    })
}

/// Non-destructive crop of `image` to `region`.
pub fn crop_to_region(image: &DynamicImage, region: CropRegion) -> DynamicImage {
    image.crop_imm(region.left, region.top, region.width(), region.height())
}

/// Trim a uniform border of `margin` pixels off every edge of `image`.
pub fn crop_border(image: &DynamicImage, margin: u32) -> Result<DynamicImage> {
    let region = inset_region(image.width(), image.height(), margin)?;
    info!(
        "Cropping {}x{} to region {} -> {}x{}",
        image.width(),
        image.height(),
        region,
        region.width(),
        region.height()
    );
    Ok(crop_to_region(image, region))
}
