use image::DynamicImage;
use jpeg_encoder::{ColorType, Encoder};

use crate::error::Result;

/// Encode `image` as JPEG into an in-memory buffer. Alpha is discarded.
pub fn encode_rgb_jpeg(image: &DynamicImage) -> Result<Vec<u8>> {
    let rgb = image.to_rgb8();
    let (cols, rows) = rgb.dimensions();

    let mut buf = Vec::new();
    let encoder = Encoder::new(&mut buf, 100);
    encoder.encode(rgb.as_raw(), cols as u16, rows as u16, ColorType::Rgb)?;
    Ok(buf)
}
