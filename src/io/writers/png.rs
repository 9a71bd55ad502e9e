use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::error::Result;

/// Encode `image` as PNG into an in-memory buffer, preserving its pixel mode.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
