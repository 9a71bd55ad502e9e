use std::fs;
use std::path::PathBuf;

use image::DynamicImage;
use tracing::info;

use crate::error::{Error, Result};
use crate::io::writers::jpeg::encode_rgb_jpeg;
use crate::io::writers::png::encode_png;
use crate::types::OutputFormat;

/// Encode `image` once in `format` and write the same bytes to every
/// destination path.
///
/// Destinations are overwritten in place. Writes happen in list order;
/// a failing write aborts the run without rolling back earlier ones.
pub fn save_image_to_targets(
    image: &DynamicImage,
    outputs: &[PathBuf],
    format: OutputFormat,
) -> Result<()> {
    if outputs.is_empty() {
        return Err(Error::NoDestinations);
    }

    let encoded = match format {
        OutputFormat::Png => encode_png(image)?,
        OutputFormat::Jpeg => encode_rgb_jpeg(image)?,
    };

    for output in outputs {
        fs::write(output, &encoded)?;
        info!(
            "Saved {}x{} {} to {:?}",
            image.width(),
            image.height(),
            format,
            output
        );
    }

    Ok(())
}
