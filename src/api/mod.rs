//! High-level, ergonomic library API: crop or convert a source image to
//! destination paths or to in-memory buffers. Prefer these entrypoints over
//! the low-level processing modules when integrating LOGOPREP.
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::core::params::{ConvertParams, CropParams};
use crate::core::processing::crop::crop_border;
use crate::core::processing::save::save_image_to_targets;
use crate::error::Result;
use crate::io::SourceImage;
use crate::types::OutputFormat;

/// Result of in-memory processing
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pub width: u32,
    pub height: u32,
    /// Container format the source was decoded from, when it could be sniffed
    pub source_format: Option<ImageFormat>,
    pub image: DynamicImage,
}

impl ProcessedImage {
    fn from_parts(image: DynamicImage, source_format: Option<ImageFormat>) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            source_format,
            image,
        }
    }
}

/// Crop a uniform border off the image at `input` and return the result
/// in memory (no disk I/O)
pub fn crop_to_buffer(input: &Path, margin: u32) -> Result<ProcessedImage> {
    let source = SourceImage::open(input)?;
    let cropped = crop_border(&source.image, margin)?;
    Ok(ProcessedImage::from_parts(cropped, source.format))
}

/// Crop a uniform border off the image at `input` and write the result,
/// encoded as `format`, to every path in `outputs`
pub fn crop_to_paths(
    input: &Path,
    margin: u32,
    outputs: &[PathBuf],
    format: OutputFormat,
) -> Result<()> {
    let source = SourceImage::open(input)?;
    let cropped = crop_border(&source.image, margin)?;
    save_image_to_targets(&cropped, outputs, format)
}

/// Convenience variant of [`crop_to_paths`] driven by [`CropParams`]
pub fn crop_with_params(input: &Path, outputs: &[PathBuf], params: &CropParams) -> Result<()> {
    crop_to_paths(input, params.margin, outputs, params.format)
}

/// Decode the image at `input` and return it in memory (no disk I/O)
pub fn convert_to_buffer(input: &Path) -> Result<ProcessedImage> {
    let source = SourceImage::open(input)?;
    let format = source.format;
    Ok(ProcessedImage::from_parts(source.image, format))
}

/// Decode the image at `input` and write it, re-encoded as `format`, to
/// every path in `outputs`. Pixels pass through untouched; only the
/// container encoding changes.
pub fn convert_to_paths(input: &Path, outputs: &[PathBuf], format: OutputFormat) -> Result<()> {
    let source = SourceImage::open(input)?;
    save_image_to_targets(&source.image, outputs, format)
}

/// Convenience variant of [`convert_to_paths`] driven by [`ConvertParams`]
pub fn convert_with_params(
    input: &Path,
    outputs: &[PathBuf],
    params: &ConvertParams,
) -> Result<()> {
    convert_to_paths(input, outputs, params.format)
}
