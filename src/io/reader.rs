use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageReader};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Source image not found: {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A decoded source image together with the container format it was read from.
pub struct SourceImage {
    pub image: DynamicImage,
    /// Sniffed from the file content, not the extension. `None` when the
    /// content matched no known container.
    pub format: Option<ImageFormat>,
}

impl SourceImage {
    /// Open and decode the image at `path`.
    ///
    /// The path is checked before any decoding so a missing source fails
    /// without touching the decoder.
    pub fn open(path: &Path) -> Result<Self, ReaderError> {
        if !path.is_file() {
            return Err(ReaderError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader.format();
        let image = reader.decode().map_err(|source| ReaderError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Loaded {:?}: {}x{}, format: {:?}",
            path,
            image.width(),
            image.height(),
            format
        );

        Ok(SourceImage { image, format })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}
