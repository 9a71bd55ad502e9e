//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, reader, and encoder errors, and provides semantic
//! variants for argument validation.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image reader error: {0}")]
    Reader(#[from] crate::io::ReaderError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JPEG encoding error: {0}")]
    JpegEncoding(#[from] jpeg_encoder::EncodingError),

    #[error("Margin {margin} is too large for a {width}x{height} image")]
    MarginTooLarge {
        margin: u32,
        width: u32,
        height: u32,
    },

    #[error("No destination paths were given")]
    NoDestinations,

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
