//! I/O layer for reading source images and encoding outputs.
//! Provides the `reader` for decoding sources and `writers` for PNG/JPEG
//! byte buffers consumed by the save path.
pub mod reader;
pub use reader::{ReaderError, SourceImage};

pub mod writers;
