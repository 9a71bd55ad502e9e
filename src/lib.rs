#![doc = r#"
LOGOPREP — a small toolkit for preparing app logo assets.

This crate provides a typed, ergonomic API for two operations over raster
images: trimming a fixed-width border off every edge (crop), and re-encoding
an image under a different container format (convert). The result of either
operation is fanned out to one or more destination paths, encoded once so
every destination of a run is byte-identical. It powers the LOGOPREP CLI and
can be embedded in your own Rust applications.

Add dependency
--------------
```toml
[dependencies]
logoprep = "0.1"
```

Quick start: crop a border and update the app icons
---------------------------------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use logoprep::{crop_to_paths, OutputFormat};

fn main() -> logoprep::Result<()> {
    let outputs = vec![
        PathBuf::from("assets/logo_cropped.png"),
        PathBuf::from("assets/images/icon.png"),
        PathBuf::from("assets/images/splash-icon.png"),
    ];

    crop_to_paths(Path::new("assets/logo.png"), 20, &outputs, OutputFormat::Png)
}
```

Convert a JPEG logo to PNG
--------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use logoprep::{convert_to_paths, OutputFormat};

fn main() -> logoprep::Result<()> {
    let outputs = vec![PathBuf::from("assets/images/logo.png")];
    convert_to_paths(Path::new("assets/logo_210.jpg"), &outputs, OutputFormat::Png)
}
```

Process in-memory to `ProcessedImage`
-------------------------------------
```rust,no_run
use std::path::Path;
use logoprep::crop_to_buffer;

fn main() -> logoprep::Result<()> {
    let img = crop_to_buffer(Path::new("assets/logo.png"), 20)?;
    println!("{}x{} from {:?}", img.width, img.height, img.source_format);
    Ok(())
}
```

Error handling
--------------
All public functions return `logoprep::Result<T>`; match on `logoprep::Error`
to handle specific cases, e.g. a missing source or a margin that would leave
no pixels.

```rust,no_run
use std::path::{Path, PathBuf};
use logoprep::{crop_to_paths, Error, OutputFormat, ReaderError};

fn main() {
    let outputs = vec![PathBuf::from("out.png")];
    match crop_to_paths(Path::new("missing.png"), 20, &outputs, OutputFormat::Png) {
        Ok(()) => {}
        Err(Error::Reader(ReaderError::NotFound { path })) => {
            eprintln!("no such source: {path:?}")
        }
        Err(Error::MarginTooLarge { margin, width, height }) => {
            eprintln!("margin {margin} exceeds {width}x{height}")
        }
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — shared types (`OutputFormat`, `CropRegion`).
- [`io`] — source reader and PNG/JPEG encoders.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::{ConvertParams, CropParams, DEFAULT_MARGIN};
pub use error::{Error, Result};
pub use types::{CropRegion, OutputFormat};

// Reader
pub use io::reader::{ReaderError, SourceImage};

// High-level API re-exports
pub use api::{
    ProcessedImage, convert_to_buffer, convert_to_paths, convert_with_params, crop_to_buffer,
    crop_to_paths, crop_with_params,
};
