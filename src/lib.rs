#![doc = r#"
alphacrop — crop raster images to their non-transparent content.

This crate finds the bounding box of every pixel whose alpha is above a threshold
(zero by default), crops the image to it and can optionally rescale the result with
a high-quality Lanczos filter. It powers the `crop` and `process_icon` command-line
tools and can be embedded in your own Rust applications.

Command line
------------
```text
crop <INPUT> <OUTPUT>
process_icon <INPUT> <OUTPUT> [SCALE]   # SCALE defaults to 5.0
```

The output format is inferred from the output file extension. Both tools print a
single status line to stdout; `--log` sends diagnostics to stderr.

Quick start: crop a file
------------------------
```rust,no_run
use std::path::Path;
use alphacrop::{process_to_path, CropOutcome, ProcessingParams};

fn main() -> alphacrop::Result<()> {
    match process_to_path(
        Path::new("logo.png"),
        Path::new("logo-cropped.png"),
        &ProcessingParams::default(),
    )? {
        CropOutcome::Written(report) => println!("cropped to {}", report.bbox),
        CropOutcome::NothingToCrop => println!("fully transparent"),
    }
    Ok(())
}
```

Crop and rescale in memory
--------------------------
```rust
use alphacrop::{process_rgba, ProcessingParams};
use image::{Rgba, RgbaImage};

fn main() -> alphacrop::Result<()> {
    let mut img = RgbaImage::new(32, 32);
    for y in 8..12 {
        for x in 4..10 {
            img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
        }
    }

    let processed = process_rgba(&img, &ProcessingParams::icon(2.0))?
        .expect("image has opaque pixels");
    assert_eq!(processed.image.dimensions(), (12, 8));
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use alphacrop::{process_directory_to_path, ProcessingParams};

fn main() -> alphacrop::Result<()> {
    let report = process_directory_to_path(
        Path::new("icons/raw"),
        Path::new("icons/out"),
        &ProcessingParams::icon(5.0),
        true, // continue_on_error
    )?;

    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `alphacrop::Result<T>`; match on `alphacrop::Error` to handle
specific cases. A fully transparent image is not an error: it is reported as
`CropOutcome::NothingToCrop` (or `Ok(None)` from the buffer APIs).

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — bounding box, crop, resize, padding and the pipeline chaining them.
- [`types`] — `BoundingBox` and `ResizeFilter`.
- [`io`] — decoding and encoding, JPEG writer and JSON crop reports.
- [`cli`] — argument parsing and runners behind the binaries.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::ProcessingParams;
pub use core::processing::bbox::alpha_bounding_box;
pub use core::processing::pipeline::{ProcessedImage, process_rgba};
pub use error::{Error, Result};
pub use types::{BoundingBox, ResizeFilter};

// I/O
pub use io::reader::open_rgba;
pub use io::writers::save_rgba;
pub use io::writers::sidecar::CropReport;

// High-level API re-exports
pub use api::{
    BatchReport, CropOutcome, list_directory, process_directory_to_path, process_to_buffer,
    process_to_path,
};
