//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, codec, resampling and serialization errors, and provides
//! semantic variants for argument validation and processing failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("JPEG encoding error: {0}")]
    JpegEncoding(#[from] jpeg_encoder::EncodingError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Image dimensions {width}x{height} exceed the supported range")]
    DimensionOverflow { width: u64, height: u64 },

    #[error("Processing error: {0}")]
    Processing(String),
}
