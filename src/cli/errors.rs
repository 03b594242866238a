use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("Invalid scale: {scale}. Must be a number")]
    InvalidScale { scale: String },

    #[error("Scale must be a positive, finite number, got: {scale}")]
    NonPositiveScale { scale: f64 },
}
