use clap::{Args, Parser};
use std::path::PathBuf;

use crate::core::params::DEFAULT_ICON_SCALE;
use crate::{ProcessingParams, ResizeFilter};

use super::errors::AppError;

/// Flags shared by both binaries
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Treat pixels with alpha at or below this value as transparent
    #[arg(long, default_value_t = 0)]
    pub threshold: u8,

    /// Write a JSON crop report next to the output (<output>.crop.json)
    #[arg(long, default_value_t = false)]
    pub sidecar: bool,

    /// Exit with status 1 when processing fails instead of 0
    #[arg(long, default_value_t = false)]
    pub fail_on_error: bool,

    /// Enable logging to stderr (refine with RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "crop",
    version,
    about = "Crop an image to the bounding box of its non-transparent pixels"
)]
pub struct CropArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image (format inferred from the extension)
    pub output: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CropArgs {
    pub fn params(&self) -> ProcessingParams {
        ProcessingParams {
            alpha_threshold: self.common.threshold,
            sidecar: self.common.sidecar,
            ..ProcessingParams::default()
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "process_icon",
    version,
    about = "Crop an image to its non-transparent content and rescale it"
)]
pub struct ProcessIconArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image (format inferred from the extension)
    pub output: PathBuf,

    /// Factor applied to both cropped dimensions
    #[arg(default_value_t = DEFAULT_ICON_SCALE, value_parser = parse_scale)]
    pub scale: f64,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = ResizeFilter::Lanczos3)]
    pub filter: ResizeFilter,

    /// Center the result on a transparent square canvas
    #[arg(long, default_value_t = false)]
    pub pad: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ProcessIconArgs {
    pub fn params(&self) -> ProcessingParams {
        ProcessingParams {
            alpha_threshold: self.common.threshold,
            scale: Some(self.scale),
            filter: self.filter,
            pad: self.pad,
            sidecar: self.common.sidecar,
        }
    }
}

pub fn parse_scale(s: &str) -> Result<f64, AppError> {
    let scale = s.trim().parse::<f64>().map_err(|_| AppError::InvalidScale {
        scale: s.to_string(),
    })?;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(AppError::NonPositiveScale { scale });
    }
    Ok(scale)
}
