use image::RgbaImage;
use tracing::info;

use crate::core::params::ProcessingParams;
use crate::core::processing::bbox::alpha_bounding_box;
use crate::core::processing::crop::crop_to_box;
use crate::core::processing::padding::pad_to_square;
use crate::core::processing::resize::{ensure_allocation, resize_rgba, scaled_dimensions};
use crate::error::Result;
use crate::types::BoundingBox;

/// Result of in-memory processing
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pub image: RgbaImage,
    pub source_width: u32,
    pub source_height: u32,
    pub bbox: BoundingBox,
    pub scale: Option<f64>,
    pub padded: bool,
}

impl ProcessedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Crop `img` to its non-transparent content, then optionally rescale and pad.
///
/// Returns `Ok(None)` when no pixel is above the alpha threshold.
pub fn process_rgba(img: &RgbaImage, params: &ProcessingParams) -> Result<Option<ProcessedImage>> {
    let (source_width, source_height) = img.dimensions();

    let Some(bbox) = alpha_bounding_box(img, params.alpha_threshold) else {
        info!(
            "No pixel above alpha {} in {}x{} image",
            params.alpha_threshold, source_width, source_height
        );
        return Ok(None);
    };

    let mut out = crop_to_box(img, bbox);

    if let Some(scale) = params.scale {
        let (target_width, target_height) = scaled_dimensions(out.width(), out.height(), scale)?;
        out = resize_rgba(&out, target_width, target_height, params.filter)?;
    }

    if params.pad {
        let side = out.width().max(out.height());
        ensure_allocation(side, side)?;
        out = pad_to_square(&out);
    }

    Ok(Some(ProcessedImage {
        image: out,
        source_width,
        source_height,
        bbox,
        scale: params.scale,
        padded: params.pad,
    }))
}
