use fast_image_resize::{PixelType, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::ResizeFilter;

/// Largest RGBA buffer we are willing to allocate, shared with the `image` decoder limits.
pub fn max_alloc_bytes() -> u64 {
    image::Limits::default().max_alloc.unwrap_or(u64::MAX)
}

/// Reject a `width`x`height` RGBA target whose buffer would exceed [`max_alloc_bytes`].
pub fn ensure_allocation(width: u32, height: u32) -> Result<()> {
    let bytes = (width as u64 * height as u64).saturating_mul(4);
    if bytes > max_alloc_bytes() {
        return Err(Error::DimensionOverflow {
            width: width as u64,
            height: height as u64,
        });
    }
    Ok(())
}

/// Multiply both dimensions by `scale`, rounding to the nearest pixel.
///
/// Each side is clamped to at least one pixel so tiny scales never produce an
/// empty image.
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> Result<(u32, u32)> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::InvalidArgument {
            arg: "scale",
            value: scale.to_string(),
        });
    }

    let new_width = (width as f64 * scale).round();
    let new_height = (height as f64 * scale).round();

    if new_width > u32::MAX as f64 || new_height > u32::MAX as f64 {
        return Err(Error::DimensionOverflow {
            width: new_width as u64,
            height: new_height as u64,
        });
    }

    let dims = ((new_width as u32).max(1), (new_height as u32).max(1));
    if dims.0 as f64 != new_width || dims.1 as f64 != new_height {
        warn!(
            "Scale {} collapses {}x{} below one pixel; clamping to {}x{}",
            scale, width, height, dims.0, dims.1
        );
    }
    ensure_allocation(dims.0, dims.1)?;
    Ok(dims)
}

pub fn resize_rgba(
    img: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: ResizeFilter,
) -> Result<RgbaImage> {
    let (width, height) = img.dimensions();
    if (width, height) == (target_width, target_height) {
        info!("Already at {}x{}, skipping resample", width, height);
        return Ok(img.clone());
    }

    info!(
        "Original size: {}x{}, New size: {}x{} ({})",
        width, height, target_width, target_height, filter
    );

    let resize_options = ResizeOptions::new().resize_alg(filter.to_resize_alg());
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(width, height, img.as_raw().clone(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        Error::Processing(format!(
            "resized buffer does not match {}x{}",
            target_width, target_height
        ))
    })
}
