use image::RgbaImage;
use tracing::debug;

use crate::types::BoundingBox;

/// Smallest box containing every pixel whose alpha is above `threshold`.
///
/// Returns `None` for fully transparent or zero-sized images.
pub fn alpha_bounding_box(img: &RgbaImage, threshold: u8) -> Option<BoundingBox> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let row_len = width as usize * 4;
    let raw = img.as_raw();

    let mut left = width;
    let mut right = 0u32;
    let mut top = None;
    let mut bottom = 0u32;

    for (y, row) in raw.chunks_exact(row_len).enumerate() {
        let alphas = || row.chunks_exact(4).map(|px| px[3]);
        let Some(last) = alphas().rposition(|a| a > threshold) else {
            continue;
        };
        let first = alphas()
            .take(last + 1)
            .position(|a| a > threshold)
            .map_or(last, |f| f);

        let y = y as u32;
        top.get_or_insert(y);
        bottom = y + 1;
        left = left.min(first as u32);
        right = right.max(last as u32 + 1);
    }

    let bbox = BoundingBox {
        left,
        top: top?,
        right,
        bottom,
    };
    debug!("Alpha bounding box: {} within {}x{}", bbox, width, height);
    Some(bbox)
}
