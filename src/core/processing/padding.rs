use image::RgbaImage;
use tracing::info;

/// Center `img` on a transparent square canvas of side `max(width, height)`.
pub fn pad_to_square(img: &RgbaImage) -> RgbaImage {
    let (cols, rows) = img.dimensions();
    let max_dim = cols.max(rows);
    if cols == rows {
        return img.clone();
    }
    let pad_cols = (max_dim - cols) / 2;
    let pad_rows = (max_dim - rows) / 2;

    info!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );
    info!("Final dimensions: {}x{}", max_dim, max_dim);

    let mut padded = RgbaImage::new(max_dim, max_dim);
    let src = img.as_raw();
    let dst: &mut [u8] = &mut padded;
    let row_bytes = cols as usize * 4;
    let stride = max_dim as usize * 4;
    for row in 0..rows as usize {
        let src_offset = row * row_bytes;
        let dst_offset = (row + pad_rows as usize) * stride + pad_cols as usize * 4;
        dst[dst_offset..dst_offset + row_bytes]
            .copy_from_slice(&src[src_offset..src_offset + row_bytes]);
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn wide_image_is_centered_vertically() {
        let img = RgbaImage::from_pixel(6, 2, Rgba([9, 9, 9, 255]));
        let out = pad_to_square(&img);
        assert_eq!(out.dimensions(), (6, 6));
        assert_eq!(out.get_pixel(0, 1)[3], 0);
        assert_eq!(out.get_pixel(0, 2), &Rgba([9, 9, 9, 255]));
        assert_eq!(out.get_pixel(5, 3), &Rgba([9, 9, 9, 255]));
        assert_eq!(out.get_pixel(5, 4)[3], 0);
    }

    #[test]
    fn odd_padding_rounds_down_on_the_leading_edge() {
        let img = RgbaImage::from_pixel(2, 5, Rgba([1, 1, 1, 255]));
        let out = pad_to_square(&img);
        assert_eq!(out.dimensions(), (5, 5));
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(1, 0)[3], 255);
        assert_eq!(out.get_pixel(2, 4)[3], 255);
        assert_eq!(out.get_pixel(3, 4)[3], 0);
    }

    #[test]
    fn square_input_is_unchanged() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([3, 2, 1, 0]));
        assert_eq!(pad_to_square(&img), img);
    }
}
