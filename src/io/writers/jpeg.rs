use image::RgbaImage;
use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};

/// Composite RGBA over an opaque white background.
pub fn flatten_over_white(img: &RgbaImage) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(img.width() as usize * img.height() as usize * 3);
    for px in img.as_raw().chunks_exact(4) {
        let alpha = px[3] as u32;
        for &c in &px[..3] {
            let blended = (c as u32 * alpha + 255 * (255 - alpha) + 127) / 255;
            rgb.push(blended as u8);
        }
    }
    rgb
}

/// Encode to an in-memory JPEG. There is no alpha channel, so transparent areas come out white.
pub fn encode_rgba_jpeg(img: &RgbaImage) -> Result<Vec<u8>> {
    let (cols, rows) = img.dimensions();
    if cols > u16::MAX as u32 || rows > u16::MAX as u32 {
        return Err(Error::DimensionOverflow {
            width: cols as u64,
            height: rows as u64,
        });
    }

    let rgb_data = flatten_over_white(img);
    let mut buf = Vec::new();
    let encoder = Encoder::new(&mut buf, 100);
    encoder.encode(&rgb_data, cols as u16, rows as u16, ColorType::Rgb)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn alpha_blends_towards_white() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        img.put_pixel(1, 0, Rgba([10, 20, 30, 0]));
        img.put_pixel(2, 0, Rgba([0, 0, 0, 128]));
        assert_eq!(
            flatten_over_white(&img),
            vec![10, 20, 30, 255, 255, 255, 127, 127, 127]
        );
    }

    #[test]
    fn encodes_a_decodable_jpeg() {
        let img = RgbaImage::from_pixel(16, 8, Rgba([0, 0, 0, 255]));
        let bytes = encode_rgba_jpeg(&img).unwrap();

        let back = image::load_from_memory_with_format(&bytes, image::ImageFormat::Jpeg).unwrap();
        assert_eq!((back.width(), back.height()), (16, 8));
    }

    #[test]
    fn oversized_side_is_rejected() {
        let img = RgbaImage::new(u16::MAX as u32 + 1, 1);
        assert!(matches!(
            encode_rgba_jpeg(&img),
            Err(Error::DimensionOverflow { .. })
        ));
    }
}
