use image::RgbaImage;
use image::imageops;
use tracing::info;

use crate::types::BoundingBox;

/// Copy the region described by `bbox` into a new image.
pub fn crop_to_box(img: &RgbaImage, bbox: BoundingBox) -> RgbaImage {
    let (width, height) = img.dimensions();
    if bbox.covers(width, height) {
        info!("Bounding box covers the full {}x{} canvas", width, height);
        return img.clone();
    }

    info!(
        "Cropping {}x{} to {} ({}x{})",
        width,
        height,
        bbox,
        bbox.width(),
        bbox.height()
    );
    imageops::crop_imm(img, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn crop_preserves_pixels_inside_the_box() {
        let img = RgbaImage::from_fn(8, 8, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let bbox = BoundingBox {
            left: 2,
            top: 3,
            right: 6,
            bottom: 5,
        };
        let out = crop_to_box(&img, bbox);
        assert_eq!(out.dimensions(), (4, 2));
        assert_eq!(out.get_pixel(0, 0), &Rgba([2, 3, 0, 255]));
        assert_eq!(out.get_pixel(3, 1), &Rgba([5, 4, 0, 255]));
    }

    #[test]
    fn full_box_returns_identical_image() {
        let img = RgbaImage::from_pixel(3, 5, Rgba([1, 2, 3, 4]));
        let bbox = BoundingBox {
            left: 0,
            top: 0,
            right: 3,
            bottom: 5,
        };
        assert_eq!(crop_to_box(&img, bbox), img);
    }
}
