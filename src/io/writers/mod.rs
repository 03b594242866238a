//! Output encoders. The format is chosen from the output path's extension.
pub mod jpeg;
pub mod sidecar;

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::Result;

/// Encode `img` to `output`, picking the codec from the file extension.
///
/// Codecs that cannot store RGBA report an error instead of silently dropping alpha;
/// JPEG is the exception and is flattened over white. The image is fully encoded before
/// `output` is touched, so a failed encode leaves any existing file alone.
pub fn save_rgba(img: &RgbaImage, output: &Path) -> Result<()> {
    let format = ImageFormat::from_path(output)?;

    let encoded = match format {
        ImageFormat::Jpeg => jpeg::encode_rgba_jpeg(img)?,
        other => {
            let mut buf = Vec::new();
            img.write_to(&mut Cursor::new(&mut buf), other)?;
            buf
        }
    };
    std::fs::write(output, &encoded)?;

    info!(
        "Saved {}x{} {:?} to {:?}",
        img.width(),
        img.height(),
        format,
        output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image::Rgba;

    #[test]
    fn png_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 40]));
        save_rgba(&img, &path).unwrap();

        let back = image::open(&path).unwrap().into_rgba8();
        assert_eq!(back, img);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.notanimage");
        let img = RgbaImage::new(1, 1);
        assert!(matches!(save_rgba(&img, &path), Err(Error::Image(_))));
        assert!(!path.exists());
    }

    #[test]
    fn failed_encode_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.exr");
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
        assert!(matches!(save_rgba(&img, &path), Err(Error::Image(_))));
        assert!(!path.exists());
    }

    #[test]
    fn failed_encode_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.exr");
        std::fs::write(&path, b"previous").unwrap();
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
        assert!(save_rgba(&img, &path).is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"previous");
    }
}
