use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::{debug, info};

use crate::error::Result;

/// Decode any raster `image` understands and convert it to 8-bit RGBA.
///
/// The format is sniffed from the file contents, falling back to the extension.
pub fn open_rgba(path: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    debug!("Detected input format {:?} for {:?}", reader.format(), path);

    let decoded = reader.decode()?;
    info!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(decoded.into_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image::{GrayImage, Luma};

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_rgba(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(open_rgba(&path), Err(Error::Image(_))));
    }

    #[test]
    fn grayscale_input_becomes_opaque_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(3, 2, Luma([77])).save(&path).unwrap();

        let img = open_rgba(&path).unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(1, 1).0, [77, 77, 77, 255]);
    }
}
