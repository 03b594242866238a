use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::processing::pipeline::ProcessedImage;
use crate::error::Result;
use crate::types::{BoundingBox, ResizeFilter};

/// Description of one crop, written as JSON next to the output image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub bbox: BoundingBox,
    pub cropped_width: u32,
    pub cropped_height: u32,
    pub output_width: u32,
    pub output_height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Only set when a resample happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ResizeFilter>,
    pub padded: bool,
    pub created_at: DateTime<Utc>,
}

impl CropReport {
    pub fn new(input: &Path, output: &Path, processed: &ProcessedImage, filter: ResizeFilter) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            source_width: processed.source_width,
            source_height: processed.source_height,
            bbox: processed.bbox,
            cropped_width: processed.bbox.width(),
            cropped_height: processed.bbox.height(),
            output_width: processed.width(),
            output_height: processed.height(),
            scale: processed.scale,
            filter: processed.scale.map(|_| filter),
            padded: processed.padded,
            created_at: Utc::now(),
        }
    }
}

/// Sidecar location for `output`: `icon.png` becomes `icon.crop.json`.
pub fn sidecar_path(output: &Path) -> PathBuf {
    output.with_extension("crop.json")
}

pub fn write_crop_report(report: &CropReport) -> Result<PathBuf> {
    let path = sidecar_path(&report.output);
    let json_string = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json_string)?;

    info!("Created crop report sidecar: {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn sidecar_replaces_the_image_extension() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/icon.png")),
            PathBuf::from("/tmp/icon.crop.json")
        );
        assert_eq!(
            sidecar_path(Path::new("logo")),
            PathBuf::from("logo.crop.json")
        );
    }

    #[test]
    fn report_is_written_next_to_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");
        let processed = ProcessedImage {
            image: RgbaImage::new(10, 4),
            source_width: 20,
            source_height: 8,
            bbox: BoundingBox {
                left: 5,
                top: 2,
                right: 10,
                bottom: 4,
            },
            scale: Some(2.0),
            padded: false,
        };
        let report = CropReport::new(
            Path::new("in.png"),
            &output,
            &processed,
            ResizeFilter::Lanczos3,
        );
        assert_eq!((report.cropped_width, report.cropped_height), (5, 2));
        assert_eq!(report.filter, Some(ResizeFilter::Lanczos3));

        let path = write_crop_report(&report).unwrap();
        assert_eq!(path, dir.path().join("out.crop.json"));
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["bbox"]["left"], 5);
        assert_eq!(json["output_width"], 10);
        assert_eq!(json["filter"], "Lanczos3");
        assert!(json["created_at"].is_string());
    }
}
