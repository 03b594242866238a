//! High-level, ergonomic library API: process an image file to another file or to an
//! in-memory buffer, plus a batch helper for directories. Prefer using these
//! entrypoints over low-level processing modules when integrating alphacrop.
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{info, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::process_rgba;
pub use crate::core::processing::pipeline::ProcessedImage;
use crate::error::{Error, Result};
use crate::io::reader::open_rgba;
use crate::io::writers::save_rgba;
pub use crate::io::writers::sidecar::CropReport;
use crate::io::writers::sidecar::write_crop_report;

/// What happened to a single input
#[derive(Debug, Clone, PartialEq)]
pub enum CropOutcome {
    /// The output file was written
    Written(CropReport),
    /// No pixel above the alpha threshold; nothing was written
    NothingToCrop,
}

/// Decode `input` and process it without touching the disk again.
pub fn process_to_buffer(input: &Path, params: &ProcessingParams) -> Result<Option<ProcessedImage>> {
    let img = open_rgba(input)?;
    process_rgba(&img, params)
}

/// Read `input`, crop (and optionally rescale/pad) it, and encode the result to `output`.
pub fn process_to_path(input: &Path, output: &Path, params: &ProcessingParams) -> Result<CropOutcome> {
    let Some(processed) = process_to_buffer(input, params)? else {
        return Ok(CropOutcome::NothingToCrop);
    };

    save_rgba(&processed.image, output)?;

    let report = CropReport::new(input, output, &processed, params.filter);
    if params.sidecar {
        write_crop_report(&report)?;
    }
    Ok(CropOutcome::Written(report))
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Return the immediate entries of `input_dir`, sorted by path
pub fn list_directory(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        paths.push(entry?.path());
    }
    paths.sort();
    Ok(paths)
}

/// Process every image file directly inside `input_dir` into `output_dir`, keeping file names.
/// Non-image entries and fully transparent images are counted as skipped.
/// If `continue_on_error` is true, errors are logged in the report and processing continues; otherwise, the first error is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    std::fs::create_dir_all(output_dir)?;

    if input_dir.canonicalize()? == output_dir.canonicalize()? {
        return Err(Error::InvalidArgument {
            arg: "output_dir",
            value: output_dir.display().to_string(),
        });
    }

    let mut report = BatchReport::default();

    for path in list_directory(input_dir)? {
        let file_name = match path.file_name() {
            Some(name) if path.is_file() && ImageFormat::from_path(&path).is_ok() => name,
            _ => {
                info!("Skipping non-image entry: {:?}", path);
                report.skipped += 1;
                continue;
            }
        };
        let output_path = output_dir.join(file_name);

        info!("Processing: {:?} -> {:?}", path, output_path);
        match process_to_path(&path, &output_path, params) {
            Ok(CropOutcome::Written(_)) => report.processed += 1,
            Ok(CropOutcome::NothingToCrop) => {
                warn!("Nothing to crop in {:?}", path);
                report.skipped += 1;
            }
            Err(e) => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    info!(
        "Batch processing complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}
