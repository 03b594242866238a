use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::api::{CropOutcome, process_to_path};
use crate::core::params::ProcessingParams;

use super::args::{CommonArgs, CropArgs, ProcessIconArgs};

pub const NOTHING_TO_CROP: &str = "Image is empty or transparent, nothing to crop.";

/// Install a stderr subscriber when `--log` is set; stdout stays reserved for status lines.
pub fn init_logging(enabled: bool) {
    if !enabled {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run one job and turn its outcome into a status line plus exit code.
fn run_single(
    input: &Path,
    output: &Path,
    params: &ProcessingParams,
    common: &CommonArgs,
    success_line: impl FnOnce() -> String,
    error_prefix: &str,
) -> ExitCode {
    info!("Processing: {:?} -> {:?} ({:?})", input, output, params);

    match process_to_path(input, output, params) {
        Ok(CropOutcome::Written(report)) => {
            info!(
                "Bounding box {} of {}x{}, wrote {}x{}",
                report.bbox,
                report.source_width,
                report.source_height,
                report.output_width,
                report.output_height
            );
            println!("{}", success_line());
            ExitCode::SUCCESS
        }
        Ok(CropOutcome::NothingToCrop) => {
            println!("{NOTHING_TO_CROP}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:?} failed: {}", input, e);
            println!("{error_prefix}: {e}");
            if common.fail_on_error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

pub fn run_crop(args: CropArgs) -> ExitCode {
    init_logging(args.common.log);

    let params = args.params();
    run_single(
        &args.input,
        &args.output,
        &params,
        &args.common,
        || {
            format!(
                "Successfully cropped {} to {}",
                args.input.display(),
                args.output.display()
            )
        },
        "Error cropping image",
    )
}

pub fn run_process_icon(args: ProcessIconArgs) -> ExitCode {
    init_logging(args.common.log);

    let params = args.params();
    run_single(
        &args.input,
        &args.output,
        &params,
        &args.common,
        || {
            format!(
                "Successfully cropped and resized {} to {} (Scale: {:?}x)",
                args.input.display(),
                args.output.display(),
                args.scale
            )
        },
        "Error processing image",
    )
}
