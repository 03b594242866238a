//! `crop` entrypoint: crop an image to the bounding box of its non-transparent pixels.
//!
//! Thin wrapper over `alphacrop::cli`. For programmatic use, prefer the library API
//! (`alphacrop::api`).

use std::process::ExitCode;

use alphacrop::cli;
use clap::Parser;

fn main() -> ExitCode {
    let args = cli::CropArgs::parse();
    cli::run_crop(args)
}
