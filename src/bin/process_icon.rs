//! `process_icon` entrypoint: crop to the non-transparent content, then rescale
//! (default 5x) with Lanczos resampling.

use std::process::ExitCode;

use alphacrop::cli;
use clap::Parser;

fn main() -> ExitCode {
    let args = cli::ProcessIconArgs::parse();
    cli::run_process_icon(args)
}
