//! Command Line Interface (CLI) layer shared by the `crop` and `process_icon` binaries.
//!
//! This module defines argument parsing (`args`), CLI validation errors (`errors`),
//! and the orchestration logic (`runner`) that prints one status line per run.
//! It wires user-provided options to the library functionality exposed via
//! `alphacrop::api`.
//!
//! If you are embedding alphacrop into another application, prefer using
//! the high-level `alphacrop::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::{CropArgs, ProcessIconArgs};
pub use runner::{run_crop, run_process_icon};
