//! I/O layer: decode rasters into RGBA (`reader`) and encode results (`writers`),
//! including the JPEG writer and the JSON crop report sidecar.
pub mod reader;
pub use reader::open_rgba;

pub mod writers;
pub use writers::save_rgba;
