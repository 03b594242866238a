//! Core processing building blocks: alpha bounding box detection, cropping,
//! resize/padding and the processing pipeline that chains them. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
