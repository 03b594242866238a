use serde::{Deserialize, Serialize};

use crate::types::ResizeFilter;

/// Default scale factor applied by `process_icon`.
pub const DEFAULT_ICON_SCALE: f64 = 5.0;

/// Processing parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingParams {
    /// Pixels with alpha strictly above this value count as content
    pub alpha_threshold: u8,
    /// Factor applied to both cropped dimensions; None means crop only
    pub scale: Option<f64>,
    pub filter: ResizeFilter,
    /// If true, center on a transparent square canvas after resizing
    pub pad: bool,
    /// If true, write a JSON crop report next to the output
    pub sidecar: bool,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            alpha_threshold: 0,
            scale: None,
            filter: ResizeFilter::Lanczos3,
            pad: false,
            sidecar: false,
        }
    }
}

impl ProcessingParams {
    /// Parameters matching `process_icon` with no optional flags.
    pub fn icon(scale: f64) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }
}
