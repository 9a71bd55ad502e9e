use serde::{Deserialize, Serialize};

use crate::types::OutputFormat;

/// Default border width in pixels trimmed from each edge by the crop tool.
pub const DEFAULT_MARGIN: u32 = 20;

/// Crop parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropParams {
    /// Border width in pixels removed from each edge
    pub margin: u32,
    pub format: OutputFormat,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            format: OutputFormat::Png,
        }
    }
}

/// Conversion parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertParams {
    pub format: OutputFormat,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
        }
    }
}
