/// MRT plugin configuration

use crate::driver::ApiVersion;
use crate::mrt::ErrorMode;

/// Lowest context version offering layered framebuffer attachment
pub const MIN_API_VERSION: ApiVersion = ApiVersion::new(3, 2);

/// A single render target is not MRT
pub const MIN_RENDER_TARGETS: u32 = 2;

/// Host diagnostic buffers are 512 bytes including the terminator
pub const MAX_DIAGNOSTIC_LEN: usize = 511;

/// MRT plugin configuration
#[derive(Debug, Clone)]
pub struct MrtConfig {
    /// Error mode in effect before the host selects one
    pub error_mode: ErrorMode,
    /// Minimum context API version
    pub min_api_version: ApiVersion,
    /// Minimum effective render target count
    pub min_render_targets: u32,
    /// Maximum diagnostic length in bytes
    pub max_diagnostic_len: usize,
}

impl Default for MrtConfig {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::ReportFirst,
            min_api_version: MIN_API_VERSION,
            min_render_targets: MIN_RENDER_TARGETS,
            max_diagnostic_len: MAX_DIAGNOSTIC_LEN,
        }
    }
}
