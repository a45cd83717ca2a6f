/// Capability probe - decides once whether the context can do MRT.

use std::fmt;
use crate::driver::{GraphicsDriver, ApiVersion, REQUIRED_ENTRY_POINTS};

/// Lifecycle state of an MRT context
///
/// Leaves `Uninitialized` exactly once; `Ready` and `Unsupported` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessState {
    Uninitialized,
    Ready,
    Unsupported,
}

/// Result of a successful probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// min(max color attachments, max draw buffers)
    pub max_render_targets: u32,
}

/// Why a probe declared the context unsupported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedReason {
    ApiVersionTooLow { found: ApiVersion, required: ApiVersion },
    MissingEntryPoint(String),
    TooFewRenderTargets { found: u32, required: u32 },
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedReason::ApiVersionTooLow { found, required } => {
                write!(f, "API version {} is below the required {}", found, required)
            }
            UnsupportedReason::MissingEntryPoint(name) => {
                write!(f, "driver does not expose {}", name)
            }
            UnsupportedReason::TooFewRenderTargets { found, required } => write!(
                f,
                "hardware supports {} simultaneous render targets, {} required",
                found, required
            ),
        }
    }
}

/// Probe the driver for MRT support
///
/// Checks, in order: API version, the required entry points (stopping at the
/// first missing one), then the effective render target count. Negative
/// limits reported by the driver count as zero.
pub fn probe_capabilities(
    driver: &mut dyn GraphicsDriver,
    min_api_version: ApiVersion,
    min_render_targets: u32,
) -> Result<Capabilities, UnsupportedReason> {
    let version = driver.api_version();
    if !version.is_at_least(min_api_version) {
        return Err(UnsupportedReason::ApiVersionTooLow {
            found: version,
            required: min_api_version,
        });
    }

    for name in REQUIRED_ENTRY_POINTS {
        if !driver.resolve_entry_point(name) {
            return Err(UnsupportedReason::MissingEntryPoint(name.to_string()));
        }
    }

    let color_attachments = u32::try_from(driver.max_color_attachments()).unwrap_or(0);
    let draw_buffers = u32::try_from(driver.max_draw_buffers()).unwrap_or(0);
    let max_render_targets = color_attachments.min(draw_buffers);
    if max_render_targets < min_render_targets {
        return Err(UnsupportedReason::TooFewRenderTargets {
            found: max_render_targets,
            required: min_render_targets,
        });
    }

    Ok(Capabilities { max_render_targets })
}

#[cfg(test)]
#[path = "capability_tests.rs"]
mod tests;
