/*!
# Galaxy 3D MRT

Multiple render target (MRT) support for Galaxy3D hosts.

Tracks which render image is bound to each color attachment point, then
commits the whole set to the graphics context in one step, validating image
sizes, driver errors and framebuffer completeness, and rolling back on any
failure.

## Architecture

- **GraphicsDriver**: driver entry points (version, limits, attach, draw buffers, status)
- **ImageRegistry / DiagnosticSink**: collaborators owned by the host
- **MrtContext**: capability gate, attachment table, error policy, commit engine
- **MrtPlugin**: host-facing operations; failures go to the host's diagnostic sink
- **Engine**: global logger and optional process-wide plugin

Mock driver and host implementations are provided for headless testing.
*/

// Internal modules
mod error;
mod engine;
mod config;
mod plugin;
pub mod log;
pub mod driver;
pub mod host;
pub mod mrt;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result, AttachmentError, DrawBuffersError};

    // Engine singleton
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::{MrtConfig, MIN_API_VERSION, MIN_RENDER_TARGETS, MAX_DIAGNOSTIC_LEN};

    // Host-facing surface
    pub use crate::plugin::MrtPlugin;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, format_entry};
    }

    // Driver sub-module
    pub mod driver {
        pub use crate::driver::*;
    }

    // Host collaborators sub-module
    pub mod host {
        pub use crate::host::*;
    }

    // MRT core sub-module
    pub mod mrt {
        pub use crate::mrt::*;
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
