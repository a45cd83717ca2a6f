//! Error types for the Galaxy3D MRT plugin
//!
//! Every variant's `Display` output is the diagnostic text handed to the
//! host sink, so messages are complete sentences.

use std::fmt;
use crate::driver::IncompleteReason;

/// Result type for MRT operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while attaching an image to an attachment point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentError {
    /// The driver rejected the attachment point or framebuffer target
    InvalidTarget,
    /// The driver rejected the texture of this render image
    InvalidImage(u32),
}

/// Failure while configuring the draw-buffer list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawBuffersError {
    /// The list contains a value that is not an attachment point
    InvalidAttachmentSet,
    /// An attachment point is not valid for the bound framebuffer
    InvalidAttachPoint,
    /// More attachment points than the hardware supports
    TooManyAttachPoints { max_render_targets: u32 },
}

/// Galaxy3D MRT errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ----- configuration -----
    /// Raw error mode outside the known modes
    InvalidErrorMode(i32),

    /// Attachment index at or above the probed maximum
    InvalidAttachmentPoint { index: u32, max_render_targets: u32 },

    // ----- resource -----
    /// Image handle unknown to the host registry
    UnknownRenderImage(u32),

    // ----- consistency -----
    /// Commit with no bound slot
    NoRenderTargets,

    /// A bound image differs in size from the first bound image
    MismatchedImageSizes {
        first_image: u32,
        first_width: u32,
        first_height: u32,
        image: u32,
        width: u32,
        height: u32,
    },

    // ----- driver -----
    Attachment(AttachmentError),
    DrawBuffers(DrawBuffersError),

    // ----- completeness -----
    Incomplete(IncompleteReason),

    // ----- engine lifecycle -----
    /// Engine or plugin singleton misuse
    InitializationFailed(String),

    /// Internal failure (poisoned lock, etc.)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidErrorMode(mode) => write!(f, "Invalid error mode {}.", mode),
            Error::InvalidAttachmentPoint { index, max_render_targets } => write!(
                f,
                "Invalid attachment point {}. Max render targets is {}.",
                index, max_render_targets
            ),
            Error::UnknownRenderImage(image) => write!(f, "Unknown render image {}.", image),
            Error::NoRenderTargets => write!(
                f,
                "Trying to render to MRT without setting any render targets. \
                 At least one render target is required."
            ),
            Error::MismatchedImageSizes {
                first_image, first_width, first_height, image, width, height,
            } => write!(
                f,
                "Trying to render to MRT with mismatched render image sizes. \
                 Image {} is of size {}x{}, but image {} is of size {}x{}.",
                first_image, first_width, first_height, image, width, height
            ),
            Error::Attachment(AttachmentError::InvalidTarget) => {
                write!(f, "Failed to set framebuffer attachment. Invalid target.")
            }
            Error::Attachment(AttachmentError::InvalidImage(image)) => write!(
                f,
                "Failed to set framebuffer attachment. Invalid render image {}.",
                image
            ),
            Error::DrawBuffers(DrawBuffersError::InvalidAttachmentSet) => {
                write!(f, "Failed to set draw buffers. Invalid attachment set.")
            }
            Error::DrawBuffers(DrawBuffersError::InvalidAttachPoint) => {
                write!(f, "Failed to set draw buffers. Invalid attach point detected.")
            }
            Error::DrawBuffers(DrawBuffersError::TooManyAttachPoints { max_render_targets }) => {
                write!(
                    f,
                    "Failed to set draw buffers. Invalid attach point detected. \
                     Max render targets is {}.",
                    max_render_targets
                )
            }
            Error::Incomplete(reason) => write!(f, "{}", reason),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
