/// GraphicsDriver trait and driver-side value types
///
/// The MRT core never talks to a graphics API directly. Everything it needs
/// (version and capability queries, entry point resolution, the three MRT
/// calls and the last-error query) goes through `GraphicsDriver`, so a real
/// GL loader and the test fake are interchangeable.

use std::fmt;

// ===== RAW ENUM VALUES =====

/// `GL_NONE`
pub const GL_NONE: u32 = 0;
/// `GL_COLOR_ATTACHMENT0`
pub const GL_COLOR_ATTACHMENT0: u32 = 0x8CE0;
/// Number of color attachment enums defined by the API (`COLOR_ATTACHMENT0..=31`)
pub const GL_COLOR_ATTACHMENT_COUNT: u32 = 32;

/// Entry point attaching a texture to the bound framebuffer
pub const ENTRY_FRAMEBUFFER_TEXTURE: &str = "glFramebufferTexture";
/// Entry point configuring the ordered draw-buffer list
pub const ENTRY_DRAW_BUFFERS: &str = "glDrawBuffers";
/// Entry point querying framebuffer completeness
pub const ENTRY_CHECK_FRAMEBUFFER_STATUS: &str = "glCheckFramebufferStatus";

/// Every entry point the MRT core requires, in resolution order
pub const REQUIRED_ENTRY_POINTS: [&str; 3] = [
    ENTRY_FRAMEBUFFER_TEXTURE,
    ENTRY_DRAW_BUFFERS,
    ENTRY_CHECK_FRAMEBUFFER_STATUS,
];

// ===== API VERSION =====

/// Context API version as reported by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiVersion {
    pub major: i32,
    pub minor: i32,
}

impl ApiVersion {
    pub const fn new(major: i32, minor: i32) -> Self {
        Self { major, minor }
    }

    /// Whether this version is at least `required`
    ///
    /// A lower major version is always insufficient; an equal major
    /// version needs an equal or higher minor version.
    pub fn is_at_least(&self, required: ApiVersion) -> bool {
        self.major > required.major
            || (self.major == required.major && self.minor >= required.minor)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

// ===== ATTACHMENT POINT =====

/// Framebuffer attachment point tag
///
/// `Color(n)` always carries the index of the slot it belongs to; the MRT
/// table never stores a color tag at a different index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentPoint {
    /// Writes nowhere (`GL_NONE`)
    None,
    /// `GL_COLOR_ATTACHMENT0 + n`
    Color(u32),
}

impl AttachmentPoint {
    /// Raw API enum value
    pub fn to_raw(self) -> u32 {
        match self {
            AttachmentPoint::None => GL_NONE,
            AttachmentPoint::Color(index) => GL_COLOR_ATTACHMENT0 + index,
        }
    }

    /// Decode a raw API enum value
    ///
    /// Returns `None` for values that are neither `GL_NONE` nor a color attachment.
    pub fn from_raw(raw: u32) -> Option<Self> {
        if raw == GL_NONE {
            return Some(AttachmentPoint::None);
        }
        let index = raw.checked_sub(GL_COLOR_ATTACHMENT0)?;
        (index < GL_COLOR_ATTACHMENT_COUNT).then_some(AttachmentPoint::Color(index))
    }

    pub fn is_none(self) -> bool {
        self == AttachmentPoint::None
    }
}

impl fmt::Display for AttachmentPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentPoint::None => write!(f, "NONE"),
            AttachmentPoint::Color(index) => write!(f, "COLOR_ATTACHMENT{}", index),
        }
    }
}

// ===== DRIVER ERROR =====

/// Result of the driver's last-error query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    NoError,
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    OutOfMemory,
    /// Any code the MRT core does not classify
    Other(u32),
}

impl DriverError {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => DriverError::NoError,
            0x0500 => DriverError::InvalidEnum,
            0x0501 => DriverError::InvalidValue,
            0x0502 => DriverError::InvalidOperation,
            0x0505 => DriverError::OutOfMemory,
            other => DriverError::Other(other),
        }
    }
}

// ===== FRAMEBUFFER STATUS =====

/// Reason a framebuffer is incomplete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteReason {
    /// The default framebuffer is targeted but does not exist
    Undefined,
    /// An attachment is not attachment-complete
    IncompleteAttachment,
    /// No image is attached at all
    MissingAttachment,
    /// A draw buffer names an attachment point without an image
    IncompleteDrawBuffer,
    /// The read buffer names an attachment point without an image
    IncompleteReadBuffer,
    /// The combination of internal formats is not supported
    Unsupported,
    /// Sample counts differ across attachments
    IncompleteMultisample,
    /// Layered and non-layered attachments are mixed
    IncompleteLayerTargets,
}

impl fmt::Display for IncompleteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            IncompleteReason::Undefined =>
                "Trying to use the default framebuffer but it does not exist.",
            IncompleteReason::IncompleteAttachment =>
                "Framebuffer attachment is incomplete.",
            IncompleteReason::MissingAttachment =>
                "Framebuffer missing render target. At least one render target is required.",
            IncompleteReason::IncompleteDrawBuffer => "Draw buffer incomplete.",
            IncompleteReason::IncompleteReadBuffer => "Read buffer incomplete.",
            IncompleteReason::Unsupported => "Incompatible render targets detected.",
            IncompleteReason::IncompleteMultisample =>
                "Inconsistent multisampling across render targets.",
            IncompleteReason::IncompleteLayerTargets =>
                "Inconsistent layers across render targets.",
        };
        f.write_str(message)
    }
}

/// Framebuffer completeness as reported by the status check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferStatus {
    Complete,
    Incomplete(IncompleteReason),
}

impl FramebufferStatus {
    /// Decode a raw status value
    ///
    /// Returns `None` for values outside the nine defined statuses.
    pub fn from_raw(raw: u32) -> Option<Self> {
        let reason = match raw {
            0x8CD5 => return Some(FramebufferStatus::Complete),
            0x8219 => IncompleteReason::Undefined,
            0x8CD6 => IncompleteReason::IncompleteAttachment,
            0x8CD7 => IncompleteReason::MissingAttachment,
            0x8CDB => IncompleteReason::IncompleteDrawBuffer,
            0x8CDC => IncompleteReason::IncompleteReadBuffer,
            0x8CDD => IncompleteReason::Unsupported,
            0x8D56 => IncompleteReason::IncompleteMultisample,
            0x8DA8 => IncompleteReason::IncompleteLayerTargets,
            _ => return None,
        };
        Some(FramebufferStatus::Incomplete(reason))
    }
}

// ============================================================================
// GraphicsDriver trait
// ============================================================================

/// Driver entry points used by the MRT core
///
/// Implementations wrap the current graphics context. All calls happen on
/// the thread owning that context; `Send` only allows the owning plugin to be
/// parked in the engine singleton.
pub trait GraphicsDriver: Send {
    /// Context API version
    fn api_version(&self) -> ApiVersion;

    /// Maximum number of color attachments per framebuffer
    fn max_color_attachments(&self) -> i32;

    /// Maximum number of simultaneous draw buffers
    fn max_draw_buffers(&self) -> i32;

    /// Resolve an entry point by name
    ///
    /// Returns `false` when the driver does not expose it.
    fn resolve_entry_point(&mut self, name: &str) -> bool;

    /// Attach `texture` at `attachment` on the bound framebuffer
    ///
    /// A `texture` of 0 detaches whatever is bound there.
    fn framebuffer_texture(&mut self, attachment: AttachmentPoint, texture: u32);

    /// Set the ordered draw-buffer list
    fn draw_buffers(&mut self, buffers: &[AttachmentPoint]);

    /// Check completeness of the bound framebuffer
    fn check_framebuffer_status(&mut self) -> FramebufferStatus;

    /// Fetch and clear the last error raised by a driver call
    fn get_error(&mut self) -> DriverError;
}

#[cfg(test)]
#[path = "graphics_driver_tests.rs"]
mod tests;
