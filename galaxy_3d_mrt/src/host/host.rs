/// Host collaborator traits
///
/// The host application owns its images and decides how diagnostics are
/// shown. The MRT core reaches both through these traits.

/// Host-side metadata of a render image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    /// Native texture name used for driver attachment
    pub texture_id: u32,
    /// Width the image was created with
    pub width: u32,
    /// Height the image was created with
    pub height: u32,
}

impl ImageInfo {
    pub fn new(texture_id: u32, width: u32, height: u32) -> Self {
        Self { texture_id, width, height }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Host image registry
///
/// Image handles are opaque, non-zero identifiers owned by the host.
pub trait ImageRegistry: Send {
    /// Look up an image by handle
    fn image(&self, handle: u32) -> Option<ImageInfo>;

    /// Make `color_image` the active render surface of the context
    ///
    /// `depth_image` of 0 means the host's default depth handling.
    fn set_render_to_image(&mut self, color_image: u32, depth_image: u32);
}

/// Host diagnostic sink
pub trait DiagnosticSink: Send {
    /// Hand a formatted diagnostic to the host
    fn plugin_error(&mut self, message: &str);
}

/// Copy `message` into a host-sized buffer of at most `max_len` bytes
///
/// Truncation never splits a UTF-8 character.
pub fn bounded_message(message: &str, max_len: usize) -> String {
    if message.len() <= max_len {
        return message.to_string();
    }
    let mut end = max_len;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    message[..end].to_string()
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
