/// Mock graphics driver (no GPU required)
///
/// Scriptable stand-in for a real driver: version, limits, missing entry
/// points, per-attachment errors, draw-buffer errors and the completeness
/// status can all be set, and every MRT call is recorded. State lives behind
/// a shared handle so tests can keep inspecting (and re-scripting) the driver
/// after handing it over to a plugin.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use rustc_hash::FxHashMap;
use crate::driver::{
    GraphicsDriver, ApiVersion, AttachmentPoint, DriverError, FramebufferStatus,
};

/// One recorded driver call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    ResolveEntryPoint(String),
    FramebufferTexture { attachment: AttachmentPoint, texture: u32 },
    DrawBuffers(Vec<AttachmentPoint>),
    CheckFramebufferStatus,
}

/// Script and recorded effects of a `MockDriver`
#[derive(Debug)]
pub struct MockDriverState {
    pub version: ApiVersion,
    pub max_color_attachments: i32,
    pub max_draw_buffers: i32,
    pub missing_entry_points: Vec<String>,
    /// Error raised when attaching a texture at the given point
    pub attach_errors: FxHashMap<AttachmentPoint, DriverError>,
    /// Error raised by every `draw_buffers` call (`NoError` = succeed)
    pub draw_buffers_error: DriverError,
    /// Value returned by `check_framebuffer_status`
    pub status: FramebufferStatus,

    /// Every MRT call in issue order
    pub calls: Vec<DriverCall>,
    /// Attachment point -> texture currently attached on the driver side
    pub attachments: FxHashMap<AttachmentPoint, u32>,
    /// Last accepted draw-buffer list
    pub draw_buffers: Vec<AttachmentPoint>,
    pending_error: DriverError,
}

impl MockDriverState {
    /// Texture currently attached at `attachment`
    pub fn attached(&self, attachment: AttachmentPoint) -> Option<u32> {
        self.attachments.get(&attachment).copied()
    }

    /// Number of attachment points with a texture attached
    pub fn attached_count(&self) -> usize {
        self.attachments.len()
    }

    /// Calls that attach a texture (texture != 0)
    pub fn attach_calls(&self) -> Vec<(AttachmentPoint, u32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DriverCall::FramebufferTexture { attachment, texture } if *texture != 0 => {
                    Some((*attachment, *texture))
                }
                _ => None,
            })
            .collect()
    }

    /// Calls that detach (texture == 0)
    pub fn detach_calls(&self) -> Vec<AttachmentPoint> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DriverCall::FramebufferTexture { attachment, texture: 0 } => Some(*attachment),
                _ => None,
            })
            .collect()
    }

    /// Calls issued after entry point resolution
    pub fn mrt_call_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| !matches!(call, DriverCall::ResolveEntryPoint(_)))
            .count()
    }

    /// Forget recorded calls, keep script and attachments
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

/// Mock graphics driver
///
/// Defaults to a 4.6 context with 8 color attachments and 8 draw buffers,
/// every entry point present and every call succeeding.
pub struct MockDriver {
    state: Arc<Mutex<MockDriverState>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockDriverState {
                version: ApiVersion::new(4, 6),
                max_color_attachments: 8,
                max_draw_buffers: 8,
                missing_entry_points: Vec::new(),
                attach_errors: FxHashMap::default(),
                draw_buffers_error: DriverError::NoError,
                status: FramebufferStatus::Complete,
                calls: Vec::new(),
                attachments: FxHashMap::default(),
                draw_buffers: Vec::new(),
                pending_error: DriverError::NoError,
            })),
        }
    }

    /// Shared handle on the script and recorded effects
    pub fn state(&self) -> Arc<Mutex<MockDriverState>> {
        Arc::clone(&self.state)
    }

    pub fn with_version(self, major: i32, minor: i32) -> Self {
        self.lock().version = ApiVersion::new(major, minor);
        self
    }

    pub fn with_limits(self, max_color_attachments: i32, max_draw_buffers: i32) -> Self {
        {
            let mut state = self.lock();
            state.max_color_attachments = max_color_attachments;
            state.max_draw_buffers = max_draw_buffers;
        }
        self
    }

    pub fn without_entry_point(self, name: &str) -> Self {
        self.lock().missing_entry_points.push(name.to_string());
        self
    }

    pub fn with_attach_error(self, attachment: AttachmentPoint, error: DriverError) -> Self {
        self.lock().attach_errors.insert(attachment, error);
        self
    }

    pub fn with_draw_buffers_error(self, error: DriverError) -> Self {
        self.lock().draw_buffers_error = error;
        self
    }

    pub fn with_status(self, status: FramebufferStatus) -> Self {
        self.lock().status = status;
        self
    }

    fn lock(&self) -> MutexGuard<'_, MockDriverState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsDriver for MockDriver {
    fn api_version(&self) -> ApiVersion {
        self.lock().version
    }

    fn max_color_attachments(&self) -> i32 {
        self.lock().max_color_attachments
    }

    fn max_draw_buffers(&self) -> i32 {
        self.lock().max_draw_buffers
    }

    fn resolve_entry_point(&mut self, name: &str) -> bool {
        let mut state = self.lock();
        state.calls.push(DriverCall::ResolveEntryPoint(name.to_string()));
        !state.missing_entry_points.iter().any(|missing| missing == name)
    }

    fn framebuffer_texture(&mut self, attachment: AttachmentPoint, texture: u32) {
        let mut state = self.lock();
        state.calls.push(DriverCall::FramebufferTexture { attachment, texture });

        if texture == 0 {
            state.attachments.remove(&attachment);
            return;
        }
        match state.attach_errors.get(&attachment).copied() {
            Some(error) if error != DriverError::NoError => state.pending_error = error,
            _ => {
                state.attachments.insert(attachment, texture);
            }
        }
    }

    fn draw_buffers(&mut self, buffers: &[AttachmentPoint]) {
        let mut state = self.lock();
        state.calls.push(DriverCall::DrawBuffers(buffers.to_vec()));

        if state.draw_buffers_error != DriverError::NoError {
            state.pending_error = state.draw_buffers_error;
        } else {
            state.draw_buffers = buffers.to_vec();
        }
    }

    fn check_framebuffer_status(&mut self) -> FramebufferStatus {
        let mut state = self.lock();
        state.calls.push(DriverCall::CheckFramebufferStatus);
        state.status
    }

    fn get_error(&mut self) -> DriverError {
        std::mem::replace(&mut self.lock().pending_error, DriverError::NoError)
    }
}

#[cfg(test)]
#[path = "mock_driver_tests.rs"]
mod tests;
