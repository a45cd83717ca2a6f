/// Mock host collaborators for tests (no host application required)

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use rustc_hash::FxHashMap;
use crate::host::{ImageRegistry, DiagnosticSink, ImageInfo};

// ============================================================================
// Mock ImageRegistry
// ============================================================================

#[derive(Debug, Default)]
pub struct MockImageRegistryState {
    pub images: FxHashMap<u32, ImageInfo>,
    /// Recorded `set_render_to_image` calls (color image, depth image)
    pub render_to_image_calls: Vec<(u32, u32)>,
}

/// Image registry backed by a handle map
///
/// Texture names default to `handle + 100` so they never collide with handles
/// in assertions.
pub struct MockImageRegistry {
    state: Arc<Mutex<MockImageRegistryState>>,
}

impl MockImageRegistry {
    pub fn new() -> Self {
        Self { state: Arc::new(Mutex::new(MockImageRegistryState::default())) }
    }

    pub fn state(&self) -> Arc<Mutex<MockImageRegistryState>> {
        Arc::clone(&self.state)
    }

    /// Register an image of the given size
    pub fn with_image(self, handle: u32, width: u32, height: u32) -> Self {
        self.insert(handle, ImageInfo::new(handle + 100, width, height));
        self
    }

    pub fn insert(&self, handle: u32, info: ImageInfo) {
        self.lock().images.insert(handle, info);
    }

    fn lock(&self) -> MutexGuard<'_, MockImageRegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockImageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageRegistry for MockImageRegistry {
    fn image(&self, handle: u32) -> Option<ImageInfo> {
        self.lock().images.get(&handle).copied()
    }

    fn set_render_to_image(&mut self, color_image: u32, depth_image: u32) {
        self.lock().render_to_image_calls.push((color_image, depth_image));
    }
}

// ============================================================================
// Mock DiagnosticSink
// ============================================================================

/// Sink that collects every diagnostic it receives
pub struct MockDiagnosticSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockDiagnosticSink {
    pub fn new() -> Self {
        Self { messages: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Shared handle on the collected messages
    pub fn messages(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.messages)
    }
}

impl Default for MockDiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for MockDiagnosticSink {
    fn plugin_error(&mut self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
