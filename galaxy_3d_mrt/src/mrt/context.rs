/// MRT context - capability gate, attachment table and error policy.
///
/// Constructed uninitialized. The first operation probes the driver; from
/// then on the context is either ready (and owns its attachment table) or
/// permanently unsupported.

use crate::config::MrtConfig;
use crate::driver::{GraphicsDriver, ApiVersion};
use crate::error::Result;
use crate::host::ImageRegistry;
use crate::mrt::{
    AttachmentTable, ErrorPolicy, ReadinessState, UnsupportedReason,
    probe_capabilities, commit_attachments,
};
use crate::{engine_debug, engine_info, engine_warn};

const SOURCE: &str = "galaxy3d::mrt::Context";

enum ContextState {
    Uninitialized,
    Ready(AttachmentTable),
    Unsupported(UnsupportedReason),
}

/// Explicit MRT context
///
/// Single-threaded: drive it from the thread owning the graphics context.
pub struct MrtContext {
    state: ContextState,
    policy: ErrorPolicy,
    min_api_version: ApiVersion,
    min_render_targets: u32,
}

impl MrtContext {
    /// Create an uninitialized context with the default configuration
    pub fn new() -> Self {
        Self::with_config(&MrtConfig::default())
    }

    pub fn with_config(config: &MrtConfig) -> Self {
        Self {
            state: ContextState::Uninitialized,
            policy: ErrorPolicy::new(config.error_mode, config.max_diagnostic_len),
            min_api_version: config.min_api_version,
            min_render_targets: config.min_render_targets,
        }
    }

    pub fn readiness(&self) -> ReadinessState {
        match self.state {
            ContextState::Uninitialized => ReadinessState::Uninitialized,
            ContextState::Ready(_) => ReadinessState::Ready,
            ContextState::Unsupported(_) => ReadinessState::Unsupported,
        }
    }

    /// Why the probe failed, once unsupported
    pub fn unsupported_reason(&self) -> Option<&UnsupportedReason> {
        match &self.state {
            ContextState::Unsupported(reason) => Some(reason),
            _ => None,
        }
    }

    /// Attachment table, once ready
    pub fn table(&self) -> Option<&AttachmentTable> {
        match &self.state {
            ContextState::Ready(table) => Some(table),
            _ => None,
        }
    }

    /// Active attachment count (0 unless ready)
    pub fn active_count(&self) -> u32 {
        self.table().map_or(0, AttachmentTable::active_count)
    }

    pub fn policy(&self) -> &ErrorPolicy {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut ErrorPolicy {
        &mut self.policy
    }

    /// Probe the driver on first use
    ///
    /// Returns whether MRT is usable. Only the first call on an
    /// uninitialized context touches the driver.
    pub fn ensure_initialized(&mut self, driver: &mut dyn GraphicsDriver) -> bool {
        match self.state {
            ContextState::Ready(_) => return true,
            ContextState::Unsupported(_) => return false,
            ContextState::Uninitialized => {}
        }

        match probe_capabilities(driver, self.min_api_version, self.min_render_targets) {
            Ok(capabilities) => {
                self.state = ContextState::Ready(AttachmentTable::new(capabilities.max_render_targets));
                self.policy.reset();
                engine_info!(SOURCE, "MRT ready ({} render targets)", capabilities.max_render_targets);
                true
            }
            Err(reason) => {
                engine_warn!(SOURCE, "MRT unsupported: {}", reason);
                self.state = ContextState::Unsupported(reason);
                false
            }
        }
    }

    /// Probed maximum render target count, 0 when unsupported
    pub fn max_render_targets(&mut self, driver: &mut dyn GraphicsDriver) -> u32 {
        if !self.ensure_initialized(driver) {
            return 0;
        }
        self.table().map_or(0, AttachmentTable::capacity)
    }

    /// Bind `image` at `index`, or unbind when `image` is 0
    ///
    /// No-op on an unsupported context. Never calls into the driver beyond
    /// the first-use probe.
    pub fn set_slot(&mut self, driver: &mut dyn GraphicsDriver, index: u32, image: u32) -> Result<()> {
        let Some(table) = self.ready_table(driver) else { return Ok(()) };
        table.set(index, image)?;
        engine_debug!(SOURCE, "Slot {} -> image {} (active count {})",
            index, image, table.active_count());
        Ok(())
    }

    /// Unbind every slot
    pub fn clear_all(&mut self, driver: &mut dyn GraphicsDriver) {
        if let Some(table) = self.ready_table(driver) {
            table.clear();
        }
    }

    /// Bind the table to the driver and validate the framebuffer
    ///
    /// No-op on an unsupported context.
    pub fn commit(
        &mut self,
        driver: &mut dyn GraphicsDriver,
        images: &mut dyn ImageRegistry,
    ) -> Result<()> {
        let Some(table) = self.ready_table(driver) else { return Ok(()) };
        commit_attachments(table, driver, images)
    }

    fn ready_table(&mut self, driver: &mut dyn GraphicsDriver) -> Option<&mut AttachmentTable> {
        if !self.ensure_initialized(driver) {
            return None;
        }
        match &mut self.state {
            ContextState::Ready(table) => Some(table),
            _ => None,
        }
    }
}

impl Default for MrtContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
