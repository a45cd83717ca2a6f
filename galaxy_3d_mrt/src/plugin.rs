/// MRT plugin - the operation surface exposed to the host.
///
/// Each operation runs to completion and returns plain values; failures are
/// never returned to the host but routed through the error policy to the
/// host's diagnostic sink.

use crate::config::MrtConfig;
use crate::driver::GraphicsDriver;
use crate::error::{Error, Result};
use crate::host::{ImageRegistry, DiagnosticSink};
use crate::mrt::{ErrorMode, MrtContext, ReadinessState, ReportOutcome};
use crate::{engine_debug, engine_error};

const SOURCE: &str = "galaxy3d::mrt::Plugin";

/// MRT plugin bound to one graphics context and one host
///
/// # Example
///
/// ```
/// use galaxy_3d_mrt::galaxy3d::MrtPlugin;
/// use galaxy_3d_mrt::galaxy3d::driver::mock_driver::MockDriver;
/// use galaxy_3d_mrt::galaxy3d::host::mock_host::{MockImageRegistry, MockDiagnosticSink};
///
/// let images = MockImageRegistry::new()
///     .with_image(1, 64, 64)
///     .with_image(2, 64, 64);
/// let mut plugin = MrtPlugin::new(MockDriver::new(), images, MockDiagnosticSink::new());
///
/// assert_eq!(plugin.is_supported(), 1);
/// plugin.set_render_image(0, 1);
/// plugin.set_render_image(1, 2);
/// plugin.commit_render_targets();
/// ```
pub struct MrtPlugin {
    context: MrtContext,
    driver: Box<dyn GraphicsDriver>,
    images: Box<dyn ImageRegistry>,
    sink: Box<dyn DiagnosticSink>,
}

impl MrtPlugin {
    /// Create a plugin with the default configuration
    pub fn new<D, R, S>(driver: D, images: R, sink: S) -> Self
    where
        D: GraphicsDriver + 'static,
        R: ImageRegistry + 'static,
        S: DiagnosticSink + 'static,
    {
        Self::with_config(MrtConfig::default(), driver, images, sink)
    }

    pub fn with_config<D, R, S>(config: MrtConfig, driver: D, images: R, sink: S) -> Self
    where
        D: GraphicsDriver + 'static,
        R: ImageRegistry + 'static,
        S: DiagnosticSink + 'static,
    {
        Self {
            context: MrtContext::with_config(&config),
            driver: Box::new(driver),
            images: Box::new(images),
            sink: Box::new(sink),
        }
    }

    /// Underlying context (readiness, table, policy)
    pub fn context(&self) -> &MrtContext {
        &self.context
    }

    /// Select the error mode from its raw host value
    ///
    /// Unknown values keep the current mode and report an error.
    pub fn set_error_mode(&mut self, mode: i32) {
        match ErrorMode::from_raw(mode) {
            Some(mode) => self.context.policy_mut().set_mode(mode),
            None => self.report(Error::InvalidErrorMode(mode)),
        }
    }

    /// 1 if MRT is usable on this context, 0 otherwise
    pub fn is_supported(&mut self) -> i32 {
        self.context.ensure_initialized(self.driver.as_mut());
        match self.context.readiness() {
            ReadinessState::Unsupported => 0,
            _ => 1,
        }
    }

    /// Probed maximum render target count, 0 when unsupported
    pub fn get_max_render_images(&mut self) -> u32 {
        self.context.max_render_targets(self.driver.as_mut())
    }

    /// Bind `render_image` at `attach_point` (0 unbinds)
    pub fn set_render_image(&mut self, attach_point: u32, render_image: u32) {
        let result = self.context.set_slot(self.driver.as_mut(), attach_point, render_image);
        self.check(result);
    }

    /// Unbind every render image
    pub fn clear_render_images(&mut self) {
        self.context.clear_all(self.driver.as_mut());
    }

    /// Make the bound render images the active render targets
    pub fn commit_render_targets(&mut self) {
        let result = self.context.commit(self.driver.as_mut(), self.images.as_mut());
        self.check(result);
    }

    fn check(&mut self, result: Result<()>) {
        if let Err(error) = result {
            self.report(error);
        }
    }

    fn report(&mut self, error: Error) {
        match self.context.policy_mut().report(&error, self.sink.as_mut()) {
            ReportOutcome::Suppressed => {
                engine_debug!(SOURCE, "Suppressed: {}", error);
            }
            ReportOutcome::Reported => {
                engine_error!(SOURCE, "{}", error);
            }
            ReportOutcome::Terminate => {
                engine_error!(SOURCE, "{} (stopping)", error);
                std::process::exit(-1);
            }
        }
    }
}

#[cfg(test)]
#[path = "plugin_tests.rs"]
mod tests;
