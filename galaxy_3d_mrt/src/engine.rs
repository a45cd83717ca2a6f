/// Galaxy3D Engine - process-wide services of the MRT plugin
///
/// Holds the global logger and an optional process-wide `MrtPlugin` for
/// hosts that call in without carrying a plugin pointer. Both live in
/// thread-safe static storage.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::plugin::MrtPlugin;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

struct EngineState {
    /// Process-wide plugin
    plugin: RwLock<Option<Arc<Mutex<MrtPlugin>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            plugin: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// Engine singleton manager
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_mrt::galaxy3d::{Engine, MrtPlugin};
/// use galaxy_3d_mrt::galaxy3d::driver::mock_driver::MockDriver;
/// use galaxy_3d_mrt::galaxy3d::host::mock_host::{MockImageRegistry, MockDiagnosticSink};
///
/// Engine::initialize()?;
/// Engine::create_plugin(MrtPlugin::new(
///     MockDriver::new(), MockImageRegistry::new(), MockDiagnosticSink::new(),
/// ))?;
///
/// let plugin = Engine::plugin()?;
/// let supported = plugin.lock().unwrap().is_supported();
///
/// Engine::shutdown();
/// # Ok::<(), galaxy_3d_mrt::galaxy3d::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Log an engine error before returning it
    fn log_and_return_error(error: Error) -> Error {
        crate::engine_error!("galaxy3d::Engine", "{}", error);
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get().ok_or_else(|| Self::log_and_return_error(
            Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
        ))
    }

    /// Initialize the engine (idempotent)
    ///
    /// # Errors
    ///
    /// Currently always succeeds, but returns Result for future extensibility.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Drop the process-wide plugin
    ///
    /// Call `initialize()` again before registering a new one.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut plugin) = state.plugin.write() {
                *plugin = None;
            }
        }
    }

    /// Register the process-wide plugin
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A plugin already exists
    /// - The plugin lock is poisoned
    pub fn create_plugin(plugin: MrtPlugin) -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.plugin.write()
            .map_err(|_| crate::engine_err!("galaxy3d::Engine", "Plugin lock poisoned"))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("Plugin already exists. Call Engine::destroy_plugin() first.".to_string())
            ));
        }

        *lock = Some(Arc::new(Mutex::new(plugin)));

        crate::engine_info!("galaxy3d::Engine", "MRT plugin singleton created");

        Ok(())
    }

    /// Get the process-wide plugin
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or no plugin exists.
    pub fn plugin() -> Result<Arc<Mutex<MrtPlugin>>> {
        let state = Self::state()?;

        let lock = state.plugin.read()
            .map_err(|_| crate::engine_err!("galaxy3d::Engine", "Plugin lock poisoned"))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Plugin not created. Call Engine::create_plugin() first.".to_string())
            ))
    }

    /// Remove the process-wide plugin
    ///
    /// Outstanding `Arc`s stay valid until dropped.
    pub fn destroy_plugin() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.plugin.write()
            .map_err(|_| crate::engine_err!("galaxy3d::Engine", "Plugin lock poisoned"))?;

        *lock = None;

        crate::engine_info!("galaxy3d::Engine", "MRT plugin singleton destroyed");

        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut plugin) = state.plugin.write() {
                *plugin = None;
            }
        }
    }

    // ===== LOGGING API =====

    /// Replace the default logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Restore the default logger
    pub fn reset_logger() {
        Self::set_logger(DefaultLogger);
    }

    /// Log without source location (used by engine_trace!..engine_warn!)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }

    /// Log with file:line (used by engine_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }

    fn dispatch(entry: LogEntry) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&entry);
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
