/// Error policy - how many diagnostics reach the host sink.

use crate::error::Error;
use crate::host::{DiagnosticSink, bounded_message};

/// Host-selectable diagnostic mode
///
/// Raw values are part of the host contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum ErrorMode {
    /// Drop every diagnostic
    Ignore = 0,
    /// Emit only the first diagnostic since the context became ready
    #[default]
    ReportFirst = 1,
    /// Emit every diagnostic
    ReportAll = 2,
    /// Emit, then terminate the process
    StopOnError = 3,
}

impl ErrorMode {
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(ErrorMode::Ignore),
            1 => Some(ErrorMode::ReportFirst),
            2 => Some(ErrorMode::ReportAll),
            3 => Some(ErrorMode::StopOnError),
            _ => None,
        }
    }

    pub fn to_raw(self) -> i32 {
        self as i32
    }
}

/// What `ErrorPolicy::report` did with a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Not forwarded to the sink
    Suppressed,
    /// Forwarded to the sink
    Reported,
    /// Forwarded; the caller must terminate the process
    Terminate,
}

/// Error mode plus the sticky "first diagnostic already reported" flag
#[derive(Debug, Clone)]
pub struct ErrorPolicy {
    mode: ErrorMode,
    reported: bool,
    max_message_len: usize,
}

impl ErrorPolicy {
    pub fn new(mode: ErrorMode, max_message_len: usize) -> Self {
        Self { mode, reported: false, max_message_len }
    }

    pub fn mode(&self) -> ErrorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ErrorMode) {
        self.mode = mode;
    }

    /// Whether a diagnostic reached the sink since the last reset
    pub fn has_reported(&self) -> bool {
        self.reported
    }

    /// Clear the sticky flag (on every transition into Ready)
    pub fn reset(&mut self) {
        self.reported = false;
    }

    /// Route `error` to `sink` according to the current mode
    ///
    /// `Ignore` leaves the sticky flag untouched.
    pub fn report(&mut self, error: &Error, sink: &mut dyn DiagnosticSink) -> ReportOutcome {
        match self.mode {
            ErrorMode::Ignore => return ReportOutcome::Suppressed,
            ErrorMode::ReportFirst if self.reported => return ReportOutcome::Suppressed,
            _ => {}
        }
        self.reported = true;

        let message = bounded_message(&error.to_string(), self.max_message_len);
        sink.plugin_error(&message);

        if self.mode == ErrorMode::StopOnError {
            ReportOutcome::Terminate
        } else {
            ReportOutcome::Reported
        }
    }
}

#[cfg(test)]
#[path = "error_policy_tests.rs"]
mod tests;
