//! MRT core
//!
//! Capability gate, attachment table, error policy and the commit engine.
//! `MrtContext` ties them together; everything else in the crate is either
//! a collaborator trait or the host-facing surface.

mod capability;
mod attachment_table;
mod error_policy;
mod commit;
mod context;

pub use capability::{ReadinessState, Capabilities, UnsupportedReason, probe_capabilities};
pub use attachment_table::{AttachmentSlot, AttachmentTable};
pub use error_policy::{ErrorMode, ErrorPolicy, ReportOutcome};
pub use commit::{commit_attachments, rollback_attachments};
pub use context::MrtContext;
