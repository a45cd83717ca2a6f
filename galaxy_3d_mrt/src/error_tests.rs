//! Unit tests for error.rs
//!
//! Every variant's Display output is the diagnostic the host sees.

use crate::error::{Error, Result, AttachmentError, DrawBuffersError};
use crate::driver::IncompleteReason;

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

#[test]
fn test_invalid_error_mode_display() {
    let err = Error::InvalidErrorMode(7);
    assert_eq!(err.to_string(), "Invalid error mode 7.");
}

#[test]
fn test_invalid_error_mode_negative_display() {
    let err = Error::InvalidErrorMode(-1);
    assert_eq!(err.to_string(), "Invalid error mode -1.");
}

#[test]
fn test_invalid_attachment_point_display() {
    let err = Error::InvalidAttachmentPoint { index: 9, max_render_targets: 4 };
    assert_eq!(err.to_string(), "Invalid attachment point 9. Max render targets is 4.");
}

// ============================================================================
// RESOURCE / CONSISTENCY ERRORS
// ============================================================================

#[test]
fn test_unknown_render_image_display() {
    let err = Error::UnknownRenderImage(42);
    assert_eq!(err.to_string(), "Unknown render image 42.");
}

#[test]
fn test_no_render_targets_display() {
    let display = Error::NoRenderTargets.to_string();
    assert!(display.contains("without setting any render targets"));
    assert!(display.contains("At least one render target is required."));
    // Line continuation must not leave double spaces
    assert!(!display.contains("  "));
}

#[test]
fn test_mismatched_image_sizes_names_both_images() {
    let err = Error::MismatchedImageSizes {
        first_image: 1,
        first_width: 64,
        first_height: 64,
        image: 3,
        width: 32,
        height: 32,
    };
    assert_eq!(
        err.to_string(),
        "Trying to render to MRT with mismatched render image sizes. \
         Image 1 is of size 64x64, but image 3 is of size 32x32."
    );
}

// ============================================================================
// DRIVER ERRORS
// ============================================================================

#[test]
fn test_attachment_invalid_target_display() {
    let err = Error::Attachment(AttachmentError::InvalidTarget);
    assert_eq!(err.to_string(), "Failed to set framebuffer attachment. Invalid target.");
}

#[test]
fn test_attachment_invalid_image_display() {
    let err = Error::Attachment(AttachmentError::InvalidImage(5));
    assert_eq!(
        err.to_string(),
        "Failed to set framebuffer attachment. Invalid render image 5."
    );
}

#[test]
fn test_draw_buffers_displays() {
    assert_eq!(
        Error::DrawBuffers(DrawBuffersError::InvalidAttachmentSet).to_string(),
        "Failed to set draw buffers. Invalid attachment set."
    );
    assert_eq!(
        Error::DrawBuffers(DrawBuffersError::InvalidAttachPoint).to_string(),
        "Failed to set draw buffers. Invalid attach point detected."
    );
    assert_eq!(
        Error::DrawBuffers(DrawBuffersError::TooManyAttachPoints { max_render_targets: 8 })
            .to_string(),
        "Failed to set draw buffers. Invalid attach point detected. Max render targets is 8."
    );
}

// ============================================================================
// COMPLETENESS ERRORS
// ============================================================================

#[test]
fn test_incomplete_uses_reason_text() {
    let err = Error::Incomplete(IncompleteReason::IncompleteMultisample);
    assert_eq!(err.to_string(), "Inconsistent multisampling across render targets.");
}

// ============================================================================
// ENGINE ERRORS
// ============================================================================

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("Plugin not created".to_string());
    let display = err.to_string();
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("Plugin not created"));
}

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("Plugin lock poisoned".to_string());
    assert_eq!(err.to_string(), "Backend error: Plugin lock poisoned");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::NoRenderTargets;
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_clone_and_eq() {
    let err = Error::UnknownRenderImage(3);
    assert_eq!(err.clone(), err);
    assert_ne!(err, Error::UnknownRenderImage(4));
}

#[test]
fn test_result_question_mark_propagation() {
    fn inner() -> Result<()> {
        Err(Error::NoRenderTargets)
    }
    fn outer() -> Result<u32> {
        inner()?;
        Ok(1)
    }
    assert_eq!(outer(), Err(Error::NoRenderTargets));
}
