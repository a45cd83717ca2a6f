/// Tests for driver value types
///
/// Version comparison, attachment point and status encoding.

use super::*;

// ============================================================================
// Tests: ApiVersion
// ============================================================================

#[test]
fn test_version_equal_is_at_least() {
    assert!(ApiVersion::new(3, 2).is_at_least(ApiVersion::new(3, 2)));
}

#[test]
fn test_version_lower_minor_is_insufficient() {
    assert!(!ApiVersion::new(3, 1).is_at_least(ApiVersion::new(3, 2)));
}

#[test]
fn test_version_lower_major_is_insufficient_whatever_minor() {
    assert!(!ApiVersion::new(2, 9).is_at_least(ApiVersion::new(3, 2)));
}

#[test]
fn test_version_higher_major_ignores_minor() {
    assert!(ApiVersion::new(4, 0).is_at_least(ApiVersion::new(3, 2)));
}

#[test]
fn test_version_display() {
    assert_eq!(ApiVersion::new(4, 6).to_string(), "4.6");
}

// ============================================================================
// Tests: AttachmentPoint
// ============================================================================

#[test]
fn test_attachment_point_raw_values() {
    assert_eq!(AttachmentPoint::None.to_raw(), 0);
    assert_eq!(AttachmentPoint::Color(0).to_raw(), 0x8CE0);
    assert_eq!(AttachmentPoint::Color(3).to_raw(), 0x8CE3);
}

#[test]
fn test_attachment_point_from_raw() {
    assert_eq!(AttachmentPoint::from_raw(0), Some(AttachmentPoint::None));
    assert_eq!(AttachmentPoint::from_raw(0x8CE5), Some(AttachmentPoint::Color(5)));
    assert_eq!(AttachmentPoint::from_raw(0x8CFF), Some(AttachmentPoint::Color(31)));
}

#[test]
fn test_attachment_point_from_raw_rejects_other_enums() {
    assert_eq!(AttachmentPoint::from_raw(0x8D00), None); // DEPTH_ATTACHMENT
    assert_eq!(AttachmentPoint::from_raw(0x8CDF), None);
    assert_eq!(AttachmentPoint::from_raw(1), None);
}

#[test]
fn test_attachment_point_display() {
    assert_eq!(AttachmentPoint::None.to_string(), "NONE");
    assert_eq!(AttachmentPoint::Color(2).to_string(), "COLOR_ATTACHMENT2");
}

// ============================================================================
// Tests: DriverError
// ============================================================================

#[test]
fn test_driver_error_from_raw() {
    assert_eq!(DriverError::from_raw(0), DriverError::NoError);
    assert_eq!(DriverError::from_raw(0x0500), DriverError::InvalidEnum);
    assert_eq!(DriverError::from_raw(0x0501), DriverError::InvalidValue);
    assert_eq!(DriverError::from_raw(0x0502), DriverError::InvalidOperation);
    assert_eq!(DriverError::from_raw(0x0505), DriverError::OutOfMemory);
    assert_eq!(DriverError::from_raw(0x0506), DriverError::Other(0x0506));
}

// ============================================================================
// Tests: FramebufferStatus
// ============================================================================

#[test]
fn test_status_from_raw_complete() {
    assert_eq!(FramebufferStatus::from_raw(0x8CD5), Some(FramebufferStatus::Complete));
}

#[test]
fn test_status_from_raw_all_incomplete_reasons() {
    let cases = [
        (0x8219, IncompleteReason::Undefined),
        (0x8CD6, IncompleteReason::IncompleteAttachment),
        (0x8CD7, IncompleteReason::MissingAttachment),
        (0x8CDB, IncompleteReason::IncompleteDrawBuffer),
        (0x8CDC, IncompleteReason::IncompleteReadBuffer),
        (0x8CDD, IncompleteReason::Unsupported),
        (0x8D56, IncompleteReason::IncompleteMultisample),
        (0x8DA8, IncompleteReason::IncompleteLayerTargets),
    ];
    for (raw, reason) in cases {
        assert_eq!(
            FramebufferStatus::from_raw(raw),
            Some(FramebufferStatus::Incomplete(reason))
        );
    }
}

#[test]
fn test_status_from_raw_unknown() {
    assert_eq!(FramebufferStatus::from_raw(0), None);
    assert_eq!(FramebufferStatus::from_raw(0x1234), None);
}

#[test]
fn test_incomplete_reason_messages_are_distinct() {
    let reasons = [
        IncompleteReason::Undefined,
        IncompleteReason::IncompleteAttachment,
        IncompleteReason::MissingAttachment,
        IncompleteReason::IncompleteDrawBuffer,
        IncompleteReason::IncompleteReadBuffer,
        IncompleteReason::Unsupported,
        IncompleteReason::IncompleteMultisample,
        IncompleteReason::IncompleteLayerTargets,
    ];
    let mut messages: Vec<String> = reasons.iter().map(|r| r.to_string()).collect();
    messages.sort();
    messages.dedup();
    assert_eq!(messages.len(), reasons.len());
}

#[test]
fn test_required_entry_points() {
    assert_eq!(
        REQUIRED_ENTRY_POINTS,
        ["glFramebufferTexture", "glDrawBuffers", "glCheckFramebufferStatus"]
    );
}
