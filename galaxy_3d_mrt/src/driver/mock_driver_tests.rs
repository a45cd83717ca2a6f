/// Unit tests for MockDriver
///
/// The MRT tests lean on the mock's bookkeeping, so it gets its own checks.

use super::*;
use crate::driver::IncompleteReason;

#[test]
fn test_mock_driver_defaults() {
    let driver = MockDriver::new();
    assert_eq!(driver.api_version(), ApiVersion::new(4, 6));
    assert_eq!(driver.max_color_attachments(), 8);
    assert_eq!(driver.max_draw_buffers(), 8);
}

#[test]
fn test_mock_driver_builders() {
    let driver = MockDriver::new()
        .with_version(3, 1)
        .with_limits(6, 4);
    assert_eq!(driver.api_version(), ApiVersion::new(3, 1));
    assert_eq!(driver.max_color_attachments(), 6);
    assert_eq!(driver.max_draw_buffers(), 4);
}

#[test]
fn test_mock_driver_missing_entry_point() {
    let mut driver = MockDriver::new().without_entry_point("glDrawBuffers");
    assert!(driver.resolve_entry_point("glFramebufferTexture"));
    assert!(!driver.resolve_entry_point("glDrawBuffers"));

    let state = driver.state();
    assert_eq!(state.lock().unwrap().calls.len(), 2);
}

#[test]
fn test_mock_driver_attach_and_detach() {
    let mut driver = MockDriver::new();
    driver.framebuffer_texture(AttachmentPoint::Color(1), 101);
    assert_eq!(driver.get_error(), DriverError::NoError);

    let state = driver.state();
    assert_eq!(state.lock().unwrap().attached(AttachmentPoint::Color(1)), Some(101));

    driver.framebuffer_texture(AttachmentPoint::Color(1), 0);
    let state = state.lock().unwrap();
    assert_eq!(state.attached(AttachmentPoint::Color(1)), None);
    assert_eq!(state.attach_calls(), vec![(AttachmentPoint::Color(1), 101)]);
    assert_eq!(state.detach_calls(), vec![AttachmentPoint::Color(1)]);
}

#[test]
fn test_mock_driver_attach_error_is_reported_once() {
    let mut driver = MockDriver::new()
        .with_attach_error(AttachmentPoint::Color(2), DriverError::InvalidValue);

    driver.framebuffer_texture(AttachmentPoint::Color(2), 102);
    assert_eq!(driver.get_error(), DriverError::InvalidValue);
    assert_eq!(driver.get_error(), DriverError::NoError);
    assert_eq!(driver.state().lock().unwrap().attached_count(), 0);
}

#[test]
fn test_mock_driver_detach_never_errors() {
    let mut driver = MockDriver::new()
        .with_attach_error(AttachmentPoint::Color(2), DriverError::InvalidValue);

    driver.framebuffer_texture(AttachmentPoint::Color(2), 0);
    assert_eq!(driver.get_error(), DriverError::NoError);
}

#[test]
fn test_mock_driver_draw_buffers() {
    let mut driver = MockDriver::new();
    let buffers = [AttachmentPoint::Color(0), AttachmentPoint::None, AttachmentPoint::Color(2)];
    driver.draw_buffers(&buffers);
    assert_eq!(driver.get_error(), DriverError::NoError);
    assert_eq!(driver.state().lock().unwrap().draw_buffers, buffers.to_vec());
}

#[test]
fn test_mock_driver_draw_buffers_error_keeps_previous_list() {
    let mut driver = MockDriver::new().with_draw_buffers_error(DriverError::InvalidEnum);
    driver.draw_buffers(&[AttachmentPoint::Color(0)]);
    assert_eq!(driver.get_error(), DriverError::InvalidEnum);
    assert!(driver.state().lock().unwrap().draw_buffers.is_empty());
}

#[test]
fn test_mock_driver_status_can_be_rescripted_through_handle() {
    let mut driver = MockDriver::new();
    assert_eq!(driver.check_framebuffer_status(), FramebufferStatus::Complete);

    let state = driver.state();
    state.lock().unwrap().status =
        FramebufferStatus::Incomplete(IncompleteReason::IncompleteReadBuffer);
    assert_eq!(
        driver.check_framebuffer_status(),
        FramebufferStatus::Incomplete(IncompleteReason::IncompleteReadBuffer)
    );
}

#[test]
fn test_mock_driver_mrt_call_count_skips_resolution() {
    let mut driver = MockDriver::new();
    driver.resolve_entry_point("glDrawBuffers");
    driver.check_framebuffer_status();

    let state = driver.state();
    let mut state = state.lock().unwrap();
    assert_eq!(state.mrt_call_count(), 1);
    state.clear_calls();
    assert!(state.calls.is_empty());
}
