/// Commit engine - binds the attachment table to the driver and validates it.
///
/// Order per commit:
/// 1. attach every bound slot (the first bound slot selects the render surface)
/// 2. configure the draw-buffer list
/// 3. check framebuffer completeness
///
/// Any failure after the first driver call rolls back every active
/// attachment point, so the context never keeps a partial configuration.

use crate::driver::{GraphicsDriver, AttachmentPoint, DriverError, FramebufferStatus};
use crate::error::{Error, Result, AttachmentError, DrawBuffersError};
use crate::host::ImageRegistry;
use crate::mrt::AttachmentTable;
use crate::{engine_trace, engine_warn};

const SOURCE: &str = "galaxy3d::mrt::Commit";

/// Reference surface: first bound image and its size
struct Reference {
    image: u32,
    width: u32,
    height: u32,
}

/// Commit `table` to the driver
///
/// Fails without touching the driver when nothing is bound.
pub fn commit_attachments(
    table: &AttachmentTable,
    driver: &mut dyn GraphicsDriver,
    images: &mut dyn ImageRegistry,
) -> Result<()> {
    if table.is_empty() {
        return Err(Error::NoRenderTargets);
    }

    engine_trace!(SOURCE, "Committing {} attachment point(s)", table.active_count());

    let result = attach_images(table, driver, images)
        .and_then(|()| configure_draw_buffers(table, driver))
        .and_then(|()| check_completeness(driver));

    if result.is_err() {
        rollback_attachments(table, driver);
    }
    result
}

/// Detach every non-`None` attachment point in the active range
///
/// Points that were never attached during this commit are detached too;
/// detaching an empty point is a no-op for the driver.
pub fn rollback_attachments(table: &AttachmentTable, driver: &mut dyn GraphicsDriver) {
    for slot in table.active_slots().iter().filter(|slot| slot.is_bound()) {
        driver.framebuffer_texture(slot.point(), 0);
    }
}

fn attach_images(
    table: &AttachmentTable,
    driver: &mut dyn GraphicsDriver,
    images: &mut dyn ImageRegistry,
) -> Result<()> {
    let mut reference: Option<Reference> = None;

    for slot in table.active_slots() {
        let Some(image) = slot.image() else { continue };
        let info = images.image(image).ok_or(Error::UnknownRenderImage(image))?;

        let needs_attachment = match &reference {
            None => {
                // Surface selection binds COLOR_ATTACHMENT0 implicitly
                images.set_render_to_image(image, 0);
                reference = Some(Reference { image, width: info.width, height: info.height });
                slot.point() != AttachmentPoint::Color(0)
            }
            Some(first) => {
                if info.size() != (first.width, first.height) {
                    return Err(Error::MismatchedImageSizes {
                        first_image: first.image,
                        first_width: first.width,
                        first_height: first.height,
                        image,
                        width: info.width,
                        height: info.height,
                    });
                }
                true
            }
        };

        if needs_attachment {
            driver.framebuffer_texture(slot.point(), info.texture_id);
            match driver.get_error() {
                DriverError::NoError => {}
                DriverError::InvalidEnum | DriverError::InvalidOperation => {
                    return Err(Error::Attachment(AttachmentError::InvalidTarget));
                }
                DriverError::InvalidValue => {
                    return Err(Error::Attachment(AttachmentError::InvalidImage(image)));
                }
                other => {
                    engine_warn!(SOURCE, "Unclassified driver error {:?} attaching {} at {}",
                        other, image, slot.point());
                }
            }
        }
    }
    Ok(())
}

fn configure_draw_buffers(table: &AttachmentTable, driver: &mut dyn GraphicsDriver) -> Result<()> {
    let buffers = table.draw_buffer_list();
    driver.draw_buffers(&buffers);

    let error = match driver.get_error() {
        DriverError::NoError => return Ok(()),
        DriverError::InvalidEnum => DrawBuffersError::InvalidAttachmentSet,
        DriverError::InvalidOperation => DrawBuffersError::InvalidAttachPoint,
        DriverError::InvalidValue => DrawBuffersError::TooManyAttachPoints {
            max_render_targets: table.capacity(),
        },
        other => {
            engine_warn!(SOURCE, "Unclassified driver error {:?} setting draw buffers", other);
            return Ok(());
        }
    };
    Err(Error::DrawBuffers(error))
}

fn check_completeness(driver: &mut dyn GraphicsDriver) -> Result<()> {
    match driver.check_framebuffer_status() {
        FramebufferStatus::Complete => Ok(()),
        FramebufferStatus::Incomplete(reason) => Err(Error::Incomplete(reason)),
    }
}

#[cfg(test)]
#[path = "commit_tests.rs"]
mod tests;
