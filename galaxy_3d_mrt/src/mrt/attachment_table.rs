/// Attachment table - sparse attachment index -> render image bindings.
///
/// Sized once from the probed hardware maximum. Only local state changes
/// here; nothing reaches the driver until a commit.

use crate::driver::AttachmentPoint;
use crate::error::{Error, Result};

/// One attachment index of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentSlot {
    point: AttachmentPoint,
    image: u32,
}

impl AttachmentSlot {
    const UNBOUND: AttachmentSlot = AttachmentSlot { point: AttachmentPoint::None, image: 0 };

    /// Attachment tag (`Color(index)` when bound)
    pub fn point(&self) -> AttachmentPoint {
        self.point
    }

    /// Bound render image, if any
    pub fn image(&self) -> Option<u32> {
        (!self.point.is_none()).then_some(self.image)
    }

    pub fn is_bound(&self) -> bool {
        !self.point.is_none()
    }
}

/// Fixed-capacity attachment table
///
/// `active_count` is always 1 + the highest bound index, or 0 when nothing
/// is bound.
#[derive(Debug, Clone)]
pub struct AttachmentTable {
    slots: Vec<AttachmentSlot>,
    active_count: u32,
}

impl AttachmentTable {
    /// Create a table of `capacity` unbound slots
    pub fn new(capacity: u32) -> Self {
        Self {
            slots: vec![AttachmentSlot::UNBOUND; capacity as usize],
            active_count: 0,
        }
    }

    /// Number of slots (the probed maximum render target count)
    pub fn capacity(&self) -> u32 {
        self.slots.len() as u32
    }

    pub fn active_count(&self) -> u32 {
        self.active_count
    }

    pub fn is_empty(&self) -> bool {
        self.active_count == 0
    }

    pub fn slot(&self, index: u32) -> Option<&AttachmentSlot> {
        self.slots.get(index as usize)
    }

    /// Slots `0..active_count`, in index order
    pub fn active_slots(&self) -> &[AttachmentSlot] {
        &self.slots[..self.active_count as usize]
    }

    /// Tags of the active slots in index order, unbound slots included as `None`
    pub fn draw_buffer_list(&self) -> Vec<AttachmentPoint> {
        self.active_slots().iter().map(AttachmentSlot::point).collect()
    }

    /// Bind `image` at `index`, or unbind when `image` is 0
    pub fn set(&mut self, index: u32, image: u32) -> Result<()> {
        if image == 0 {
            self.unbind(index)
        } else {
            self.bind(index, image)
        }
    }

    /// Bind a non-zero `image` at `index`
    pub fn bind(&mut self, index: u32, image: u32) -> Result<()> {
        self.check_index(index)?;
        if image == 0 {
            return self.unbind(index);
        }

        self.slots[index as usize] = AttachmentSlot {
            point: AttachmentPoint::Color(index),
            image,
        };
        self.active_count = self.active_count.max(index + 1);
        Ok(())
    }

    /// Unbind `index`, shrinking the active range past any unbound top slots
    pub fn unbind(&mut self, index: u32) -> Result<()> {
        self.check_index(index)?;

        self.slots[index as usize] = AttachmentSlot::UNBOUND;
        while self.active_count > 0 && !self.slots[self.active_count as usize - 1].is_bound() {
            self.active_count -= 1;
        }
        Ok(())
    }

    /// Unbind every active slot
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.active_count as usize] {
            *slot = AttachmentSlot::UNBOUND;
        }
        self.active_count = 0;
    }

    fn check_index(&self, index: u32) -> Result<()> {
        if index >= self.capacity() {
            return Err(Error::InvalidAttachmentPoint {
                index,
                max_render_targets: self.capacity(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "attachment_table_tests.rs"]
mod tests;
