//! The request record.

use crate::slot::Slot;
use bindiff_codec::RecordFrame;

/// A request id together with its two slots.
///
/// Both slots always exist. A slot that was never written holds `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestRecord {
    id: String,
    left: String,
    right: String,
}

impl RequestRecord {
    /// Creates a record with both slots empty.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            left: String::new(),
            right: String::new(),
        }
    }

    /// Returns the request id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the content of a slot.
    #[must_use]
    pub fn slot(&self, slot: Slot) -> &str {
        match slot {
            Slot::Left => &self.left,
            Slot::Right => &self.right,
        }
    }

    /// Replaces the content of one slot, leaving the other as it was.
    pub fn set(&mut self, slot: Slot, content: impl Into<String>) {
        let content = content.into();
        match slot {
            Slot::Left => self.left = content,
            Slot::Right => self.right = content,
        }
    }

    /// Returns `(left, right)` as owned strings.
    #[must_use]
    pub fn to_pair(&self) -> (String, String) {
        (self.left.clone(), self.right.clone())
    }

    /// Consumes the record, returning `(left, right)`.
    #[must_use]
    pub fn into_pair(self) -> (String, String) {
        (self.left, self.right)
    }

    /// Converts to the on-disk frame.
    #[must_use]
    pub fn to_frame(&self) -> RecordFrame {
        RecordFrame::new(self.id.clone(), self.left.clone(), self.right.clone())
    }
}

impl From<RecordFrame> for RequestRecord {
    fn from(frame: RecordFrame) -> Self {
        Self {
            id: frame.id,
            left: frame.left,
            right: frame.right,
        }
    }
}
