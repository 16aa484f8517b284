//! Slot names.

use crate::error::StorageError;
use std::fmt;
use std::str::FromStr;

/// One of the two named payload fields of a request record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// The left payload.
    Left,
    /// The right payload.
    Right,
}

impl Slot {
    /// Both slots, left first.
    pub const ALL: [Slot; 2] = [Slot::Left, Slot::Right];

    /// Returns the lowercase slot name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Slot::Left => "left",
            Slot::Right => "right",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = StorageError;

    /// Parses a slot name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("left") {
            Ok(Slot::Left)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Slot::Right)
        } else {
            Err(StorageError::invalid_slot(s))
        }
    }
}
