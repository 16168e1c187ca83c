//! # Display Indexes
//!
//! Entries have no identity beyond their position. Users see 1-based indexes
//! (`1: Eins - Uno`), while the collection is addressed 0-based internally.
//! [`DisplayIndex`] is the only place that converts between the two.

use crate::model::{Collection, Entry};

/// A user-facing, 1-based index of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// Index for the entry stored at 0-based `position`.
    pub fn from_position(position: usize) -> Self {
        DisplayIndex(position + 1)
    }

    /// Validates a raw user-supplied index against a collection of `count` entries.
    ///
    /// Returns `None` unless `1 <= raw <= count`.
    pub fn checked(raw: i64, count: usize) -> Option<Self> {
        let n = usize::try_from(raw).ok()?;
        if n >= 1 && n <= count {
            Some(DisplayIndex(n))
        } else {
            None
        }
    }

    /// The 0-based position in the collection.
    pub fn position(&self) -> usize {
        self.0 - 1
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub index: DisplayIndex,
    pub entry: Entry,
}

/// Pairs every entry with its display index, in collection order.
pub fn index_entries(collection: &Collection) -> Vec<DisplayEntry> {
    collection
        .iter()
        .enumerate()
        .map(|(pos, entry)| DisplayEntry {
            index: DisplayIndex::from_position(pos),
            entry: entry.clone(),
        })
        .collect()
}
