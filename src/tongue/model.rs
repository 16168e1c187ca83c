use serde::{Deserialize, Serialize};

/// A single vocabulary pair.
///
/// Field names on disk are `Native` and `Foreign`; they are part of the file
/// format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The word in the user's native language.
    #[serde(rename = "Native")]
    pub native: String,
    /// The word in the language being learned.
    #[serde(rename = "Foreign")]
    pub foreign: String,
}

impl Entry {
    pub fn new(native: impl Into<String>, foreign: impl Into<String>) -> Self {
        Self {
            native: native.into(),
            foreign: foreign.into(),
        }
    }
}

/// The ordered list of all entries.
///
/// Insertion order is display order is on-disk order. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    entries: Vec<Entry>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Appends an entry after all existing ones.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Removes the lowest-positioned entry whose native term equals `native`.
    ///
    /// Later entries with the same native term are left in place. Returns the
    /// removed entry, or `None` when nothing matched.
    pub fn remove_first_native(&mut self, native: &str) -> Option<Entry> {
        let pos = self.entries.iter().position(|e| e.native == native)?;
        Some(self.entries.remove(pos))
    }
}

impl From<Vec<Entry>> for Collection {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}
