//! # Command Layer
//!
//! One module per command. Every command loads the collection fresh from the
//! [`DataStore`](crate::store::DataStore), works on it, saves it back in full
//! if it changed anything, and describes what happened in a [`CmdResult`].
//!
//! Commands never print. User-facing text travels as [`CmdMessage`]s and the
//! CLI decides how (and whether) to show them.

use crate::index::DisplayEntry;

pub mod add;
pub mod delete;
pub mod list;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Extra detail, only shown in verbose mode.
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Entries to display, with their indexes.
    pub listed_entries: Vec<DisplayEntry>,
    /// Bare terms to display, one per line (text lookups).
    pub terms: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_terms(mut self, terms: Vec<String>) -> Self {
        self.terms = terms;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
