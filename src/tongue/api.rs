//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all tongue operations, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Validates raw input**: argument counts and mutually exclusive selectors.
//!   Mistakes come back as [`TongueError::Usage`], which callers show as guidance.
//! - **Normalizes inputs** into typed requests ([`EntrySelector`])
//! - **Dispatches** to the appropriate command function
//!
//! It does no I/O of its own and returns data, not strings.
//!
//! ## Generic Over DataStore and RandomSource
//!
//! - Production: `TongueApi<FileStore, ThreadRandom>`
//! - Testing: `TongueApi<InMemoryStore, _>` with a scripted random source

use crate::commands;
use crate::error::{Result, TongueError};
use crate::selector::{EntrySelector, RandomSource, ThreadRandom};
use crate::store::DataStore;

pub const ADD_USAGE: &str = "Usage: add <native> <foreign>";
pub const DELETE_USAGE: &str = "Usage: delete <native>";
pub const SHOW_CONFLICT: &str = "Please use only one of --index, --native or --foreign.";

pub struct TongueApi<S: DataStore, R: RandomSource = ThreadRandom> {
    store: S,
    rng: R,
}

impl<S: DataStore> TongueApi<S, ThreadRandom> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            rng: ThreadRandom,
        }
    }
}

impl<S: DataStore, R: RandomSource> TongueApi<S, R> {
    pub fn with_random(store: S, rng: R) -> Self {
        Self { store, rng }
    }

    pub fn add_entry(
        &mut self,
        native: Option<String>,
        foreign: Option<String>,
    ) -> Result<commands::CmdResult> {
        match (non_empty(native), non_empty(foreign)) {
            (Some(native), Some(foreign)) => commands::add::run(&mut self.store, native, foreign),
            _ => Err(TongueError::Usage(ADD_USAGE.to_string())),
        }
    }

    pub fn delete_entry(&mut self, native: Option<String>) -> Result<commands::CmdResult> {
        let native = native.ok_or_else(|| TongueError::Usage(DELETE_USAGE.to_string()))?;
        commands::delete::run(&mut self.store, &native)
    }

    pub fn list_entries(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show_entry(
        &mut self,
        index: Option<i64>,
        native: Option<String>,
        foreign: Option<String>,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(index, native, foreign)?;
        commands::show::run(&self.store, &selector, &mut self.rng)
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}

/// Turns the three optional `show` flags into one selector.
///
/// None set means random; more than one set is a usage error.
pub fn parse_selector(
    index: Option<i64>,
    native: Option<String>,
    foreign: Option<String>,
) -> Result<EntrySelector> {
    match (index, native, foreign) {
        (None, None, None) => Ok(EntrySelector::Random),
        (Some(i), None, None) => Ok(EntrySelector::Index(i)),
        (None, Some(n), None) => Ok(EntrySelector::Native(n)),
        (None, None, Some(f)) => Ok(EntrySelector::Foreign(f)),
        _ => Err(TongueError::Usage(SHOW_CONFLICT.to_string())),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
