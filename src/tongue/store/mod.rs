//! # Storage Layer
//!
//! The [`DataStore`] trait is the load/save boundary between a [`Collection`]
//! and wherever it is persisted.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file per collection
//!   - The whole collection is rewritten on every save
//!   - Writes go to a temporary sibling file that is renamed over the target
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can start out "missing" to exercise first-run behavior
//!
//! ## Missing Data
//!
//! `load` reports an absent collection as [`TongueError::MissingFile`] rather
//! than an empty one. Commands decide whether that is fine (`add`) or an error
//! (everything that reads existing data).
//!
//! There is no locking. Two processes saving the same file race, and the last
//! rename wins.
//!
//! [`TongueError::MissingFile`]: crate::error::TongueError::MissingFile

use crate::error::Result;
use crate::model::Collection;

pub mod fs;
pub mod memory;

/// Abstract interface for collection storage.
pub trait DataStore {
    /// Load the full collection.
    fn load(&self) -> Result<Collection>;

    /// Replace the persisted collection with `collection`.
    fn save(&mut self, collection: &Collection) -> Result<()>;

    /// Human-readable location of the data, used in messages.
    fn location(&self) -> String;
}
