use super::DataStore;
use crate::error::{Result, TongueError};
use crate::model::{Collection, Entry};
use std::path::PathBuf;

const MEMORY_LOCATION: &str = "memory";

/// Store that keeps the collection in memory. `None` behaves like a missing file.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collection: Option<Collection>,
    saves: usize,
}

impl InMemoryStore {
    /// A store with no data yet, like a first run against a missing file.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(collection: Collection) -> Self {
        Self {
            collection: Some(collection),
            saves: 0,
        }
    }

    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let entries = entries
            .iter()
            .map(|(native, foreign)| Entry::new(*native, *foreign))
            .collect::<Vec<_>>();
        Self::with_collection(Collection::from(entries))
    }

    /// The currently stored collection, if any.
    pub fn collection(&self) -> Option<&Collection> {
        self.collection.as_ref()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Collection> {
        self.collection
            .clone()
            .ok_or_else(|| TongueError::MissingFile(PathBuf::from(MEMORY_LOCATION)))
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        self.collection = Some(collection.clone());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        MEMORY_LOCATION.to_string()
    }
}
