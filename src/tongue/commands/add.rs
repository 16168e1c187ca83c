use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TongueError};
use crate::model::{Collection, Entry};
use crate::store::DataStore;

/// Appends a new entry and persists the collection.
///
/// A missing file is the first-run case: the collection starts out empty and
/// the file is created by the save.
pub fn run<S: DataStore>(store: &mut S, native: String, foreign: String) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let mut collection = match store.load() {
        Ok(collection) => collection,
        Err(TongueError::MissingFile(_)) => {
            result.add_message(CmdMessage::info(format!(
                "Created new file: {}",
                store.location()
            )));
            Collection::new()
        }
        Err(e) => return Err(e),
    };

    let entry = Entry::new(native, foreign);
    collection.push(entry.clone());
    store.save(&collection)?;

    log::debug!("added entry {} to {}", collection.len(), store.location());
    result.add_message(CmdMessage::info(format!(
        "Added entry {}: {} - {}",
        collection.len(),
        entry.native,
        entry.foreign
    )));
    Ok(result)
}
