use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Removes the first entry (lowest index) whose native term is exactly `native`.
///
/// Deleting a term that isn't there is not an error: the collection is saved
/// back unchanged and only an informational message is produced.
pub fn run<S: DataStore>(store: &mut S, native: &str) -> Result<CmdResult> {
    let mut collection = store.load()?;
    let mut result = CmdResult::default();

    let removed = collection.remove_first_native(native);
    match &removed {
        Some(entry) => result.add_message(CmdMessage::info(format!(
            "Deleted: {} - {}",
            entry.native, entry.foreign
        ))),
        None => result.add_message(CmdMessage::info(format!(
            "No entry with native term '{}'",
            native
        ))),
    }

    store.save(&collection)?;
    log::debug!(
        "delete '{}' removed {} entries from {}",
        native,
        usize::from(removed.is_some()),
        store.location()
    );
    Ok(result)
}
