use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_entries;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let collection = store.load()?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!(
            "You have {} entries in your database:",
            collection.len()
        )))
        .with_listed_entries(index_entries(&collection)))
}
