use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::selector::{select, EntrySelector, RandomSource, Selection};
use crate::store::DataStore;

pub fn run<S: DataStore, R: RandomSource + ?Sized>(
    store: &S,
    selector: &EntrySelector,
    rng: &mut R,
) -> Result<CmdResult> {
    let collection = store.load()?;
    log::debug!("show by {} over {} entries", selector, collection.len());

    let result = match select(&collection, selector, rng) {
        Selection::Entry(entry) => CmdResult::default().with_listed_entries(vec![entry]),
        Selection::Terms(terms) => CmdResult::default().with_terms(terms),
        Selection::OutOfRange { count } => CmdResult::default().with_message(
            CmdMessage::warning(format!(
                "Warning: Your database has {count} entries.\nPlease choose an index between 1 and {count}."
            )),
        ),
        Selection::Empty => CmdResult::default()
            .with_message(CmdMessage::warning("Your database has no entries.")),
    };
    Ok(result)
}
