//! # Entry Selection
//!
//! Resolves a lookup request against a [`Collection`]. Selection never mutates
//! the collection.
//!
//! - [`EntrySelector::Index`]: one entry by its 1-based display index
//! - [`EntrySelector::Native`]: the foreign term of every entry whose native term matches exactly
//! - [`EntrySelector::Foreign`]: the native term of every entry whose foreign term matches exactly
//! - [`EntrySelector::Random`]: one entry, picked uniformly through a [`RandomSource`]

use crate::index::{DisplayEntry, DisplayIndex};
use crate::model::Collection;
use rand::Rng;

/// A user request for entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySelector {
    /// Raw user input; validated against the collection at selection time.
    Index(i64),
    Native(String),
    Foreign(String),
    Random,
}

impl std::fmt::Display for EntrySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntrySelector::Index(i) => write!(f, "index {}", i),
            EntrySelector::Native(t) => write!(f, "native \"{}\"", t),
            EntrySelector::Foreign(t) => write!(f, "foreign \"{}\"", t),
            EntrySelector::Random => write!(f, "random"),
        }
    }
}

/// Outcome of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A single entry (index or random selection).
    Entry(DisplayEntry),
    /// Translations found by a text lookup, possibly none.
    Terms(Vec<String>),
    /// The requested index is not within `1..=count`.
    OutOfRange { count: usize },
    /// The collection has nothing to pick from.
    Empty,
}

/// Source of random positions, injectable so selection can be tested.
pub trait RandomSource {
    /// Returns a position in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Production random source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

pub fn select<R: RandomSource + ?Sized>(
    collection: &Collection,
    selector: &EntrySelector,
    rng: &mut R,
) -> Selection {
    match selector {
        EntrySelector::Native(term) => Selection::Terms(
            collection
                .iter()
                .filter(|e| &e.native == term)
                .map(|e| e.foreign.clone())
                .collect(),
        ),
        EntrySelector::Foreign(term) => Selection::Terms(
            collection
                .iter()
                .filter(|e| &e.foreign == term)
                .map(|e| e.native.clone())
                .collect(),
        ),
        EntrySelector::Index(raw) => {
            if collection.is_empty() {
                return Selection::Empty;
            }
            match DisplayIndex::checked(*raw, collection.len()) {
                Some(index) => Selection::Entry(DisplayEntry {
                    index,
                    entry: collection.entries()[index.position()].clone(),
                }),
                None => Selection::OutOfRange {
                    count: collection.len(),
                },
            }
        }
        EntrySelector::Random => {
            if collection.is_empty() {
                return Selection::Empty;
            }
            // Sources must return < len; clamp anyway to stay in bounds
            let pos = rng.pick(collection.len()).min(collection.len() - 1);
            Selection::Entry(DisplayEntry {
                index: DisplayIndex::from_position(pos),
                entry: collection.entries()[pos].clone(),
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Replays a fixed sequence of picks, cycling when exhausted.
    pub struct SequenceRandom {
        picks: Vec<usize>,
        next: usize,
        pub lens_seen: Vec<usize>,
    }

    impl SequenceRandom {
        pub fn new(picks: Vec<usize>) -> Self {
            Self {
                picks,
                next: 0,
                lens_seen: Vec::new(),
            }
        }
    }

    impl RandomSource for SequenceRandom {
        fn pick(&mut self, len: usize) -> usize {
            self.lens_seen.push(len);
            let value = self.picks[self.next % self.picks.len()];
            self.next += 1;
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::SequenceRandom;
    use super::*;
    use crate::model::Entry;

    fn sample() -> Collection {
        Collection::from(vec![
            Entry::new("Eins", "Uno"),
            Entry::new("Hallo", "Ciao"),
            Entry::new("Tschuess", "Ciao"),
        ])
    }

    fn no_rng() -> SequenceRandom {
        SequenceRandom::new(vec![0])
    }

    #[test]
    fn selects_by_index() {
        let result = select(&sample(), &EntrySelector::Index(2), &mut no_rng());
        match result {
            Selection::Entry(de) => {
                assert_eq!(de.index, DisplayIndex::from_position(1));
                assert_eq!(de.entry, Entry::new("Hallo", "Ciao"));
            }
            other => panic!("unexpected selection: {:?}", other),
        }
    }

    #[test]
    fn out_of_range_index_reports_count() {
        for raw in [0, 4, -3, i64::MAX] {
            assert_eq!(
                select(&sample(), &EntrySelector::Index(raw), &mut no_rng()),
                Selection::OutOfRange { count: 3 }
            );
        }
    }

    #[test]
    fn index_on_empty_collection_is_empty() {
        assert_eq!(
            select(&Collection::new(), &EntrySelector::Index(1), &mut no_rng()),
            Selection::Empty
        );
    }

    #[test]
    fn native_lookup_returns_all_foreign_matches() {
        let col = Collection::from(vec![
            Entry::new("Bank", "banca"),
            Entry::new("Hallo", "Ciao"),
            Entry::new("Bank", "panchina"),
        ]);
        assert_eq!(
            select(&col, &EntrySelector::Native("Bank".into()), &mut no_rng()),
            Selection::Terms(vec!["banca".into(), "panchina".into()])
        );
    }

    #[test]
    fn foreign_lookup_returns_native_terms() {
        assert_eq!(
            select(&sample(), &EntrySelector::Foreign("Ciao".into()), &mut no_rng()),
            Selection::Terms(vec!["Hallo".into(), "Tschuess".into()])
        );
    }

    #[test]
    fn lookup_is_exact_match() {
        assert_eq!(
            select(&sample(), &EntrySelector::Native("hallo".into()), &mut no_rng()),
            Selection::Terms(vec![])
        );
    }

    #[test]
    fn random_uses_injected_source_within_bounds() {
        let mut rng = SequenceRandom::new(vec![2, 0, 1]);
        let col = sample();

        let mut picked = Vec::new();
        for _ in 0..3 {
            match select(&col, &EntrySelector::Random, &mut rng) {
                Selection::Entry(de) => picked.push(de.index.position()),
                other => panic!("unexpected selection: {:?}", other),
            }
        }

        assert_eq!(picked, vec![2, 0, 1]);
        assert_eq!(rng.lens_seen, vec![3, 3, 3]);
    }

    #[test]
    fn random_on_empty_collection_does_not_consult_source() {
        let mut rng = no_rng();
        assert_eq!(
            select(&Collection::new(), &EntrySelector::Random, &mut rng),
            Selection::Empty
        );
        assert!(rng.lens_seen.is_empty());
    }

    #[test]
    fn thread_random_stays_in_range() {
        let mut rng = ThreadRandom;
        for len in 1..50 {
            assert!(rng.pick(len) < len);
        }
    }
}
