//! Derived tag-to-notes index.
//!
//! # Responsibility
//! - Group every reachable client note and country note by tag.
//!
//! # Invariants
//! - The map is derived, never authoritative: a full rebuild from the book
//!   must reproduce it exactly when the note population is unchanged.
//! - Rebuilding is entirely caller-driven; note mutations leave an existing
//!   map stale until the caller rebuilds it.

use crate::model::address_book::AddressBook;
use crate::model::fields::Tag;
use crate::model::note::Note;
use std::collections::{BTreeMap, BTreeSet};

static NO_NOTES: BTreeSet<Note> = BTreeSet::new();

/// Mapping from tag to the set of notes carrying it, client notes and
/// country notes uniformly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagNoteMap {
    map: BTreeMap<Tag, BTreeSet<Note>>,
}

impl TagNoteMap {
    /// The empty, uninitialised map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map by scanning every note reachable from the book.
    ///
    /// Untagged notes are simply not indexed; a note with several tags
    /// appears under each of them. Never fails for a well-formed book.
    pub fn rebuild_from(book: &AddressBook) -> Self {
        let mut map: BTreeMap<Tag, BTreeSet<Note>> = BTreeMap::new();
        let client_notes = book.client_list().iter().flat_map(|client| client.notes());
        let country_notes = book
            .country_list()
            .iter()
            .flat_map(|country| country.notes());
        for note in client_notes.chain(country_notes) {
            for tag in note.tags() {
                map.entry(tag.clone()).or_default().insert(note.clone());
            }
        }
        Self { map }
    }

    /// Returns the notes indexed under `tag`, empty for unknown tags.
    pub fn notes_with_tag(&self, tag: &Tag) -> &BTreeSet<Note> {
        self.map.get(tag).unwrap_or(&NO_NOTES)
    }

    /// Returns the indexed tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.map.keys()
    }

    /// Returns how many distinct tags are indexed.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
