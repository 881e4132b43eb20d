//! Free-text note model.
//!
//! # Responsibility
//! - Define the note record shared by client-scoped and country-scoped sets.
//! - Keep structural equality over text and tags for set-based dedupe.
//!
//! # Invariants
//! - Note text is non-blank.
//! - A note's scoping target is fixed by ownership: it lives inside exactly
//!   one client or country note set and is never reassigned.

use crate::model::fields::{FieldError, Tag};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// A free-text note with an optional tag set.
///
/// Equality is structural (text plus tags), so note sets deduplicate by
/// value, never by pointer identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Note {
    text: String,
    tags: BTreeSet<Tag>,
}

impl Note {
    /// Creates an untagged note.
    ///
    /// # Errors
    /// Returns `FieldError::NoteText` when `text` is blank.
    pub fn new(text: impl Into<String>) -> Result<Self, FieldError> {
        Self::with_tags(text, BTreeSet::new())
    }

    /// Creates a note carrying the given tag set.
    pub fn with_tags(text: impl Into<String>, tags: BTreeSet<Tag>) -> Result<Self, FieldError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(FieldError::NoteText(text));
        }
        Ok(Self { text, tags })
    }

    /// Returns the note text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the tag set as a read-only view.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns whether this note carries the given tag.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
