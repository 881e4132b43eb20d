//! Country model and display-name lookup.
//!
//! # Responsibility
//! - Represent a code-identified country owning its country notes.
//! - Derive a human-readable display name from the country code.
//!
//! # Invariants
//! - Equality and hashing are code-based only; the note set never
//!   participates.
//! - The note set is insertion-ordered and duplicate-free.
//! - Countries are created lazily by code and never independently deleted.

use crate::model::fields::CountryCode;
use crate::model::note::Note;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Display names for the country codes this book is expected to meet.
/// Unknown codes fall back to the code text itself.
const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("AU", "Australia"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("CN", "China"),
    ("DE", "Germany"),
    ("DK", "Denmark"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("HK", "Hong Kong"),
    ("ID", "Indonesia"),
    ("IE", "Ireland"),
    ("IN", "India"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("MY", "Malaysia"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("NZ", "New Zealand"),
    ("PH", "Philippines"),
    ("PT", "Portugal"),
    ("RU", "Russia"),
    ("SE", "Sweden"),
    ("SG", "Singapore"),
    ("TH", "Thailand"),
    ("TW", "Taiwan"),
    ("US", "United States"),
    ("VN", "Vietnam"),
    ("ZA", "South Africa"),
];

/// A country identified by its two-letter code, owning its country notes.
#[derive(Debug, Clone)]
pub struct Country {
    code: CountryCode,
    notes: Vec<Note>,
}

impl Country {
    /// Creates an empty country for the given code.
    pub fn new(code: CountryCode) -> Self {
        Self {
            code,
            notes: Vec::new(),
        }
    }

    /// Returns the two-letter country code.
    pub fn code(&self) -> &CountryCode {
        &self.code
    }

    /// Returns the display name derived from the code.
    pub fn name(&self) -> &str {
        COUNTRY_NAMES
            .iter()
            .find(|(code, _)| *code == self.code.as_str())
            .map(|(_, name)| *name)
            .unwrap_or_else(|| self.code.as_str())
    }

    /// Returns the note set as a read-only insertion-ordered view.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns whether the given note is already in this country's set.
    pub fn has_note(&self, note: &Note) -> bool {
        self.notes.contains(note)
    }

    /// Set-inserts a note, preserving insertion order.
    ///
    /// Returns `false` when an equal note is already present.
    pub fn add_note(&mut self, note: Note) -> bool {
        if self.has_note(&note) {
            return false;
        }
        self.notes.push(note);
        true
    }

    /// Removes the given note, reporting whether it was present.
    pub fn remove_note(&mut self, note: &Note) -> bool {
        match self.notes.iter().position(|existing| existing == note) {
            Some(index) => {
                self.notes.remove(index);
                true
            }
            None => false,
        }
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Country {}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Display for Country {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
