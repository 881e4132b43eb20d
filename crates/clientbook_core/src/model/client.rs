//! Client model.
//!
//! # Responsibility
//! - Represent one contact record with identity and data fields.
//! - Define the weak (`is_same_client`) and strong (`==`) equality notions.
//!
//! # Invariants
//! - Every field is present and already validated at construction.
//! - Tag and note sets are exposed only as read-only views.
//! - The note set is insertion-ordered and duplicate-free.
//! - Identity fields are never edited in place; an edit is a wholesale
//!   replacement at the aggregate level.

use crate::model::fields::{Address, CountryCode, Email, Name, Phone, Tag};
use crate::model::note::Note;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// A contact in the address book.
///
/// Identity fields: name, phone, email, country. Data fields: address,
/// tags, client notes. The country is referenced by code; the note-bearing
/// `Country` values live in the address book's country collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    name: Name,
    phone: Phone,
    email: Email,
    country: CountryCode,
    address: Address,
    tags: BTreeSet<Tag>,
    notes: Vec<Note>,
}

impl Client {
    /// Builds a client from already-validated fields, with no notes yet.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        country: CountryCode,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            country,
            address,
            tags,
            notes: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn country(&self) -> &CountryCode {
        &self.country
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the tag set as a read-only view.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns the client-note set as a read-only insertion-ordered view.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns whether the given note is already in this client's set.
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

    /// Weak identity used for duplicate detection: same name, same country,
    /// and at least one of phone or email matching.
    ///
    /// Strong equality implies `is_same_client`, never the converse.
    pub fn is_same_client(&self, other: &Client) -> bool {
        self.name == other.name
            && (self.phone == other.phone || self.email == other.email)
            && self.country == other.country
    }
}

impl Display for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Country: {} Address: {} Tags:",
            self.name, self.phone, self.email, self.country, self.address
        )?;
        for tag in &self.tags {
            write!(f, " [{tag}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Client;
    use crate::model::fields::{Address, CountryCode, Email, Name, Phone, Tag};
    use crate::model::note::Note;
    use std::collections::BTreeSet;

    fn alice() -> Client {
        Client::new(
            Name::new("Alice Pauline").unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new("alice@example.com").unwrap(),
            CountryCode::new("SG").unwrap(),
            Address::new("123, Jurong West Ave 6").unwrap(),
            BTreeSet::new(),
        )
    }

    fn with_phone(client: &Client, phone: &str) -> Client {
        Client::new(
            client.name().clone(),
            Phone::new(phone).unwrap(),
            client.email().clone(),
            client.country().clone(),
            client.address().clone(),
            client.tags().clone(),
        )
    }

    fn with_email(client: &Client, email: &str) -> Client {
        Client::new(
            client.name().clone(),
            client.phone().clone(),
            Email::new(email).unwrap(),
            client.country().clone(),
            client.address().clone(),
            client.tags().clone(),
        )
    }

    #[test]
    fn same_client_needs_name_country_and_phone_or_email() {
        let base = alice();
        assert!(base.is_same_client(&base));

        // Different phone, same email: still the same client.
        assert!(base.is_same_client(&with_phone(&base, "80000000")));
        // Different email, same phone: still the same client.
        assert!(base.is_same_client(&with_email(&base, "other@example.com")));

        // Both phone and email differ.
        let both = with_email(&with_phone(&base, "80000000"), "other@example.com");
        assert!(!base.is_same_client(&both));

        // Different country.
        let abroad = Client::new(
            base.name().clone(),
            base.phone().clone(),
            base.email().clone(),
            CountryCode::new("MY").unwrap(),
            base.address().clone(),
            base.tags().clone(),
        );
        assert!(!base.is_same_client(&abroad));
    }

    #[test]
    fn strong_equality_implies_same_client_but_not_conversely() {
        let base = alice();
        let copy = alice();
        assert_eq!(base, copy);
        assert!(base.is_same_client(&copy));

        let same_only = with_phone(&base, "80000000");
        assert!(base.is_same_client(&same_only));
        assert_ne!(base, same_only);
    }

    #[test]
    fn strong_equality_covers_the_note_set() {
        let base = alice();
        let mut noted = alice();
        assert!(noted.add_note(Note::new("prefers email contact").unwrap()));
        assert_ne!(base, noted);
        // Weak identity is unaffected by note edits.
        assert!(base.is_same_client(&noted));
    }

    #[test]
    fn note_set_dedupes_by_value() {
        let mut client = alice();
        let note = Note::new("met at conference").unwrap();
        assert!(client.add_note(note.clone()));
        assert!(!client.add_note(note.clone()));
        assert_eq!(client.notes().len(), 1);
        assert!(client.remove_note(&note));
        assert!(!client.has_note(&note));
    }

    #[test]
    fn display_lists_fields_and_tags() {
        let mut tags = BTreeSet::new();
        tags.insert(Tag::new("friends").unwrap());
        let client = Client::new(
            Name::new("Benson Meier").unwrap(),
            Phone::new("98765432").unwrap(),
            Email::new("johnd@example.com").unwrap(),
            CountryCode::new("SG").unwrap(),
            Address::new("311, Clementi Ave 2").unwrap(),
            tags,
        );
        let rendered = client.to_string();
        assert!(rendered.contains("Benson Meier"));
        assert!(rendered.contains("[friends]"));
    }
}
