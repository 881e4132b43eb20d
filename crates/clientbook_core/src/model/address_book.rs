//! Address book aggregate.
//!
//! # Responsibility
//! - Own the canonical client and country collections.
//! - Enforce the uniqueness invariants on every mutation path.
//!
//! # Invariants
//! - No two clients in the book share weak identity (`is_same_client`);
//!   strong-equal duplicates are excluded as a consequence.
//! - No two countries share a code; countries are created lazily by code.
//! - Every mutation either completes fully or leaves the book untouched.

use crate::model::client::Client;
use crate::model::country::Country;
use crate::model::fields::CountryCode;
use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Failure raised by aggregate and manager mutation paths.
///
/// Every variant is side-effect-free: the operation that raised it has not
/// modified the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Insert or replace would produce two strong-equal clients.
    DuplicateClient,
    /// The targeted client is not present in the book.
    ClientNotFound,
    /// The targeted note is not in the client's note set.
    ClientNoteNotFound,
    /// The targeted note is not in the country's note set.
    CountryNoteNotFound,
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateClient => write!(f, "operation would result in duplicate clients"),
            Self::ClientNotFound => write!(f, "client does not exist in the address book"),
            Self::ClientNoteNotFound => write!(f, "note does not exist for the given client"),
            Self::CountryNoteNotFound => write!(f, "note does not exist for the given country"),
        }
    }
}

impl Error for ModelError {}

/// The top-level mutable entity graph: clients plus note-bearing countries.
///
/// Both collections are insertion-ordered for display; order is irrelevant
/// to the uniqueness invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    clients: Vec<Client>,
    countries: Vec<Country>,
}

impl AddressBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a client with the same identity (`is_same_client`)
    /// is present. Strong-equal clients are a subset of this notion.
    pub fn has_client(&self, client: &Client) -> bool {
        self.same_client(client).is_some()
    }

    /// Adds a client.
    ///
    /// # Errors
    /// `ModelError::DuplicateClient` when a client with the same identity
    /// already exists.
    pub fn add_client(&mut self, client: Client) -> ModelResult<()> {
        if self.has_client(&client) {
            return Err(ModelError::DuplicateClient);
        }
        self.clients.push(client);
        Ok(())
    }

    /// Removes the client equal to `target`.
    ///
    /// # Errors
    /// `ModelError::ClientNotFound` when no such client exists.
    pub fn remove_client(&mut self, target: &Client) -> ModelResult<()> {
        let index = self.position_of(target).ok_or(ModelError::ClientNotFound)?;
        self.clients.remove(index);
        Ok(())
    }

    /// Replaces `target` with `edited`, keeping the target's list position.
    ///
    /// # Errors
    /// - `ModelError::ClientNotFound` when `target` is absent.
    /// - `ModelError::DuplicateClient` when `edited` equals a different
    ///   existing entry. Replacing a client with itself is a no-op.
    pub fn set_client(&mut self, target: &Client, edited: Client) -> ModelResult<()> {
        let index = self.position_of(target).ok_or(ModelError::ClientNotFound)?;
        // The collision rule here is strong equality, unlike the weak
        // identity used by `has_client`: an edit may legitimately produce
        // a client that shares identity with its own previous version.
        if edited != *target && self.clients.contains(&edited) {
            return Err(ModelError::DuplicateClient);
        }
        self.clients[index] = edited;
        Ok(())
    }

    /// Returns whether `country` already carries `note`.
    ///
    /// A country that has never been seen has no notes.
    pub fn has_country_note(&self, country: &Country, note: &Note) -> bool {
        self.country_by_code(country.code())
            .is_some_and(|existing| existing.has_note(note))
    }

    /// Adds `note` to the country identified by `country`'s code, creating
    /// the country lazily on first reference. Set semantics: an equal note
    /// already present is deduplicated silently.
    ///
    /// Returns whether the note was actually inserted.
    pub fn add_country_note(&mut self, country: &Country, note: Note) -> bool {
        let index = match self
            .countries
            .iter()
            .position(|existing| existing.code() == country.code())
        {
            Some(index) => index,
            None => {
                self.countries.push(Country::new(country.code().clone()));
                self.countries.len() - 1
            }
        };
        self.countries[index].add_note(note)
    }

    /// Removes `note` from the country identified by `country`'s code.
    ///
    /// # Errors
    /// `ModelError::CountryNoteNotFound` when the country is unknown or the
    /// note is not in its set. The country itself is never deleted.
    pub fn remove_country_note(&mut self, country: &Country, note: &Note) -> ModelResult<()> {
        let removed = self
            .countries
            .iter_mut()
            .find(|existing| existing.code() == country.code())
            .is_some_and(|existing| existing.remove_note(note));
        if removed {
            Ok(())
        } else {
            Err(ModelError::CountryNoteNotFound)
        }
    }

    /// Returns whether the client identified by weak identity carries `note`.
    pub fn has_client_note(&self, client: &Client, note: &Note) -> bool {
        self.same_client(client)
            .is_some_and(|existing| existing.has_note(note))
    }

    /// Adds `note` to the note set of the client matching `client` by weak
    /// identity. Set semantics: silent dedupe, like country notes.
    ///
    /// Returns whether the note was actually inserted.
    ///
    /// # Errors
    /// `ModelError::ClientNotFound` when no matching client exists.
    pub fn add_client_note(&mut self, client: &Client, note: Note) -> ModelResult<bool> {
        let existing = self
            .same_client_mut(client)
            .ok_or(ModelError::ClientNotFound)?;
        Ok(existing.add_note(note))
    }

    /// Removes `note` from the matching client's note set.
    ///
    /// # Errors
    /// - `ModelError::ClientNotFound` when no matching client exists.
    /// - `ModelError::ClientNoteNotFound` when the note is not in the set.
    pub fn remove_client_note(&mut self, client: &Client, note: &Note) -> ModelResult<()> {
        let existing = self
            .same_client_mut(client)
            .ok_or(ModelError::ClientNotFound)?;
        if existing.remove_note(note) {
            Ok(())
        } else {
            Err(ModelError::ClientNoteNotFound)
        }
    }

    /// Returns the client list as a read-only ordered view.
    pub fn client_list(&self) -> &[Client] {
        &self.clients
    }

    /// Returns the country list as a read-only ordered view.
    pub fn country_list(&self) -> &[Country] {
        &self.countries
    }

    /// Looks up a country by code.
    pub fn country_by_code(&self, code: &CountryCode) -> Option<&Country> {
        self.countries.iter().find(|country| country.code() == code)
    }

    /// Full reset: clears both collections, then bulk-inserts the other
    /// book's entries preserving their order.
    pub fn reset_data(&mut self, other: AddressBook) {
        self.clients = other.clients;
        self.countries = other.countries;
    }

    fn position_of(&self, target: &Client) -> Option<usize> {
        self.clients.iter().position(|existing| existing == target)
    }

    /// Looks up a stored client by weak identity. Note edits change strong
    /// equality but not weak identity, so note operations resolve their
    /// target this way.
    fn same_client(&self, client: &Client) -> Option<&Client> {
        self.clients
            .iter()
            .find(|existing| existing.is_same_client(client))
    }

    fn same_client_mut(&mut self, client: &Client) -> Option<&mut Client> {
        self.clients
            .iter_mut()
            .find(|existing| existing.is_same_client(client))
    }
}
