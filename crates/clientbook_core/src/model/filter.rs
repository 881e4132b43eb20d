//! Equality-comparable filters for the live projected views.
//!
//! # Responsibility
//! - Define the predicates driving the filtered client and note views.
//!
//! # Invariants
//! - Filters are plain values: comparing two filters for equality is part
//!   of the model manager contract.
//! - `matches` is pure; a filter never holds view state.

use crate::model::client::Client;
use crate::model::country::Country;
use crate::model::fields::CountryCode;

/// Predicate over clients for the filtered client list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClientFilter {
    /// Every client passes.
    #[default]
    ShowAll,
    /// No client passes.
    ShowNone,
    /// A client passes when any keyword equals, ignoring case, any
    /// whitespace-separated word of its name.
    NameContainsKeywords(Vec<String>),
}

impl ClientFilter {
    pub fn matches(&self, client: &Client) -> bool {
        match self {
            Self::ShowAll => true,
            Self::ShowNone => false,
            Self::NameContainsKeywords(keywords) => keywords.iter().any(|keyword| {
                client
                    .name()
                    .as_str()
                    .split_whitespace()
                    .any(|word| word.eq_ignore_ascii_case(keyword))
            }),
        }
    }
}

/// Predicate over client notes for the filtered client-note view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClientNoteFilter {
    /// Every client's notes pass.
    #[default]
    ShowAll,
    /// Only notes owned by the client matching by weak identity pass.
    ForClient(Box<Client>),
}

impl ClientNoteFilter {
    pub fn matches(&self, owner: &Client) -> bool {
        match self {
            Self::ShowAll => true,
            Self::ForClient(client) => client.is_same_client(owner),
        }
    }
}

/// Predicate over country notes for the filtered country-note view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CountryNoteFilter {
    /// Every country's notes pass.
    #[default]
    ShowAll,
    /// Only notes owned by the country with this code pass.
    ForCountry(CountryCode),
}

impl CountryNoteFilter {
    pub fn matches(&self, owner: &Country) -> bool {
        match self {
            Self::ShowAll => true,
            Self::ForCountry(code) => owner.code() == code,
        }
    }
}
