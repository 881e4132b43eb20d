//! JSON-adapted document model and the bidirectional mapping.
//!
//! # Responsibility
//! - Mirror the persisted wire shape with serde DTOs.
//! - Convert between the document and the live aggregate, validating every
//!   field constraint on the way in.
//!
//! # Invariants
//! - Required fields are `Option` in the DTOs so a missing field surfaces
//!   as a structured `DataError`, never as a bare parse failure.
//! - `from_document` produces either a fully valid book or no book at all.
//! - `countryName` is written for readability and re-derived from the code
//!   on load, so code-based equality never sees a stale stored name.

use crate::model::address_book::AddressBook;
use crate::model::client::Client;
use crate::model::country::Country;
use crate::model::fields::{Address, CountryCode, Email, FieldError, Name, Phone, Tag};
use crate::model::note::Note;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MESSAGE_DUPLICATE_CLIENT: &str = "Clients list contains duplicate client(s).";

/// Constraint violation found while converting a document to the model.
#[derive(Debug)]
pub enum DataError {
    /// A required field is absent from the document.
    MissingField(&'static str),
    /// A present field fails its format constraint.
    Field(FieldError),
    /// Two clients in the document compare equal.
    DuplicateClient,
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is missing"),
            Self::Field(err) => write!(f, "{err}"),
            Self::DuplicateClient => f.write_str(MESSAGE_DUPLICATE_CLIENT),
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for DataError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}

/// Adapted note record: `{text, tags}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedNote {
    text: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Adapted client record with its embedded note list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedClient {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    country: Option<String>,
    address: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    notes: Vec<SerializedNote>,
}

/// Adapted country record with its embedded note list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedCountry {
    country_code: Option<String>,
    country_name: Option<String>,
    #[serde(default)]
    country_notes: Vec<SerializedNote>,
}

/// The body under the `addressbook` root key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerializedAddressBook {
    #[serde(default)]
    clients: Vec<SerializedClient>,
    #[serde(default)]
    countries: Vec<SerializedCountry>,
}

/// The persisted file: one JSON object rooted at `addressbook`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBookDocument {
    pub addressbook: SerializedAddressBook,
}

/// Maps the aggregate to its document form: flat ordered client and
/// country lists, each note set embedded in its owner.
pub fn to_document(book: &AddressBook) -> AddressBookDocument {
    let clients = book
        .client_list()
        .iter()
        .map(|client| SerializedClient {
            name: Some(client.name().as_str().to_string()),
            phone: Some(client.phone().as_str().to_string()),
            email: Some(client.email().as_str().to_string()),
            country: Some(client.country().as_str().to_string()),
            address: Some(client.address().as_str().to_string()),
            tags: client.tags().iter().map(|tag| tag.as_str().to_string()).collect(),
            notes: client.notes().iter().map(serialize_note).collect(),
        })
        .collect();

    let countries = book
        .country_list()
        .iter()
        .map(|country| SerializedCountry {
            country_code: Some(country.code().as_str().to_string()),
            country_name: Some(country.name().to_string()),
            country_notes: country.notes().iter().map(serialize_note).collect(),
        })
        .collect();

    AddressBookDocument {
        addressbook: SerializedAddressBook { clients, countries },
    }
}

/// Reconstructs a fresh aggregate from a document.
///
/// Clients are inserted one at a time; the first entry sharing identity
/// with an already-inserted client aborts the whole load with
/// `DataError::DuplicateClient`. Country notes are then replayed through
/// the aggregate's lazy country creation, deduplicating by set semantics.
/// Field-level errors propagate unmodified.
///
/// # Errors
/// Any `DataError`; on failure no aggregate is produced.
pub fn from_document(doc: &AddressBookDocument) -> Result<AddressBook, DataError> {
    let mut book = AddressBook::new();

    for serialized in &doc.addressbook.clients {
        let client = to_model_client(serialized)?;
        book.add_client(client)
            .map_err(|_| DataError::DuplicateClient)?;
    }

    for serialized in &doc.addressbook.countries {
        let code = required(serialized.country_code.as_deref(), "countryCode")?;
        let country = Country::new(CountryCode::new(code)?);
        for note in &serialized.country_notes {
            book.add_country_note(&country, to_model_note(note)?);
        }
    }

    Ok(book)
}

fn serialize_note(note: &Note) -> SerializedNote {
    SerializedNote {
        text: Some(note.text().to_string()),
        tags: note.tags().iter().map(|tag| tag.as_str().to_string()).collect(),
    }
}

fn to_model_note(serialized: &SerializedNote) -> Result<Note, DataError> {
    let text = required(serialized.text.as_deref(), "text")?;
    let tags = to_model_tags(&serialized.tags)?;
    Ok(Note::with_tags(text, tags)?)
}

fn to_model_client(serialized: &SerializedClient) -> Result<Client, DataError> {
    let name = Name::new(required(serialized.name.as_deref(), "name")?)?;
    let phone = Phone::new(required(serialized.phone.as_deref(), "phone")?)?;
    let email = Email::new(required(serialized.email.as_deref(), "email")?)?;
    let country = CountryCode::new(required(serialized.country.as_deref(), "country")?)?;
    let address = Address::new(required(serialized.address.as_deref(), "address")?)?;
    let tags = to_model_tags(&serialized.tags)?;

    let mut client = Client::new(name, phone, email, country, address, tags);
    for note in &serialized.notes {
        client.add_note(to_model_note(note)?);
    }
    Ok(client)
}

fn to_model_tags(raw: &[String]) -> Result<BTreeSet<Tag>, DataError> {
    raw.iter()
        .map(|tag| Tag::new(tag.as_str()).map_err(DataError::from))
        .collect()
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, DataError> {
    value.ok_or(DataError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::{from_document, AddressBookDocument, DataError};

    fn parse(raw: &str) -> AddressBookDocument {
        serde_json::from_str(raw).expect("document should parse")
    }

    #[test]
    fn missing_required_field_names_the_field() {
        let doc = parse(
            r#"{"addressbook": {"clients": [
                {"phone": "94351253", "email": "alice@example.com",
                 "country": "SG", "address": "somewhere"}
            ]}}"#,
        );
        match from_document(&doc) {
            Err(DataError::MissingField("name")) => {}
            other => panic!("expected missing name, got {other:?}"),
        }
    }

    #[test]
    fn invalid_field_value_propagates_as_field_error() {
        let doc = parse(
            r#"{"addressbook": {"clients": [
                {"name": "Alice", "phone": "91", "email": "alice@example.com",
                 "country": "SG", "address": "somewhere"}
            ]}}"#,
        );
        match from_document(&doc) {
            Err(DataError::Field(err)) => assert!(err.to_string().contains("phone")),
            other => panic!("expected field error, got {other:?}"),
        }
    }

    #[test]
    fn empty_document_maps_to_empty_book() {
        let doc = parse(r#"{"addressbook": {}}"#);
        let book = from_document(&doc).expect("empty book should load");
        assert!(book.client_list().is_empty());
        assert!(book.country_list().is_empty());
    }
}
