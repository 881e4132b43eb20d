//! Whole-file JSON persistence driver.
//!
//! # Responsibility
//! - Read and write the address-book document and the preferences document
//!   as complete files.
//!
//! # Invariants
//! - A save rewrites the whole file; there is no partial update.
//! - A failed load leaves any in-memory state untouched (the caller only
//!   receives a book on success).
//! - Log records carry counts and paths, never client data or note text.

use crate::model::address_book::AddressBook;
use crate::model::prefs::UserPrefs;
use crate::storage::serializable::{from_document, to_document, AddressBookDocument, DataError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure while loading or saving a persisted document.
#[derive(Debug)]
pub enum StorageError {
    /// The file parsed but violates a model constraint.
    Data(DataError),
    /// The file is not well-formed JSON for the expected shape.
    Json(serde_json::Error),
    /// The file could not be read or written.
    Io(std::io::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Data(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "malformed JSON document: {err}"),
            Self::Io(err) => write!(f, "storage I/O failure: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Data(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<DataError> for StorageError {
    fn from(value: DataError) -> Self {
        Self::Data(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Loads the address book from `path`.
///
/// Returns `Ok(None)` when the file does not exist yet (first run).
///
/// # Errors
/// `StorageError` on unreadable file, malformed JSON, or any data
/// constraint violation; no partial book is ever returned.
pub fn read_address_book(path: &Path) -> StorageResult<Option<AddressBook>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    let doc: AddressBookDocument = serde_json::from_str(&raw)?;
    let book = from_document(&doc)?;
    info!(
        "event=book_loaded module=storage status=ok clients={} countries={} path={}",
        book.client_list().len(),
        book.country_list().len(),
        path.display()
    );
    Ok(Some(book))
}

/// Saves the address book to `path`, rewriting the whole file and creating
/// missing parent directories.
pub fn save_address_book(book: &AddressBook, path: &Path) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(&to_document(book))?;
    fs::write(path, raw)?;
    info!(
        "event=book_saved module=storage status=ok clients={} countries={} path={}",
        book.client_list().len(),
        book.country_list().len(),
        path.display()
    );
    Ok(())
}

/// Loads the standalone preferences document.
///
/// Returns `Ok(None)` when the file does not exist yet.
pub fn read_user_prefs(path: &Path) -> StorageResult<Option<UserPrefs>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    let prefs: UserPrefs = serde_json::from_str(&raw)?;
    Ok(Some(prefs))
}

/// Saves the standalone preferences document, whole-file rewrite.
pub fn save_user_prefs(prefs: &UserPrefs, path: &Path) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(prefs)?;
    fs::write(path, raw)?;
    Ok(())
}
