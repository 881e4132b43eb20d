//! Core domain logic for clientbook, a single-user desktop address book.
//! This crate is the single source of truth for business invariants: the
//! entity graph, its live filtered views, the tag-note index and the JSON
//! persistence mapping. Window management and command dispatch live in the
//! shell, which calls in only through `ModelManager` and the storage API.

pub mod logging;
pub mod model;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::address_book::{AddressBook, ModelError, ModelResult};
pub use model::client::Client;
pub use model::country::Country;
pub use model::fields::{Address, CountryCode, Email, FieldError, Name, Phone, Tag};
pub use model::filter::{ClientFilter, ClientNoteFilter, CountryNoteFilter};
pub use model::manager::{ModelManager, WidgetContent};
pub use model::note::Note;
pub use model::prefs::{GuiSettings, UserPrefs};
pub use model::tag_note_map::TagNoteMap;
pub use storage::json_file::{
    read_address_book, read_user_prefs, save_address_book, save_user_prefs, StorageError,
    StorageResult,
};
pub use storage::serializable::{
    from_document, to_document, AddressBookDocument, DataError, MESSAGE_DUPLICATE_CLIENT,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
