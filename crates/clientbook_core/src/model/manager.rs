//! Model manager facade.
//!
//! # Responsibility
//! - Be the sole mutation entry point for the shell: wrap the address book,
//!   the user preferences, the active view filters, the tag-note map and
//!   the widget slot behind one contract.
//! - Recompute the filtered views synchronously on every read.
//!
//! # Invariants
//! - Filtered views are projections of the backing book: after any mutation
//!   through this manager, a fresh read reflects it.
//! - The tag-note map is rebuilt only by `initialise_tag_note_map`; note
//!   mutations leave it stale on purpose (cost stays with the caller).
//! - Manager equality compares the book, the preferences and the active
//!   client filter, nothing else.

use crate::model::address_book::{AddressBook, ModelResult};
use crate::model::client::Client;
use crate::model::country::Country;
use crate::model::filter::{ClientFilter, ClientNoteFilter, CountryNoteFilter};
use crate::model::note::Note;
use crate::model::prefs::{GuiSettings, UserPrefs};
use crate::model::tag_note_map::TagNoteMap;
use log::info;
use std::path::{Path, PathBuf};

/// Opaque display payload handed through to the shell's widget box.
///
/// The manager stores whatever it is given, last write wins, no validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetContent {
    pub header: String,
    pub divs: Vec<String>,
}

/// The one-per-application model context handed to the command layer.
#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    address_book: AddressBook,
    user_prefs: UserPrefs,
    client_filter: ClientFilter,
    client_note_filter: ClientNoteFilter,
    country_note_filter: CountryNoteFilter,
    tag_note_map: TagNoteMap,
    widget_content: WidgetContent,
}

impl ModelManager {
    /// Creates a manager over an empty book and default preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager over loaded data, with the show-all filters active.
    pub fn with_data(address_book: AddressBook, user_prefs: UserPrefs) -> Self {
        Self {
            address_book,
            user_prefs,
            ..Self::default()
        }
    }

    // --- preferences -----------------------------------------------------

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn set_user_prefs(&mut self, user_prefs: UserPrefs) {
        self.user_prefs = user_prefs;
    }

    pub fn gui_settings(&self) -> GuiSettings {
        self.user_prefs.gui_settings()
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.user_prefs.set_gui_settings(gui_settings);
    }

    pub fn address_book_file_path(&self) -> &Path {
        self.user_prefs.address_book_file_path()
    }

    pub fn set_address_book_file_path(&mut self, path: PathBuf) {
        self.user_prefs.set_address_book_file_path(path);
    }

    // --- address book ----------------------------------------------------

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Replaces the whole book: clear, then bulk insert in the other
    /// book's order.
    pub fn set_address_book(&mut self, address_book: AddressBook) {
        self.address_book.reset_data(address_book);
        info!(
            "event=book_reset module=model status=ok clients={} countries={}",
            self.address_book.client_list().len(),
            self.address_book.country_list().len()
        );
    }

    pub fn has_client(&self, client: &Client) -> bool {
        self.address_book.has_client(client)
    }

    pub fn add_client(&mut self, client: Client) -> ModelResult<()> {
        self.address_book.add_client(client)
    }

    pub fn delete_client(&mut self, target: &Client) -> ModelResult<()> {
        self.address_book.remove_client(target)
    }

    pub fn set_client(&mut self, target: &Client, edited: Client) -> ModelResult<()> {
        self.address_book.set_client(target, edited)
    }

    // --- client notes ----------------------------------------------------

    pub fn has_client_note(&self, client: &Client, note: &Note) -> bool {
        self.address_book.has_client_note(client, note)
    }

    /// Adds a note to the matching client's set (silent set-dedupe).
    ///
    /// Does not touch the tag-note map; callers that rely on tag lookups
    /// afterwards must call `initialise_tag_note_map`.
    pub fn add_client_note(&mut self, client: &Client, note: Note) -> ModelResult<()> {
        self.address_book.add_client_note(client, note)?;
        Ok(())
    }

    /// Deletes a note from the matching client's set. Same staleness
    /// contract as `add_client_note`.
    pub fn delete_client_note(&mut self, client: &Client, note: &Note) -> ModelResult<()> {
        self.address_book.remove_client_note(client, note)
    }

    // --- country notes ---------------------------------------------------

    pub fn has_country_note(&self, country: &Country, note: &Note) -> bool {
        self.address_book.has_country_note(country, note)
    }

    /// Adds a note to the country's set, creating the country lazily by
    /// code (silent set-dedupe).
    pub fn add_country_note(&mut self, country: &Country, note: Note) {
        self.address_book.add_country_note(country, note);
    }

    pub fn delete_country_note(&mut self, country: &Country, note: &Note) -> ModelResult<()> {
        self.address_book.remove_country_note(country, note)
    }

    // --- filtered views --------------------------------------------------

    /// The live filtered client list, recomputed from the backing book on
    /// every call. Returned references keep the view read-only.
    pub fn filtered_client_list(&self) -> Vec<&Client> {
        self.address_book
            .client_list()
            .iter()
            .filter(|client| self.client_filter.matches(client))
            .collect()
    }

    /// Replaces the active client filter; membership changes immediately.
    pub fn update_filtered_client_list(&mut self, filter: ClientFilter) {
        self.client_filter = filter;
    }

    pub fn client_filter(&self) -> &ClientFilter {
        &self.client_filter
    }

    /// The live filtered client-note view across all clients.
    pub fn filtered_client_notes(&self) -> Vec<&Note> {
        self.address_book
            .client_list()
            .iter()
            .filter(|client| self.client_note_filter.matches(client))
            .flat_map(|client| client.notes())
            .collect()
    }

    pub fn update_filtered_client_note_list(&mut self, filter: ClientNoteFilter) {
        self.client_note_filter = filter;
    }

    /// The live filtered country-note view across all countries.
    pub fn filtered_country_notes(&self) -> Vec<&Note> {
        self.address_book
            .country_list()
            .iter()
            .filter(|country| self.country_note_filter.matches(country))
            .flat_map(|country| country.notes())
            .collect()
    }

    pub fn update_filtered_country_note_list(&mut self, filter: CountryNoteFilter) {
        self.country_note_filter = filter;
    }

    // --- tag-note map ----------------------------------------------------

    /// The current map. Never builds implicitly: before the first
    /// `initialise_tag_note_map` call this is the empty map.
    pub fn tag_note_map(&self) -> &TagNoteMap {
        &self.tag_note_map
    }

    /// Full rebuild from every note currently reachable in the book.
    pub fn initialise_tag_note_map(&mut self) {
        self.tag_note_map = TagNoteMap::rebuild_from(&self.address_book);
    }

    // --- widget slot -----------------------------------------------------

    pub fn set_widget_content(&mut self, content: WidgetContent) {
        self.widget_content = content;
    }

    pub fn widget_content(&self) -> &WidgetContent {
        &self.widget_content
    }
}

/// Manager equality is filter-sensitive on purpose: two managers over equal
/// books and preferences compare unequal while their active client filters
/// differ. Callers comparing managers reset the filter first.
impl PartialEq for ModelManager {
    fn eq(&self, other: &Self) -> bool {
        self.address_book == other.address_book
            && self.user_prefs == other.user_prefs
            && self.client_filter == other.client_filter
    }
}

impl Eq for ModelManager {}
