//! In-memory address-book model.
//!
//! # Responsibility
//! - Define the entity layer, the aggregate, the derived views and the
//!   model manager facade consumed by the shell.
//!
//! # Invariants
//! - All field values are validated at construction.
//! - Derived structures (tag-note map, filtered views) are rebuildable from
//!   the aggregate at any time.

pub mod address_book;
pub mod client;
pub mod country;
pub mod fields;
pub mod filter;
pub mod manager;
pub mod note;
pub mod prefs;
pub mod tag_note_map;
