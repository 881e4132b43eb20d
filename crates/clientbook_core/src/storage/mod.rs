//! Persistence mapping and file driver.
//!
//! # Responsibility
//! - Convert the aggregate to and from its JSON document form.
//! - Read and write the document files with whole-file semantics.
//!
//! # Invariants
//! - Loading validates every field constraint before a book is produced.
//! - The document round-trips the aggregate losslessly.

pub mod json_file;
pub mod serializable;
