//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `clientbook_core` linkage.
//! - Report the contents of an address-book file without any shell wiring.

use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("clientbook_core version={}", clientbook_core::core_version());

    let Some(path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    match clientbook_core::read_address_book(Path::new(&path)) {
        Ok(Some(book)) => {
            println!(
                "loaded {}: clients={} countries={}",
                path,
                book.client_list().len(),
                book.country_list().len()
            );
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("no address book at {path}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to load {path}: {err}");
            ExitCode::FAILURE
        }
    }
}
