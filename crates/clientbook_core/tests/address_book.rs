use clientbook_core::{
    Address, AddressBook, Client, Country, CountryCode, Email, ModelError, Name, Note, Phone,
};
use std::collections::BTreeSet;

fn client(name: &str, phone: &str, email: &str, country: &str) -> Client {
    Client::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(email).unwrap(),
        CountryCode::new(country).unwrap(),
        Address::new("1 Example Street").unwrap(),
        BTreeSet::new(),
    )
}

fn alice() -> Client {
    client("Alice Pauline", "94351253", "alice@example.com", "SG")
}

fn benson() -> Client {
    client("Benson Meier", "98765432", "johnd@example.com", "DE")
}

#[test]
fn add_then_has_then_remove_round_trip() {
    let mut book = AddressBook::new();
    assert!(!book.has_client(&alice()));

    book.add_client(alice()).unwrap();
    assert!(book.has_client(&alice()));

    book.remove_client(&alice()).unwrap();
    assert!(!book.has_client(&alice()));
}

#[test]
fn duplicate_add_fails_and_leaves_the_list_unchanged() {
    let mut book = AddressBook::new();
    book.add_client(alice()).unwrap();

    let error = book.add_client(alice()).unwrap_err();
    assert_eq!(error, ModelError::DuplicateClient);
    assert_eq!(book.client_list().len(), 1);
}

#[test]
fn add_rejects_same_identity_clients_with_different_details() {
    let mut book = AddressBook::new();
    book.add_client(alice()).unwrap();

    // Same name, email and country; only the phone differs. Weak identity
    // still says this is Alice, so the add is a duplicate.
    let same_identity = client("Alice Pauline", "80000000", "alice@example.com", "SG");
    assert!(alice().is_same_client(&same_identity));
    assert!(book.has_client(&same_identity));

    let error = book.add_client(same_identity).unwrap_err();
    assert_eq!(error, ModelError::DuplicateClient);
    assert_eq!(book.client_list().len(), 1);
}

#[test]
fn remove_of_absent_client_reports_not_found() {
    let mut book = AddressBook::new();
    let error = book.remove_client(&alice()).unwrap_err();
    assert_eq!(error, ModelError::ClientNotFound);
}

#[test]
fn set_client_replaces_in_place_and_keeps_order() {
    let mut book = AddressBook::new();
    book.add_client(alice()).unwrap();
    book.add_client(benson()).unwrap();

    let edited = client("Alice Pauline", "80000000", "alice@example.com", "SG");
    book.set_client(&alice(), edited.clone()).unwrap();

    assert_eq!(book.client_list(), [edited, benson()]);
}

#[test]
fn set_client_rejects_collision_with_a_different_entry() {
    let mut book = AddressBook::new();
    book.add_client(alice()).unwrap();
    book.add_client(benson()).unwrap();

    let error = book.set_client(&alice(), benson()).unwrap_err();
    assert_eq!(error, ModelError::DuplicateClient);

    // Replacing a client with itself is a no-op, not a collision.
    book.set_client(&alice(), alice()).unwrap();
    assert_eq!(book.client_list().len(), 2);
}

#[test]
fn set_client_requires_the_target_to_exist() {
    let mut book = AddressBook::new();
    let error = book.set_client(&alice(), benson()).unwrap_err();
    assert_eq!(error, ModelError::ClientNotFound);
    assert!(book.client_list().is_empty());
}

#[test]
fn country_is_created_lazily_on_first_note() {
    let mut book = AddressBook::new();
    let country = Country::new(CountryCode::new("SG").unwrap());
    let note = Note::new("generic note").unwrap();

    assert!(!book.has_country_note(&country, &note));
    assert!(book.add_country_note(&country, note.clone()));
    assert!(book.has_country_note(&country, &note));

    // An independently built value for the same code finds the same entry.
    let fresh = Country::new(CountryCode::new("SG").unwrap());
    assert!(book.has_country_note(&fresh, &note));
    let stored = book.country_by_code(fresh.code()).unwrap();
    assert_eq!(stored, &fresh);
    assert_eq!(stored.notes(), [note]);
    assert_eq!(book.country_list().len(), 1);
}

#[test]
fn country_note_add_dedupes_silently() {
    let mut book = AddressBook::new();
    let country = Country::new(CountryCode::new("MY").unwrap());
    let note = Note::new("bring cash").unwrap();

    assert!(book.add_country_note(&country, note.clone()));
    assert!(!book.add_country_note(&country, note.clone()));
    assert_eq!(book.country_by_code(country.code()).unwrap().notes().len(), 1);
}

#[test]
fn removing_the_last_country_note_keeps_the_country() {
    let mut book = AddressBook::new();
    let country = Country::new(CountryCode::new("JP").unwrap());
    let note = Note::new("bow when greeting").unwrap();
    book.add_country_note(&country, note.clone());

    book.remove_country_note(&country, &note).unwrap();
    assert!(book.country_by_code(country.code()).is_some());

    let error = book.remove_country_note(&country, &note).unwrap_err();
    assert_eq!(error, ModelError::CountryNoteNotFound);
}

#[test]
fn client_note_target_is_resolved_by_weak_identity() {
    let mut book = AddressBook::new();
    book.add_client(alice()).unwrap();
    let note = Note::new("this be a client note").unwrap();

    // The stored client gains the note; the caller's handle stays usable
    // because weak identity ignores the note set.
    assert!(book.add_client_note(&alice(), note.clone()).unwrap());
    assert!(book.has_client_note(&alice(), &note));
    assert!(!book.add_client_note(&alice(), note.clone()).unwrap());

    book.remove_client_note(&alice(), &note).unwrap();
    assert!(!book.has_client_note(&alice(), &note));
    let error = book.remove_client_note(&alice(), &note).unwrap_err();
    assert_eq!(error, ModelError::ClientNoteNotFound);
}

#[test]
fn client_note_ops_fail_for_unknown_clients() {
    let mut book = AddressBook::new();
    let note = Note::new("orphan note").unwrap();
    let error = book.add_client_note(&alice(), note.clone()).unwrap_err();
    assert_eq!(error, ModelError::ClientNotFound);
    assert!(!book.has_client_note(&alice(), &note));
}

#[test]
fn reset_data_replaces_everything_preserving_order() {
    let mut book = AddressBook::new();
    book.add_client(alice()).unwrap();

    let mut other = AddressBook::new();
    other.add_client(benson()).unwrap();
    other.add_client(alice()).unwrap();
    let country = Country::new(CountryCode::new("DE").unwrap());
    other.add_country_note(&country, Note::new("cash preferred").unwrap());

    book.reset_data(other.clone());
    assert_eq!(book, other);
    assert_eq!(book.client_list(), [benson(), alice()]);
}
