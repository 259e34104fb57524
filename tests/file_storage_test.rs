use phonebook::api::{LoadSource, PhonebookApi};
use phonebook::model::{ContactId, NewContact};
use phonebook::seed::seed_contacts;
use phonebook::store::codec::decode_contacts;
use phonebook::store::fs::FileStorage;
use phonebook::store::Storage;
use std::fs;
use tempfile::TempDir;

fn storage(dir: &TempDir) -> FileStorage {
    FileStorage::new(dir.path().to_path_buf())
}

#[test]
fn test_session_round_trip_through_files() {
    let dir = TempDir::new().unwrap();

    let mut api = PhonebookApi::initialize(storage(&dir));
    assert_eq!(api.source(), LoadSource::Seed);
    api.add_contact(NewContact::new("Jacob Mercer", "555-12-34"))
        .unwrap();
    api.delete_contact(&ContactId::new("id-2"));
    let expected = api.contacts().to_vec();

    let reloaded = PhonebookApi::initialize(storage(&dir));
    assert_eq!(reloaded.source(), LoadSource::Storage);
    assert_eq!(reloaded.contacts(), expected.as_slice());
}

#[test]
fn test_persisted_format_is_a_json_array() {
    let dir = TempDir::new().unwrap();
    let mut api = PhonebookApi::initialize(storage(&dir));
    api.add_contact(NewContact::new("Jacob Mercer", "555-12-34"))
        .unwrap();

    let raw = fs::read_to_string(dir.path().join("contacts.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), seed_contacts().len() + 1);
    assert_eq!(entries[0]["name"], "Jacob Mercer");
    assert!(entries[0]["id"].is_string());
    assert_eq!(entries[1]["id"], "id-1");
}

#[test]
fn test_reads_lists_with_numeric_ids() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("contacts.json"),
        r#"[{"id": 1700000000123, "name": "Ann", "number": "555-12-34"}]"#,
    )
    .unwrap();

    let mut api = PhonebookApi::initialize(storage(&dir));
    assert_eq!(api.contacts().len(), 1);
    assert_eq!(api.contacts()[0].id.as_str(), "1700000000123");

    api.delete_contact(&ContactId::new("1700000000123"));
    let saved = decode_contacts(&storage(&dir).read().unwrap().unwrap()).unwrap();
    assert!(saved.is_empty());
}

#[test]
fn test_wrong_shape_falls_back_to_seed() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("contacts.json"), r#"{"contacts": []}"#).unwrap();

    let api = PhonebookApi::initialize(storage(&dir));
    assert_eq!(api.source(), LoadSource::Seed);
    assert_eq!(api.contacts(), seed_contacts().as_slice());
}

#[test]
fn test_unwritable_location_keeps_session_state() {
    let dir = TempDir::new().unwrap();
    // A regular file where the data directory should be makes every write fail.
    let blocker = dir.path().join("blocked");
    fs::write(&blocker, "").unwrap();

    let mut api = PhonebookApi::initialize(FileStorage::new(blocker.join("data")));
    let result = api
        .add_contact(NewContact::new("Jacob Mercer", "555-12-34"))
        .unwrap();

    assert_eq!(api.contacts()[0].name, "Jacob Mercer");
    assert!(result
        .messages
        .iter()
        .any(|m| m.content.starts_with("Changes could not be saved")));
}
