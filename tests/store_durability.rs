//! FileStore snapshot durability tests.

use rolodex::person::Person;
use rolodex::store::{FileStore, PersonStore, StoreError};
use tempfile::TempDir;

#[test]
fn test_rows_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("persons.db");

    let store = FileStore::open(&path).unwrap();
    let saved = store
        .save(Person::new("fahd", "casablanca", "212-234566789"))
        .unwrap();
    let id = saved.id.unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    let found = reopened.find_by_id(id).unwrap().unwrap();
    assert_eq!(found.name, "fahd");
    assert_eq!(found.city, "casablanca");
}

#[test]
fn test_id_counter_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("persons.db");

    let store = FileStore::open(&path).unwrap();
    store.save(Person::new("a", "x", "1")).unwrap();
    let second = store.save(Person::new("b", "y", "2")).unwrap();
    store.delete_by_id(second.id.unwrap()).unwrap();
    drop(store);

    // A fresh insert after reopen must not reuse the deleted id's slot
    // in a way that collides with row one.
    let reopened = FileStore::open(&path).unwrap();
    let third = reopened.save(Person::new("c", "z", "3")).unwrap();
    assert_eq!(third.id, Some(3));
    assert_eq!(reopened.find_all().unwrap().len(), 2);
}

#[test]
fn test_delete_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("persons.db");

    let store = FileStore::open(&path).unwrap();
    let saved = store.save(Person::new("a", "x", "1")).unwrap();
    store.delete_by_id(saved.id.unwrap()).unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.find_by_id(saved.id.unwrap()).unwrap(), None);
}

#[test]
fn test_corrupted_snapshot_refuses_to_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("persons.db");

    let store = FileStore::open(&path).unwrap();
    store.save(Person::new("a", "x", "1")).unwrap();
    drop(store);

    let mut content = std::fs::read(&path).unwrap();
    let last = content.len() - 1;
    content[last] ^= 0x01;
    std::fs::write(&path, content).unwrap();

    let result = FileStore::open(&path);
    assert!(matches!(result, Err(StoreError::Corrupted(_))));
}
