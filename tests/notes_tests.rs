mod common;
use campus360::db::{DbPool, KeyValueStore, MemoryStore};
use campus360::errors::StoreError;
use campus360::notes::{NoteStore, note_key};
use common::setup_test_db;

#[test]
fn test_note_keys() {
    assert_eq!(note_key("notes-area"), "campus_note_notes-area");
    assert_eq!(note_key("  class-notes "), "campus_note_class-notes");
    assert_eq!(note_key(""), "campus_note");
}

#[test]
fn test_missing_note_is_empty() {
    let notes = NoteStore::new(MemoryStore::new());
    assert_eq!(notes.load("notes"), "");
}

#[test]
fn test_save_replace_and_remove() {
    let mut notes = NoteStore::new(MemoryStore::new());
    notes.save("notes", "bring lab coat").unwrap();
    assert_eq!(notes.load("notes"), "bring lab coat");

    notes.save("notes", "bring goggles").unwrap();
    assert_eq!(notes.load("notes"), "bring goggles");

    notes.remove("notes").unwrap();
    assert_eq!(notes.load("notes"), "");
}

#[test]
fn test_save_reports_quota_errors() {
    let mut notes = NoteStore::new(MemoryStore::with_quota(32));
    let err = notes.save("notes", &"x".repeat(64)).unwrap_err();
    assert!(matches!(err, StoreError::QuotaExceeded { .. }));
    assert_eq!(notes.load("notes"), "");
}

#[test]
fn test_notes_persist_in_sqlite() {
    let db_path = setup_test_db("notes_persist");

    {
        let mut notes = NoteStore::new(DbPool::new(&db_path).expect("open db"));
        notes.save("class-notes", "Quiz on Friday, chapter 3").unwrap();
    }

    let pool = DbPool::new(&db_path).expect("reopen db");
    assert_eq!(
        pool.get("campus_note_class-notes").unwrap().as_deref(),
        Some("Quiz on Friday, chapter 3")
    );
    assert_eq!(pool.keys().unwrap(), ["campus_note_class-notes"]);

    let notes = NoteStore::new(pool);
    assert_eq!(notes.load("class-notes"), "Quiz on Friday, chapter 3");
}

#[test]
fn test_memory_store_quota_accounts_for_replaced_value() {
    let mut kv = MemoryStore::with_quota(20);
    kv.set("k", &"a".repeat(19)).unwrap();
    // Replacing the value frees the old bytes first.
    kv.set("k", &"b".repeat(19)).unwrap();
    assert_eq!(kv.used_bytes(), 20);
    assert!(kv.set("other", "x").is_err());
    assert_eq!(kv.len(), 1);

    kv.clear().unwrap();
    assert!(kv.is_empty());
}
