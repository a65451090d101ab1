use pagepad_store::{MemoryBackend, SqliteBackend, Store, StoreError};

// ============================================================================
// Raw string access
// ============================================================================

#[test]
fn test_raw_round_trip() {
    let store = Store::new(MemoryBackend::new());

    store.set_raw("theme", "dark").unwrap();
    assert_eq!(store.get_raw("theme").unwrap(), Some("dark".to_string()));
}

#[test]
fn test_absent_key_is_none() {
    let store = Store::new(MemoryBackend::new());

    assert_eq!(store.get_raw("count").unwrap(), None);
}

#[test]
fn test_set_overwrites() {
    let store = Store::new(MemoryBackend::new());

    store.set_raw("count", "1").unwrap();
    store.set_raw("count", "2").unwrap();
    assert_eq!(store.get_raw("count").unwrap(), Some("2".to_string()));
}

#[test]
fn test_delete() {
    let store = Store::new(MemoryBackend::new());

    store.set_raw("theme", "light").unwrap();
    store.delete("theme").unwrap();
    assert_eq!(store.get_raw("theme").unwrap(), None);
}

// ============================================================================
// Typed access
// ============================================================================

#[test]
fn test_typed_round_trip_preserves_order() {
    let store = Store::new(MemoryBackend::new());
    let items = vec!["buy milk".to_string(), "walk dog".to_string()];

    store.set("todos", &items).unwrap();
    assert_eq!(store.get::<Vec<String>>("todos").unwrap(), Some(items));
}

#[test]
fn test_typed_value_is_stored_as_json() {
    let store = Store::new(MemoryBackend::new());

    store.set("todos", &vec!["a".to_string()]).unwrap();
    assert_eq!(store.get_raw("todos").unwrap(), Some(r#"["a"]"#.to_string()));
}

#[test]
fn test_get_or_returns_default_when_absent() {
    let store = Store::new(MemoryBackend::new());

    let items: Vec<String> = store.get_or("todos", Vec::new()).unwrap();
    assert!(items.is_empty());
}

#[test]
fn test_malformed_value_is_deserialization_error() {
    let store = Store::new(MemoryBackend::new());

    store.set_raw("todos", "not json at all").unwrap();
    match store.get::<Vec<String>>("todos") {
        Err(StoreError::Deserialization(_)) => {}
        other => panic!("expected deserialization error, got {other:?}"),
    }
}

// ============================================================================
// SQLite backend
// ============================================================================

#[test]
fn test_sqlite_round_trip() {
    let store = Store::new(SqliteBackend::in_memory().unwrap());

    store.set_raw("theme", "dark").unwrap();
    assert_eq!(store.get_raw("theme").unwrap(), Some("dark".to_string()));
    assert_eq!(store.get_raw("missing").unwrap(), None);
}

#[test]
fn test_sqlite_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");

    {
        let store = Store::new(SqliteBackend::new(&path).unwrap());
        store.set_raw("count", "7").unwrap();
        store.set("todos", &vec!["persist me".to_string()]).unwrap();
    }

    let store = Store::new(SqliteBackend::new(&path).unwrap());
    assert_eq!(store.get_raw("count").unwrap(), Some("7".to_string()));
    assert_eq!(
        store.get::<Vec<String>>("todos").unwrap(),
        Some(vec!["persist me".to_string()])
    );
}

#[test]
fn test_sqlite_delete_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");

    {
        let store = Store::new(SqliteBackend::new(&path).unwrap());
        store.set_raw("theme", "dark").unwrap();
        store.delete("theme").unwrap();
    }

    let store = Store::new(SqliteBackend::new(&path).unwrap());
    assert_eq!(store.get_raw("theme").unwrap(), None);
}

#[test]
fn test_store_handle_clones_share_backend() {
    let store = Store::new(MemoryBackend::new());
    let clone = store.clone();

    store.set_raw("count", "3").unwrap();
    assert_eq!(clone.get_raw("count").unwrap(), Some("3".to_string()));
}
