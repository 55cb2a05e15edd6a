use gridsync_storage::{FileLayoutStore, LayoutStore, MemoryLayoutStore, StorageError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const LAYOUT: &str = r#"{"revision":1,"items":[]}"#;

fn exercise(store: &mut dyn LayoutStore) {
    assert_eq!(store.load("main").unwrap(), None);
    assert!(!store.contains("main").unwrap());

    store.save("main", LAYOUT).unwrap();
    assert_eq!(store.load("main").unwrap().as_deref(), Some(LAYOUT));
    assert!(store.contains("main").unwrap());

    store.save("main", "[]").unwrap();
    assert_eq!(store.load("main").unwrap().as_deref(), Some("[]"));

    assert!(store.remove("main").unwrap());
    assert!(!store.remove("main").unwrap());
    assert_eq!(store.load("main").unwrap(), None);
}

fn rejects_bad_keys(store: &mut dyn LayoutStore) {
    for key in ["", ".", "..", "a/b", "a\\b", "../escape"] {
        let err = store.save(key, LAYOUT).unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)), "key {key:?}");
        assert!(matches!(store.load(key), Err(StorageError::InvalidKey(_))));
    }
}

// ── Memory store ─────────────────────────────────────────────────

#[test]
fn memory_store_round_trip() {
    exercise(&mut MemoryLayoutStore::new());
}

#[test]
fn memory_store_rejects_bad_keys() {
    rejects_bad_keys(&mut MemoryLayoutStore::new());
}

#[test]
fn memory_stores_are_independent() {
    let mut first = MemoryLayoutStore::new();
    let second = MemoryLayoutStore::new();
    first.save("main", LAYOUT).unwrap();

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(second.load("main").unwrap(), None);
}

#[test]
fn memory_store_lists_keys() {
    let mut store = MemoryLayoutStore::new();
    store.save("a", LAYOUT).unwrap();
    store.save("b", LAYOUT).unwrap();

    let mut keys: Vec<&str> = store.keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["a", "b"]);
}

// ── File store ───────────────────────────────────────────────────

#[test]
fn file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    exercise(&mut FileLayoutStore::open(dir.path()).unwrap());
}

#[test]
fn file_store_rejects_bad_keys() {
    let dir = TempDir::new().unwrap();
    rejects_bad_keys(&mut FileLayoutStore::open(dir.path()).unwrap());
}

#[test]
fn file_store_writes_key_dot_json() {
    let dir = TempDir::new().unwrap();
    let mut store = FileLayoutStore::open(dir.path()).unwrap();
    store.save("dashboard", LAYOUT).unwrap();

    let path = dir.path().join("dashboard.json");
    assert_eq!(store.path_for("dashboard").unwrap(), path);
    assert_eq!(std::fs::read_to_string(path).unwrap(), LAYOUT);
    assert!(!dir.path().join("dashboard.json.tmp").exists());
}

#[test]
fn file_store_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("layouts");
    let mut store = FileLayoutStore::open(&root).unwrap();
    store.save("x", LAYOUT).unwrap();

    assert!(root.join("x.json").is_file());
    assert_eq!(store.root(), root.as_path());
}

#[test]
fn file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    FileLayoutStore::open(dir.path())
        .unwrap()
        .save("main", LAYOUT)
        .unwrap();

    let reopened = FileLayoutStore::open(dir.path()).unwrap();
    assert_eq!(reopened.load("main").unwrap().as_deref(), Some(LAYOUT));
}

#[test]
fn file_store_lists_only_json_files() {
    let dir = TempDir::new().unwrap();
    let mut store = FileLayoutStore::open(dir.path()).unwrap();
    store.save("b", LAYOUT).unwrap();
    store.save("a", LAYOUT).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();
    std::fs::create_dir(dir.path().join("sub.json")).unwrap();

    assert_eq!(store.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn boxed_store_delegates() {
    let mut store: Box<dyn LayoutStore> = Box::new(MemoryLayoutStore::new());
    store.save("k", LAYOUT).unwrap();
    assert!(store.contains("k").unwrap());
}
