//! Contract tests run against every payload store implementation.

use bindiff_storage::{FileStore, InMemoryStore, PayloadStore, Slot, StorageError, StoreConfig};
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

/// Runs `check` against a fresh in-memory store and a fresh file store.
fn for_each_store(check: impl Fn(&dyn PayloadStore)) {
    let memory = InMemoryStore::new();
    check(&memory);

    let dir = TempDir::new().unwrap();
    let file = FileStore::open(dir.path(), StoreConfig::new().sync_on_write(false)).unwrap();
    check(&file);
}

#[test]
fn get_without_put_is_not_found() {
    for_each_store(|store| {
        let result = store.get("never-written");
        assert!(matches!(result, Err(StorageError::NotFound { .. })));
    });
}

#[test]
fn left_only_defaults_right_to_empty() {
    for_each_store(|store| {
        store.put("id", Slot::Left, "x").unwrap();
        assert_eq!(store.get("id").unwrap(), ("x".to_string(), String::new()));
    });
}

#[test]
fn right_only_defaults_left_to_empty() {
    for_each_store(|store| {
        store.put("id", Slot::Right, "y").unwrap();
        assert_eq!(store.get("id").unwrap(), (String::new(), "y".to_string()));
    });
}

#[test]
fn ids_do_not_interfere() {
    for_each_store(|store| {
        store.put("a", Slot::Left, "a-left").unwrap();
        store.put("b", Slot::Left, "b-left").unwrap();
        store.put("a", Slot::Right, "a-right").unwrap();

        assert_eq!(
            store.get("a").unwrap(),
            ("a-left".to_string(), "a-right".to_string())
        );
        assert_eq!(store.get("b").unwrap(), ("b-left".to_string(), String::new()));
        assert_eq!(store.ids().unwrap(), vec!["a", "b"]);
    });
}

#[test]
fn named_slots_parse_case_insensitively() {
    for_each_store(|store| {
        store.put_named("id", "LEFT", "upper").unwrap();
        store.put_named("id", "right", "lower").unwrap();
        assert_eq!(
            store.get("id").unwrap(),
            ("upper".to_string(), "lower".to_string())
        );
        assert!(matches!(
            store.put_named("id", "both", "x"),
            Err(StorageError::InvalidSlot { .. })
        ));
    });
}

#[test]
fn unicode_and_binary_looking_content_survives() {
    for_each_store(|store| {
        let content = "AAAA-\u{00e9}\u{4e2d}=\n\t\0";
        store.put("u", Slot::Left, content).unwrap();
        assert_eq!(store.get("u").unwrap().0, content);
    });
}

#[test]
fn file_store_concurrent_slot_writes_keep_both() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(
        FileStore::open(dir.path(), StoreConfig::new().sync_on_write(false)).unwrap(),
    );

    for round in 0..8 {
        let id = format!("race-{round}");
        let handles: Vec<_> = Slot::ALL
            .into_iter()
            .map(|slot| {
                let store = Arc::clone(&store);
                let id = id.clone();
                thread::spawn(move || store.put(&id, slot, slot.as_str()).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(
            store.get(&id).unwrap(),
            ("left".to_string(), "right".to_string())
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn repeated_put_is_idempotent(id in "[a-z0-9]{1,12}", x in ".{0,40}", y in ".{0,40}") {
        for_each_store(|store| {
            store.put(&id, Slot::Right, &y).unwrap();
            store.put(&id, Slot::Left, &x).unwrap();
            let first = store.get(&id).unwrap();
            store.put(&id, Slot::Left, &x).unwrap();
            assert_eq!(store.get(&id).unwrap(), first);
        });
    }

    #[test]
    fn slot_write_order_does_not_matter(
        id in "[a-z0-9]{1,12}",
        x in ".{0,40}",
        y in ".{0,40}",
    ) {
        for_each_store(|store| {
            let forward = format!("{id}-fwd");
            store.put(&forward, Slot::Left, &x).unwrap();
            store.put(&forward, Slot::Right, &y).unwrap();

            let backward = format!("{id}-bwd");
            store.put(&backward, Slot::Right, &y).unwrap();
            store.put(&backward, Slot::Left, &x).unwrap();

            assert_eq!(store.get(&forward).unwrap(), (x.clone(), y.clone()));
            assert_eq!(store.get(&backward).unwrap(), (x.clone(), y.clone()));
        });
    }
}
