use std::cell::{Cell, RefCell};

use calorie_tracker::core::store::{KeyValueStorage, MemoryStorage, Store, TARGET_KEY};
use calorie_tracker::models::target::DailyTarget;

// ── load ────────────────────────────────────────────────────────────────────

#[test]
fn test_load_missing_record_uses_initial_and_writes_it() {
    let storage = MemoryStorage::new();
    let store = Store::load(&storage, TARGET_KEY, DailyTarget::default);
    assert_eq!(*store.get(), DailyTarget::default());

    let raw = storage.raw(TARGET_KEY).expect("initial value persisted");
    let back: DailyTarget = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, DailyTarget::default());
}

#[test]
fn test_load_reads_existing_record() {
    let storage = MemoryStorage::new();
    storage
        .set(
            TARGET_KEY,
            r#"{"kcal":1800.0,"protein_g":140.0,"carbs_g":150.0,"fat_g":55.0}"#,
        )
        .unwrap();
    let store = Store::load(&storage, TARGET_KEY, DailyTarget::default);
    assert_eq!(store.get().kcal, 1800.0);
    assert_eq!(store.get().protein_g, 140.0);
}

#[test]
fn test_load_corrupt_record_falls_back() {
    let storage = MemoryStorage::new();
    storage.set(TARGET_KEY, "{not json").unwrap();
    let store = Store::load(&storage, TARGET_KEY, DailyTarget::default);
    assert_eq!(*store.get(), DailyTarget::default());
}

#[test]
fn test_load_unreadable_storage_falls_back() {
    let storage = MemoryStorage::new();
    storage.set_failing(true);
    let store = Store::load(&storage, TARGET_KEY, DailyTarget::default);
    assert_eq!(*store.get(), DailyTarget::default());
}

// ── write-on-mutation ───────────────────────────────────────────────────────

#[test]
fn test_update_persists() {
    let storage = MemoryStorage::new();
    let mut store = Store::load(&storage, TARGET_KEY, DailyTarget::default);
    store.update(|t| t.kcal = 1750.0);

    let reloaded = Store::load(&storage, TARGET_KEY, DailyTarget::default);
    assert_eq!(reloaded.get().kcal, 1750.0);
}

#[test]
fn test_failed_write_keeps_in_memory_state() {
    let storage = MemoryStorage::new();
    let mut store = Store::load(&storage, TARGET_KEY, DailyTarget::default);
    storage.set_failing(true);

    store.update(|t| t.fat_g = 70.0);
    assert_eq!(store.get().fat_g, 70.0);
    assert!(!store.persist());

    // The stored record still has the old value.
    let raw = storage.raw(TARGET_KEY).unwrap();
    let stored: DailyTarget = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.fat_g, 60.0);

    storage.set_failing(false);
    assert!(store.persist());
}

#[test]
fn test_set_replaces_value() {
    let storage = MemoryStorage::new();
    let mut store = Store::load(&storage, TARGET_KEY, DailyTarget::default);
    let t = DailyTarget {
        kcal: 0.0,
        protein_g: 0.0,
        carbs_g: 0.0,
        fat_g: 0.0,
    };
    store.set(t);
    assert_eq!(*store.get(), t);
    assert_eq!(store.key(), TARGET_KEY);
}

// ── notification ────────────────────────────────────────────────────────────

#[test]
fn test_subscribers_see_every_mutation() {
    let storage = MemoryStorage::new();
    let calls = Cell::new(0);
    let seen = RefCell::new(Vec::new());

    let mut store = Store::load(&storage, TARGET_KEY, DailyTarget::default);
    store.subscribe(|_| calls.set(calls.get() + 1));
    store.subscribe(|t: &DailyTarget| seen.borrow_mut().push(t.kcal));

    store.update(|t| t.kcal = 1900.0);
    store.set(DailyTarget::default());

    assert_eq!(calls.get(), 2);
    assert_eq!(*seen.borrow(), vec![1900.0, 2000.0]);
}

#[test]
fn test_subscribers_notified_even_when_write_fails() {
    let storage = MemoryStorage::new();
    let calls = Cell::new(0);
    let mut store = Store::load(&storage, TARGET_KEY, DailyTarget::default);
    store.subscribe(|_| calls.set(calls.get() + 1));

    storage.set_failing(true);
    store.update(|t| t.kcal = 1.0);
    assert_eq!(calls.get(), 1);
}
