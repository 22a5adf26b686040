use super::*;
use crate::progress::storage::{MemoryStorage, UnavailableStorage};

const KEY: &str = "roadmapProgress";

fn seeded(raw: &str) -> ProgressStore<MemoryStorage> {
    ProgressStore::open(MemoryStorage::new().with_entry(KEY, raw), KEY, 5)
}

#[test]
fn empty_storage_loads_all_false() {
    let store = ProgressStore::open(MemoryStorage::new(), KEY, 5);
    assert_eq!(store.state().as_slice(), &[false; 5]);
    assert_eq!(store.next_index(), 0);
}

#[test]
fn malformed_or_foreign_content_falls_back() {
    for raw in ["not json", "{\"a\":1}", "[1,2,3,4,5]", "[true,false]", "null"] {
        let store = seeded(raw);
        assert_eq!(store.state(), &ProgressState::all_false(5), "{raw}");
    }
}

#[test]
fn unavailable_medium_falls_back_and_keeps_memory_state() {
    let mut store = ProgressStore::open(UnavailableStorage, KEY, 3);
    assert_eq!(store.state(), &ProgressState::all_false(3));
    assert_eq!(
        store.mark_complete(0),
        MarkOutcome::Marked(SaveOutcome::NotPersisted)
    );
    assert!(store.state().is_complete(0));
}

#[test]
fn mark_complete_persists_and_updates_queries() {
    let mut store = ProgressStore::open(MemoryStorage::new(), KEY, 5);
    assert_eq!(
        store.mark_complete(0),
        MarkOutcome::Marked(SaveOutcome::Persisted)
    );
    assert_eq!(
        store.state().as_slice(),
        &[true, false, false, false, false]
    );
    assert_eq!(store.last_completed_index(), Some(0));
    assert_eq!(store.next_index(), 1);
    assert_eq!(
        store.storage().get(KEY),
        Some("[true,false,false,false,false]")
    );
}

#[test]
fn mark_complete_twice_is_idempotent() {
    let mut store = ProgressStore::open(MemoryStorage::new(), KEY, 5);
    store.mark_complete(2);
    let once = store.state().clone();
    assert_eq!(store.mark_complete(2), MarkOutcome::AlreadyComplete);
    assert_eq!(store.state(), &once);
    assert_eq!(store.mark_complete(5), MarkOutcome::OutOfRange);
}

#[test]
fn next_index_is_monotonic_until_reset() {
    let mut store = ProgressStore::open(MemoryStorage::new(), KEY, 5);
    let mut last = store.next_index();
    for i in 0..5 {
        store.mark_complete(i);
        assert!(store.next_index() >= last);
        last = store.next_index();
    }
    assert_eq!(store.completed_count(), 5);
    assert_eq!(store.reset_all(), SaveOutcome::Persisted);
    assert_eq!(store.next_index(), 0);
    assert_eq!(store.storage().get(KEY), Some("[false,false,false,false,false]"));
}

#[test]
fn save_of_a_loaded_state_is_a_no_op() {
    let mut store = seeded("[true,true,false,false,false]");
    let loaded = store.load();
    assert_eq!(store.save(loaded.clone()), SaveOutcome::Persisted);
    assert_eq!(store.state(), &loaded);
    assert_eq!(store.load(), loaded);
}

#[test]
fn save_rejects_wrong_length() {
    let mut store = ProgressStore::open(MemoryStorage::new(), KEY, 5);
    assert_eq!(
        store.save(ProgressState::all_false(2)),
        SaveOutcome::NotPersisted
    );
    assert_eq!(store.state().len(), 5);
}
