//! Tests for per-source timer storage and the published sorted view.

use super::set::TimerSet;
use super::source::{SourceAdapter, SourceId};

#[test]
fn sorted_view_ascending_by_expiry() {
    let mut set = TimerSet::default();
    set.upsert("b", 100.0);
    set.upsert("a", 100.5);
    set.upsert("c", 50.0);

    let view = set.sorted();
    let ids: Vec<&str> = view.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
}

#[test]
fn equal_expiry_tie_breaks_by_id() {
    let mut set = TimerSet::default();
    set.upsert("zeta", 100.0);
    set.upsert("alpha", 100.0);
    set.upsert("mid", 100.0);

    let view = set.sorted();
    let ids: Vec<&str> = view.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn upsert_overwrites_expiry_for_known_id() {
    let mut set = TimerSet::default();
    set.upsert("t1", 100.0);
    set.upsert("t1", 130.0);

    assert_eq!(set.len(), 1);
    assert_eq!(set.sorted()[0].expiry, 130.0);
}

#[test]
fn prune_drops_only_entries_past_grace() {
    let now = 1000.0;
    let mut set = TimerSet::default();
    set.upsert("long_gone", now - 20.0);
    set.upsert("just_finished", now - 10.0);
    set.upsert("future", now + 60.0);

    let dropped = set.prune_stale(now, 15.0);

    assert_eq!(dropped, 1);
    let view = set.sorted();
    let ids: Vec<&str> = view.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["just_finished", "future"]);
}

#[test]
fn adapter_remove_unknown_id_is_noop() {
    let adapter = SourceAdapter::new(SourceId::Gadget);
    adapter.upsert("t1", 100.0);

    assert!(!adapter.remove("no_such_timer"));
    assert_eq!(adapter.sorted_view().len(), 1);
    assert_eq!(adapter.len(), 1);
}

#[test]
fn adapter_view_tracks_set_through_mutations() {
    let adapter = SourceAdapter::new(SourceId::Bus);
    assert!(adapter.sorted_view().is_empty());

    adapter.upsert("t1", 100.0);
    adapter.upsert("t2", 50.0);
    assert_eq!(adapter.sorted_view().len(), adapter.len());
    assert_eq!(adapter.sorted_view()[0].id, "t2");

    assert!(adapter.remove("t2"));
    assert_eq!(adapter.sorted_view().len(), 1);

    adapter.clear_all();
    assert!(adapter.sorted_view().is_empty());
    assert!(adapter.is_empty());
}

#[test]
fn adapter_replace_all_swaps_whole_set() {
    let adapter = SourceAdapter::new(SourceId::Bus);
    adapter.upsert("old", 100.0);

    let mut snapshot = hashbrown::HashMap::new();
    snapshot.insert("new_a".to_string(), 200.0);
    snapshot.insert("new_b".to_string(), 150.0);
    adapter.replace_all(snapshot);

    let view = adapter.sorted_view();
    let ids: Vec<&str> = view.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["new_b", "new_a"]);
}

#[test]
fn view_snapshot_is_stable_across_later_mutations() {
    let adapter = SourceAdapter::new(SourceId::Gadget);
    adapter.upsert("t1", 100.0);

    let snapshot = adapter.sorted_view();
    adapter.upsert("t2", 50.0);

    // The earlier snapshot is immutable; only fresh reads see the change.
    assert_eq!(snapshot.len(), 1);
    assert_eq!(adapter.sorted_view().len(), 2);
}
