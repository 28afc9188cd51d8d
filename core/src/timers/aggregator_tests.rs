//! Tests for the precedence, staleness, and cross-clear policies.

use super::{Aggregator, SourceId, DEFAULT_STALE_GRACE_SECS};

const NOW: f64 = 10_000.0;

fn aggregator() -> Aggregator {
    Aggregator::new(DEFAULT_STALE_GRACE_SECS)
}

#[test]
fn bus_wins_whenever_it_has_timers() {
    let agg = aggregator();
    agg.adapter(SourceId::Bus).upsert("t1", NOW + 10.0);
    agg.adapter(SourceId::Bus).upsert("t2", NOW + 40.0);
    agg.adapter(SourceId::Gadget).upsert("t3", NOW + 5.0);

    // t3 expires soonest but the gadget source is ignored entirely.
    let selection = agg.active_selection(NOW);
    assert_eq!(selection.primary.as_ref().map(|t| t.id.as_str()), Some("t1"));
    assert_eq!(
        selection.secondary.as_ref().map(|t| t.id.as_str()),
        Some("t2")
    );
}

#[test]
fn gadget_is_the_fallback_when_bus_is_empty() {
    let agg = aggregator();
    agg.adapter(SourceId::Gadget).upsert("t3", NOW + 5.0);

    let selection = agg.active_selection(NOW);
    assert_eq!(selection.primary.as_ref().map(|t| t.id.as_str()), Some("t3"));
    assert!(selection.secondary.is_none());
}

#[test]
fn both_sources_empty_yields_empty_selection() {
    let agg = aggregator();
    let selection = agg.active_selection(NOW);
    assert!(selection.is_empty());
    assert!(selection.secondary.is_none());
}

#[test]
fn single_timer_has_no_secondary() {
    let agg = aggregator();
    agg.adapter(SourceId::Bus).upsert("only", NOW + 30.0);

    let selection = agg.active_selection(NOW);
    assert_eq!(
        selection.primary.as_ref().map(|t| t.id.as_str()),
        Some("only")
    );
    assert!(selection.secondary.is_none());
}

#[test]
fn stale_entries_are_filtered_from_selection() {
    let agg = aggregator();
    agg.adapter(SourceId::Bus).upsert("long_gone", NOW - 20.0);
    agg.adapter(SourceId::Bus).upsert("just_finished", NOW - 10.0);

    let selection = agg.active_selection(NOW);
    assert_eq!(
        selection.primary.as_ref().map(|t| t.id.as_str()),
        Some("just_finished")
    );
    assert!(selection.secondary.is_none());
}

#[test]
fn bus_going_empty_cross_clears_the_gadget_set() {
    let agg = aggregator();
    agg.adapter(SourceId::Bus).upsert("t1", NOW + 10.0);
    agg.adapter(SourceId::Gadget).upsert("t1", NOW + 11.0);

    // Bus active; gadget holds its laggier echo of the same timer.
    assert!(!agg.active_selection(NOW).is_empty());

    // The authoritative feed deletes the timer. The gadget echo must not
    // keep it on screen for the second it takes that feed to catch up.
    agg.adapter(SourceId::Bus).remove("t1");
    let selection = agg.active_selection(NOW);
    assert!(selection.is_empty());
    assert!(agg.adapter(SourceId::Gadget).is_empty());
}

#[test]
fn cross_clear_fires_only_on_the_transition() {
    let agg = aggregator();

    // Bus has never been non-empty: gadget-only operation must survive
    // repeated policy runs.
    agg.adapter(SourceId::Gadget).upsert("t3", NOW + 5.0);
    assert!(!agg.active_selection(NOW).is_empty());
    assert!(!agg.active_selection(NOW).is_empty());
    assert_eq!(agg.adapter(SourceId::Gadget).len(), 1);
}

#[test]
fn bus_expiring_stale_also_triggers_cross_clear() {
    let agg = aggregator();
    let later = NOW + 1.0 + DEFAULT_STALE_GRACE_SECS + 0.1;
    agg.adapter(SourceId::Bus).upsert("t1", NOW + 1.0);
    agg.adapter(SourceId::Gadget).upsert("t1", later + 60.0);
    assert!(!agg.active_selection(NOW).is_empty());

    // Advance past the grace window: the bus entry is pruned rather than
    // deleted, which is still a non-empty → empty transition, so the gadget
    // set is wiped even though its own entry has not gone stale.
    let selection = agg.active_selection(later);
    assert!(selection.is_empty());
    assert!(agg.adapter(SourceId::Gadget).is_empty());
}

#[test]
fn selection_tracks_now_without_new_events() {
    let agg = aggregator();
    agg.adapter(SourceId::Bus).upsert("t1", NOW + 1.0);

    assert!(!agg.active_selection(NOW).is_empty());
    // Same set, later clock: staleness is relative to now.
    assert!(
        agg.active_selection(NOW + 1.0 + DEFAULT_STALE_GRACE_SECS + 0.1)
            .is_empty()
    );
}
