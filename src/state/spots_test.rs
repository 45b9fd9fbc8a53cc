use super::*;

fn spot(id: i64, status: SpotStatus) -> FoodSpot {
    FoodSpot {
        id,
        title: format!("Spot {id}"),
        description: None,
        latitude: 40.0,
        longitude: -73.0,
        image_url: None,
        status,
        verification_count: 0,
        created_at: "2024-01-01T12:00:00Z".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_starts_loading_with_no_items_and_no_error() {
    let state = SpotsState::default();
    assert!(state.items.is_empty());
    assert!(state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Fetch transitions
// =============================================================

#[test]
fn begin_fetch_raises_loading_and_clears_error() {
    let mut state = SpotsState {
        items: vec![spot(1, SpotStatus::Active)],
        loading: false,
        error: Some("list spots failed: 500".to_owned()),
    };
    state.begin_fetch();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn apply_fetch_success_replaces_the_snapshot_wholesale() {
    let mut state = SpotsState::default();
    state.apply_fetch_success(vec![spot(1, SpotStatus::Active), spot(2, SpotStatus::Finished)]);
    state.begin_fetch();
    state.apply_fetch_success(vec![spot(3, SpotStatus::Active)]);

    let ids: Vec<i64> = state.items.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3]);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_fetch_success_preserves_server_order() {
    let mut state = SpotsState::default();
    state.apply_fetch_success(vec![
        spot(9, SpotStatus::Active),
        spot(2, SpotStatus::Expired),
        spot(5, SpotStatus::Active),
    ]);
    let ids: Vec<i64> = state.items.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![9, 2, 5]);
}

#[test]
fn apply_fetch_failure_keeps_prior_items() {
    let mut state = SpotsState::default();
    state.apply_fetch_success(vec![spot(1, SpotStatus::Active)]);
    state.begin_fetch();
    state.apply_fetch_failure("list spots failed: 503".to_owned());

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("list spots failed: 503"));
    assert!(!state.loading);
}

#[test]
fn error_survives_until_the_next_fetch_begins() {
    let mut state = SpotsState::default();
    state.apply_fetch_failure("list spots failed: 500".to_owned());
    assert!(state.error.is_some());
    state.begin_fetch();
    assert!(state.error.is_none());
    state.apply_fetch_success(Vec::new());
    assert!(state.error.is_none());
}

// =============================================================
// Phase classification
// =============================================================

#[test]
fn phase_is_loading_while_a_fetch_is_in_flight() {
    let mut state = SpotsState::default();
    assert_eq!(state.phase(), ListPhase::Loading);

    // A refresh over existing items still reports loading.
    state.apply_fetch_success(vec![spot(1, SpotStatus::Active)]);
    state.begin_fetch();
    assert_eq!(state.phase(), ListPhase::Loading);
}

#[test]
fn phase_is_failed_after_a_fetch_failure() {
    let mut state = SpotsState::default();
    state.apply_fetch_failure("list spots failed: 500".to_owned());
    assert_eq!(state.phase(), ListPhase::Failed);
}

#[test]
fn phase_failure_wins_over_the_empty_placeholder() {
    let mut state = SpotsState::default();
    state.apply_fetch_failure("list spots failed: 500".to_owned());
    assert!(state.items.is_empty());
    assert_eq!(state.phase(), ListPhase::Failed);
}

#[test]
fn phase_is_empty_after_a_successful_fetch_with_no_spots() {
    let mut state = SpotsState::default();
    state.apply_fetch_success(Vec::new());
    assert_eq!(state.phase(), ListPhase::Empty);
}

#[test]
fn phase_is_populated_after_a_successful_fetch_with_spots() {
    let mut state = SpotsState::default();
    state.apply_fetch_success(vec![spot(1, SpotStatus::Active)]);
    assert_eq!(state.phase(), ListPhase::Populated);
}

// =============================================================
// Active count
// =============================================================

#[test]
fn active_count_counts_only_active_spots() {
    let mut state = SpotsState::default();
    state.apply_fetch_success(vec![
        spot(1, SpotStatus::Active),
        spot(2, SpotStatus::Finished),
        spot(3, SpotStatus::Active),
        spot(4, SpotStatus::Expired),
    ]);
    assert_eq!(state.active_count(), 2);
}

#[test]
fn active_count_is_zero_for_an_empty_snapshot() {
    let state = SpotsState {
        loading: false,
        ..SpotsState::default()
    };
    assert_eq!(state.active_count(), 0);
}
