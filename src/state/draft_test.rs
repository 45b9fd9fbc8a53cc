use super::*;

fn ready_draft() -> DraftState {
    DraftState {
        title: "Free Pizza".to_owned(),
        description: "Two boxes left".to_owned(),
        photo: Some(PhotoAttachment {
            name: "pizza.jpg".to_owned(),
        }),
        location: Some(GeoPoint {
            lat: 40.0,
            lng: -73.0,
        }),
        submitting: false,
        location_pending: false,
    }
}

// =============================================================
// Defaults and submit preconditions
// =============================================================

#[test]
fn default_draft_is_empty_and_idle() {
    let draft = DraftState::default();
    assert!(draft.title.is_empty());
    assert!(draft.description.is_empty());
    assert!(draft.photo.is_none());
    assert!(draft.location.is_none());
    assert!(!draft.submitting);
    assert!(!draft.location_pending);
}

#[test]
fn submission_requires_title_photo_and_location_in_every_combination() {
    for &(has_title, has_photo, has_location) in &[
        (false, false, false),
        (true, false, false),
        (false, true, false),
        (false, false, true),
        (true, true, false),
        (true, false, true),
        (false, true, true),
        (true, true, true),
    ] {
        let mut draft = DraftState::default();
        if has_title {
            draft.title = "Free Pizza".to_owned();
        }
        if has_photo {
            draft.photo = Some(PhotoAttachment {
                name: "pizza.jpg".to_owned(),
            });
        }
        if has_location {
            draft.location = Some(GeoPoint {
                lat: 40.0,
                lng: -73.0,
            });
        }

        let expected = has_title && has_photo && has_location;
        assert_eq!(
            draft.is_submittable(),
            expected,
            "title={has_title} photo={has_photo} location={has_location}"
        );

        let gate = draft.begin_submit();
        if expected {
            assert_eq!(gate, SubmitGate::Ready);
            assert!(draft.submitting);
        } else {
            assert_eq!(gate, SubmitGate::Incomplete);
            assert!(!draft.submitting, "an incomplete draft must not start submitting");
        }
    }
}

#[test]
fn whitespace_only_title_is_not_submittable() {
    let mut draft = ready_draft();
    draft.title = "   ".to_owned();
    assert!(!draft.is_submittable());
    assert_eq!(draft.begin_submit(), SubmitGate::Incomplete);
}

#[test]
fn empty_description_does_not_block_submission() {
    let mut draft = ready_draft();
    draft.description.clear();
    assert!(draft.is_submittable());
}

// =============================================================
// Location capture
// =============================================================

#[test]
fn begin_location_capture_raises_pending() {
    let mut draft = DraftState::default();
    assert!(draft.begin_location_capture());
    assert!(draft.location_pending);
}

#[test]
fn begin_location_capture_drops_a_reentrant_call() {
    let mut draft = DraftState::default();
    assert!(draft.begin_location_capture());
    assert!(!draft.begin_location_capture());
    assert!(draft.location_pending);
}

#[test]
fn capture_can_restart_after_a_settled_attempt() {
    let mut draft = DraftState::default();
    assert!(draft.begin_location_capture());
    draft.apply_location_failure();
    assert!(draft.begin_location_capture());
}

#[test]
fn apply_location_success_stores_the_point_and_settles_pending() {
    let mut draft = DraftState::default();
    draft.begin_location_capture();
    draft.apply_location_success(GeoPoint {
        lat: 40.0,
        lng: -73.0,
    });

    assert_eq!(
        draft.location,
        Some(GeoPoint {
            lat: 40.0,
            lng: -73.0
        })
    );
    assert!(!draft.location_pending);
}

#[test]
fn apply_location_failure_reads_as_not_captured() {
    let mut draft = ready_draft();
    draft.begin_location_capture();
    draft.apply_location_failure();
    assert!(draft.location.is_none());
    assert!(!draft.location_pending);
}

#[test]
fn captured_location_completes_the_submit_preconditions() {
    let mut draft = DraftState {
        title: "Free Pizza".to_owned(),
        photo: Some(PhotoAttachment {
            name: "pizza.jpg".to_owned(),
        }),
        ..DraftState::default()
    };
    assert!(!draft.is_submittable());

    draft.begin_location_capture();
    draft.apply_location_success(GeoPoint {
        lat: 40.0,
        lng: -73.0,
    });
    assert!(draft.is_submittable());
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn begin_submit_drops_a_reentrant_call() {
    let mut draft = ready_draft();
    assert_eq!(draft.begin_submit(), SubmitGate::Ready);
    assert_eq!(draft.begin_submit(), SubmitGate::AlreadySubmitting);
    assert!(draft.submitting);
}

#[test]
fn successful_submit_resets_all_four_draft_fields() {
    let mut draft = ready_draft();
    assert_eq!(draft.begin_submit(), SubmitGate::Ready);
    draft.apply_submit_success();

    assert!(draft.title.is_empty());
    assert!(draft.description.is_empty());
    assert!(draft.photo.is_none());
    assert!(draft.location.is_none());
    // submitting settles only in the final step
    assert!(draft.submitting);

    draft.finish_submit();
    assert!(!draft.submitting);
}

#[test]
fn failed_submit_preserves_the_draft_for_retry() {
    let mut draft = ready_draft();
    assert_eq!(draft.begin_submit(), SubmitGate::Ready);
    draft.finish_submit();

    assert_eq!(draft, ready_draft());
    assert_eq!(draft.begin_submit(), SubmitGate::Ready);
}
