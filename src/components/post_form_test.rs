use super::*;

use crate::net::types::GeoPoint;
use crate::state::draft::PhotoAttachment;

fn ready_draft() -> DraftState {
    DraftState {
        title: "Free Pizza".to_owned(),
        description: String::new(),
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
// Submit control enablement
// =============================================================

#[test]
fn submit_is_enabled_only_for_a_complete_idle_draft() {
    assert!(submit_enabled(&ready_draft()));
}

#[test]
fn submit_is_disabled_while_submitting() {
    let draft = DraftState {
        submitting: true,
        ..ready_draft()
    };
    assert!(!submit_enabled(&draft));
}

#[test]
fn submit_is_disabled_when_any_required_field_is_missing() {
    let no_title = DraftState {
        title: String::new(),
        ..ready_draft()
    };
    let no_photo = DraftState {
        photo: None,
        ..ready_draft()
    };
    let no_location = DraftState {
        location: None,
        ..ready_draft()
    };
    assert!(!submit_enabled(&no_title));
    assert!(!submit_enabled(&no_photo));
    assert!(!submit_enabled(&no_location));
}

// =============================================================
// Control labels
// =============================================================

#[test]
fn location_button_reflects_capture_state() {
    assert_eq!(location_button_label(false, false), "Get My GPS Location");
    assert_eq!(location_button_label(true, false), "Location Locked");
    assert_eq!(location_button_label(false, true), "Locating...");
    // An in-flight re-capture reads as pending, not as locked.
    assert_eq!(location_button_label(true, true), "Locating...");
}

#[test]
fn location_button_class_marks_a_locked_capture() {
    assert_eq!(location_button_class(false), "post-form__location");
    assert_eq!(
        location_button_class(true),
        "post-form__location post-form__location--locked"
    );
}

#[test]
fn submit_label_flips_while_uploading() {
    assert_eq!(submit_label(false), "Post Food");
    assert_eq!(submit_label(true), "Uploading...");
}

// =============================================================
// User-facing copy
// =============================================================

#[test]
fn create_failure_copy_mentions_the_proximity_radius() {
    assert!(CREATE_FAILURE_TEXT.contains("100m"));
}

#[test]
fn precondition_copy_names_all_three_requirements() {
    assert!(PRECONDITION_TEXT.contains("title"));
    assert!(PRECONDITION_TEXT.contains("photo"));
    assert!(PRECONDITION_TEXT.contains("location"));
}
