//! Draft state for the new-spot form.
//!
//! DESIGN
//! ======
//! The draft lives entirely client-side until submission. A successful
//! submit discards it; a failed submit leaves every field in place so the
//! user can retry without re-entering data.
//!
//! The photo itself is a DOM file handle and stays in the file input.
//! State tracks only that a photo was chosen (plus its display name), which
//! keeps this struct plain data that signals can carry.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::net::types::GeoPoint;

/// Marker for a chosen photo. The binary lives in the file input element
/// and is read out at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoAttachment {
    /// File name as reported by the picker, shown next to the input.
    pub name: String,
}

/// Outcome of asking to start a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitGate {
    /// Preconditions hold; the caller should issue the create request.
    Ready,
    /// A submission is already in flight; the call is dropped.
    AlreadySubmitting,
    /// Title, photo, or location is missing; no request may be sent.
    Incomplete,
}

/// Client-local draft of a new spot plus its in-flight flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftState {
    /// Spot title. Required non-empty after trimming.
    pub title: String,
    /// Free-text description. Optional.
    pub description: String,
    /// Chosen photo, if any. Required for submission.
    pub photo: Option<PhotoAttachment>,
    /// Captured device location, if any. Required for submission.
    pub location: Option<GeoPoint>,
    /// True while a create request is in flight.
    pub submitting: bool,
    /// True while a geolocation query is in flight.
    pub location_pending: bool,
}

impl DraftState {
    /// Whether every required field is present: non-blank title, photo,
    /// and captured location.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && self.photo.is_some() && self.location.is_some()
    }

    /// Start a geolocation capture. Returns `false` when one is already
    /// pending; the second request is dropped instead of racing the first.
    pub fn begin_location_capture(&mut self) -> bool {
        if self.location_pending {
            return false;
        }
        self.location_pending = true;
        true
    }

    /// Store a captured coordinate pair and settle the pending flag.
    pub fn apply_location_success(&mut self, point: GeoPoint) {
        self.location = Some(point);
        self.location_pending = false;
    }

    /// Settle a failed capture: the location reads "not captured" again.
    pub fn apply_location_failure(&mut self) {
        self.location = None;
        self.location_pending = false;
    }

    /// Gate a submission attempt. Only `Ready` raises `submitting`; the
    /// other outcomes leave the draft untouched.
    pub fn begin_submit(&mut self) -> SubmitGate {
        if self.submitting {
            return SubmitGate::AlreadySubmitting;
        }
        if !self.is_submittable() {
            return SubmitGate::Incomplete;
        }
        self.submitting = true;
        SubmitGate::Ready
    }

    /// Discard the draft after the backend accepted it. `submitting` stays
    /// raised until [`Self::finish_submit`] runs as the final step.
    pub fn apply_submit_success(&mut self) {
        self.title.clear();
        self.description.clear();
        self.photo = None;
        self.location = None;
    }

    /// Final step of every submission, successful or not.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}
