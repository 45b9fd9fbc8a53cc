//! Spot-list state for the feed view.
//!
//! DESIGN
//! ======
//! The list is a server snapshot, never patched in place: every successful
//! fetch replaces it wholesale. Vote counts and status flips are only ever
//! trusted from the backend, so a mutation is reflected by re-fetching
//! rather than by editing items locally.

#[cfg(test)]
#[path = "spots_test.rs"]
mod spots_test;

use crate::net::types::{FoodSpot, SpotStatus};

/// Which status surface the list area shows. At most one renders at a time;
/// the card grid itself is separate and stays visible alongside a banner
/// when stale items exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed and no newer one has started.
    Failed,
    /// The last fetch succeeded with zero spots.
    Empty,
    /// The last fetch succeeded with at least one spot.
    Populated,
}

/// Shared spot-list state backed by the REST backend.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotsState {
    /// Spots from the most recent successful fetch, in server order.
    pub items: Vec<FoodSpot>,
    /// True while a fetch is in flight.
    pub loading: bool,
    /// Message from the most recent failed fetch. Survives until the next
    /// fetch starts.
    pub error: Option<String>,
}

impl Default for SpotsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            // The first paint happens before the mount fetch resolves, so
            // the view starts in the loading phase instead of flashing the
            // empty placeholder.
            loading: true,
            error: None,
        }
    }
}

impl SpotsState {
    /// Mark a fetch as started: raises `loading` and clears any prior error.
    /// Items from the previous snapshot stay in place.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the snapshot with a fresh server response. Safe to apply
    /// repeatedly; the last response wins.
    pub fn apply_fetch_success(&mut self, items: Vec<FoodSpot>) {
        self.items = items;
        self.error = None;
        self.loading = false;
    }

    /// Record a fetch failure. The previous snapshot is left untouched so
    /// stale cards remain browsable under the banner.
    pub fn apply_fetch_failure(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Classify the state into exactly one status surface.
    ///
    /// An in-flight fetch suppresses both the error banner and the empty
    /// placeholder, and the banner wins over the placeholder.
    #[must_use]
    pub fn phase(&self) -> ListPhase {
        if self.loading {
            ListPhase::Loading
        } else if self.error.is_some() {
            ListPhase::Failed
        } else if self.items.is_empty() {
            ListPhase::Empty
        } else {
            ListPhase::Populated
        }
    }

    /// Number of spots currently marked active.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.items
            .iter()
            .filter(|spot| spot.status == SpotStatus::Active)
            .count()
    }
}
