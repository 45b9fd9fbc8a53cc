//! Spot feed: status surfaces, refresh control, and the card grid.
//!
//! DESIGN
//! ======
//! The list never edits spots locally. Every mutation (vote, post) funnels
//! back through [`refresh_spots`], which replaces the snapshot from the
//! backend. Failures keep the previous snapshot browsable under a banner.

#[cfg(test)]
#[path = "spot_list_test.rs"]
mod spot_list_test;

use leptos::prelude::*;

use crate::components::spot_card::SpotCard;
use crate::state::spots::{ListPhase, SpotsState};
use crate::state::ui::{NoticeKind, UiState};

/// Banner text for a failed list fetch. Stays up until the next fetch.
const FETCH_ERROR_TEXT: &str = "Failed to load spots. Is the backend running?";

const VOTE_SUCCESS_TEXT: &str = "Vote registered!";
const VOTE_ERROR_TEXT: &str = "Error voting. You might be offline.";

/// Refresh control icon class; spins while a fetch is in flight.
fn refresh_icon_class(loading: bool) -> &'static str {
    if loading {
        "spot-list__refresh-icon spot-list__refresh-icon--spinning"
    } else {
        "spot-list__refresh-icon"
    }
}

/// Start a list fetch and apply the outcome to shared state.
///
/// Call sites: mount, the manual refresh control, a successful vote, and a
/// successful post. Safe to call repeatedly; the last response wins.
pub fn refresh_spots(spots: RwSignal<SpotsState>) {
    spots.update(|s| s.begin_fetch());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_food_spots().await {
            Ok(items) => spots.update(|s| s.apply_fetch_success(items)),
            Err(message) => {
                log::error!("spot fetch failed: {message}");
                spots.update(|s| s.apply_fetch_failure(FETCH_ERROR_TEXT.to_owned()));
            }
        }
    });
}

/// The feed section: heading with refresh, one status surface, card grid.
#[component]
pub fn SpotList() -> impl IntoView {
    let spots = expect_context::<RwSignal<SpotsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_vote = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::vote_finished(id).await {
                Ok(()) => {
                    ui.update(|u| {
                        u.push_notice(NoticeKind::Success, VOTE_SUCCESS_TEXT.to_owned());
                    });
                    refresh_spots(spots);
                }
                Err(message) => {
                    // No state mutation on a failed vote; the snapshot is
                    // still whatever the last fetch returned.
                    log::error!("vote failed: {message}");
                    ui.update(|u| {
                        u.push_notice(NoticeKind::Error, VOTE_ERROR_TEXT.to_owned());
                    });
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (id, ui);
    });

    view! {
        <section class="spot-list">
            <div class="spot-list__header">
                <h2 class="spot-list__heading">"Available Food Spots"</h2>
                <button class="spot-list__refresh" on:click=move |_| refresh_spots(spots)>
                    <span class=move || refresh_icon_class(spots.get().loading)></span>
                    "Refresh"
                </button>
            </div>

            <Show when=move || spots.get().phase() == ListPhase::Failed>
                <div class="spot-list__banner">
                    <strong class="spot-list__banner-title">"Connection Error"</strong>
                    <span class="spot-list__banner-text">
                        {move || spots.get().error.unwrap_or_default()}
                    </span>
                </div>
            </Show>

            <Show when=move || spots.get().phase() == ListPhase::Loading>
                <div class="spot-list__status">"Loading food spots..."</div>
            </Show>

            <Show when=move || spots.get().phase() == ListPhase::Empty>
                <div class="spot-list__empty">
                    <h3 class="spot-list__empty-title">"No food spots yet"</h3>
                    <p class="spot-list__empty-text">
                        "Be the first to share free food in your area!"
                    </p>
                </div>
            </Show>

            <div class="spot-list__grid">
                {move || {
                    spots
                        .get()
                        .items
                        .into_iter()
                        .map(|spot| view! { <SpotCard spot=spot on_vote=on_vote/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
