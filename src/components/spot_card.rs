//! Card component for a single food spot in the feed grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards are pure render output of the latest snapshot. The only action a
//! card owns is the finished vote, reported upward through a callback so
//! the list decides how to refresh.

#[cfg(test)]
#[path = "spot_card_test.rs"]
mod spot_card_test;

use leptos::prelude::*;

use crate::net::types::{FoodSpot, SpotStatus};
use crate::util::format::{coords_label, description_or_placeholder, image_source, short_time};

/// Corroborating votes the backend needs before it flips a spot to
/// finished. Display-only on the client; the backend owns the threshold.
pub const FINISH_VOTE_TARGET: u32 = 3;

/// External directions link for a coordinate pair.
fn directions_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps/dir/?api=1&destination={latitude},{longitude}")
}

/// Vote progress shown on the report control, e.g. `2/3`.
fn vote_label(verification_count: u32) -> String {
    format!("{verification_count}/{FINISH_VOTE_TARGET}")
}

/// Card root class. Anything not active renders de-emphasized.
fn card_class(status: SpotStatus) -> &'static str {
    match status {
        SpotStatus::Active => "spot-card",
        SpotStatus::Finished | SpotStatus::Expired => "spot-card spot-card--inactive",
    }
}

/// Status badge modifier class.
fn status_badge_class(status: SpotStatus) -> &'static str {
    match status {
        SpotStatus::Active => "spot-card__status spot-card__status--active",
        SpotStatus::Finished | SpotStatus::Expired => "spot-card__status spot-card__status--inactive",
    }
}

/// The finished-vote control renders only while a spot is still active.
fn shows_vote_control(status: SpotStatus) -> bool {
    status == SpotStatus::Active
}

/// One spot card: photo, badges, description, navigation, and vote control.
#[component]
pub fn SpotCard(spot: FoodSpot, on_vote: Callback<i64>) -> impl IntoView {
    let id = spot.id;
    let time = short_time(&spot.created_at);
    let coords = coords_label(spot.latitude, spot.longitude);
    let map_href = directions_url(spot.latitude, spot.longitude);
    let vote_text = vote_label(spot.verification_count);
    let root_class = card_class(spot.status);
    let badge_class = status_badge_class(spot.status);
    let status_text = spot.status.as_str();
    let votable = shows_vote_control(spot.status);
    let description = description_or_placeholder(spot.description.as_deref()).to_owned();
    let image = image_source(spot.image_url.as_deref()).map(str::to_owned);
    let alt_text = spot.title.clone();
    let title = spot.title;

    view! {
        <article class=root_class>
            <div class="spot-card__media">
                {match image {
                    Some(src) => view! {
                        <img class="spot-card__image" src=src alt=alt_text/>
                    }
                        .into_any(),
                    None => view! {
                        <div class="spot-card__image-placeholder">"No photo"</div>
                    }
                        .into_any(),
                }}
                <span class="spot-card__time">{time}</span>
                <span class=badge_class>{status_text}</span>
            </div>

            <div class="spot-card__body">
                <h3 class="spot-card__title">{title}</h3>
                <p class="spot-card__description">{description}</p>

                <div class="spot-card__actions">
                    <a
                        class="btn btn--primary spot-card__navigate"
                        href=map_href
                        target="_blank"
                        rel="noreferrer"
                    >
                        "Navigate"
                    </a>
                    <Show when=move || votable>
                        <button
                            class="btn spot-card__vote"
                            title="Report as empty"
                            on:click=move |_| on_vote.run(id)
                        >
                            {vote_text.clone()}
                        </button>
                    </Show>
                </div>

                <div class="spot-card__coords">{coords}</div>
            </div>
        </article>
    }
}
