//! Single-page feed: header, post form, spot feed, and toasts.
//!
//! ARCHITECTURE
//! ============
//! This page owns the refresh wiring. The form never touches list state;
//! it reports success through a callback and the page triggers the
//! re-fetch, so each piece of state keeps exactly one owner.

use leptos::prelude::*;

use crate::components::notice_toast::NoticeToast;
use crate::components::post_form::PostForm;
use crate::components::spot_list::{SpotList, refresh_spots};
use crate::state::spots::SpotsState;
use crate::util::format::active_spots_label;

/// The one route of the app.
#[component]
pub fn HomePage() -> impl IntoView {
    let spots = expect_context::<RwSignal<SpotsState>>();

    // Fetch once when the view becomes active. Every later fetch is
    // explicit (refresh control, vote success, post success); no polling.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        refresh_spots(spots);
    });

    let on_post_success = Callback::new(move |_| refresh_spots(spots));

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <div class="home-page__brand">
                    <h1 class="home-page__title">"Open Feast"</h1>
                    <p class="home-page__tagline">"Share free food with your community"</p>
                </div>
                <span class="home-page__active-count">
                    {move || active_spots_label(spots.get().active_count())}
                </span>
            </header>

            <main class="home-page__main">
                <section class="home-page__form">
                    <PostForm on_post_success=on_post_success/>
                </section>
                <SpotList/>
            </main>

            <footer class="home-page__footer">
                "Open Feast. Fighting food waste, one share at a time."
            </footer>

            <NoticeToast/>
        </div>
    }
}
