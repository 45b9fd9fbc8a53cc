//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::spots::SpotsState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up routing for the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Spot list and notice state are shared across the page; the post
    // draft stays local to the form.
    let spots = RwSignal::new(SpotsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(spots);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/openfeast-client.css"/>
        <Title text="Open Feast"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
