//! SSR binary: renders the app shell and serves static assets.
//!
//! SYSTEM CONTEXT
//! ==============
//! All food-spot data lives in a separate backend service, so this binary
//! carries no API routes of its own. It renders the Leptos shell, serves
//! the compiled WASM bundle, and hands every route to the client app.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::path::PathBuf;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::CompressionLayer;
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    use openfeast_client::app::{App, shell};

    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("leptos configuration");
    let leptos_options = conf.leptos_options;

    let addr = match std::env::var("PORT") {
        Ok(port) => {
            let port: u16 = port.parse().expect("invalid PORT");
            std::net::SocketAddr::from(([0, 0, 0, 0], port))
        }
        Err(_) => leptos_options.site_addr,
    };

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "openfeast client listening");
    axum::serve(listener, app).await.expect("server failed");
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Binary target is SSR-only; the WASM build enters through `hydrate()`.
}
