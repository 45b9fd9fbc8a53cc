//! REST helpers for the food-spot backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since the backend is only
//! reachable from the browser session.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics; every failure
//! is surfaced to the UI at the call site and the app stays retryable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::FoodSpot;
#[cfg(any(test, feature = "hydrate"))]
use super::types::GeoPoint;

/// Collection endpoint for listing and creating spots.
pub const SPOTS_PATH: &str = "/api/food-spots";

/// Join the configured API base with an absolute endpoint path.
#[cfg(any(test, feature = "hydrate"))]
fn join_base(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Full URL for an endpoint path. The base is injected at build time via
/// `OPENFEAST_API_BASE` and defaults to same-origin relative paths.
#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    join_base(option_env!("OPENFEAST_API_BASE").unwrap_or(""), path)
}

#[cfg(any(test, feature = "hydrate"))]
fn vote_path(id: i64) -> String {
    format!("/api/food-spots/{id}/vote-finished")
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_spots_failed_message(status: u16) -> String {
    format!("list spots failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_spot_failed_message(status: u16) -> String {
    format!("create spot failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn vote_failed_message(status: u16) -> String {
    format!("vote-finished failed: {status}")
}

/// Multipart coordinate fields for a create request. The device pair is sent
/// identical to the target pair: the poster is assumed to be standing at the
/// spot, and the backend verifies the two against its proximity radius.
#[cfg(any(test, feature = "hydrate"))]
fn coordinate_fields(location: GeoPoint) -> [(&'static str, String); 4] {
    let lat = location.lat.to_string();
    let lng = location.lng.to_string();
    [
        ("latitude", lat.clone()),
        ("longitude", lng.clone()),
        ("deviceLatitude", lat),
        ("deviceLongitude", lng),
    ]
}

/// Fetch the full spot collection from `GET /api/food-spots`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body is not a valid spot array.
pub async fn fetch_food_spots() -> Result<Vec<FoodSpot>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url(SPOTS_PATH))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fetch_spots_failed_message(resp.status()));
        }
        resp.json::<Vec<FoodSpot>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Cast a "this is finished" vote via `POST /api/food-spots/{id}/vote-finished`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn vote_finished(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url(&vote_path(id)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(vote_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Submit a new spot via `POST /api/food-spots` as a multipart form.
///
/// The response body is ignored: the caller re-fetches the list instead of
/// trusting a locally constructed spot.
///
/// # Errors
///
/// Returns an error string if the form cannot be built, the HTTP request
/// fails, or the server rejects the submission (including its own proximity
/// check, which the client cannot pre-validate).
#[cfg(feature = "hydrate")]
pub async fn create_food_spot(
    title: &str,
    description: &str,
    photo: &web_sys::File,
    location: GeoPoint,
) -> Result<(), String> {
    let form = build_spot_form(title, description, photo, location)?;
    let resp = gloo_net::http::Request::post(&api_url(SPOTS_PATH))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(create_spot_failed_message(resp.status()));
    }
    Ok(())
}

/// Assemble the multipart payload for a create request.
///
/// No `Content-Type` header is set here: the browser must supply the
/// multipart boundary itself.
#[cfg(feature = "hydrate")]
fn build_spot_form(
    title: &str,
    description: &str,
    photo: &web_sys::File,
    location: GeoPoint,
) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("form construction failed: {e:?}"))?;
    form.append_with_str("title", title)
        .map_err(|e| format!("form field failed: {e:?}"))?;
    form.append_with_str("description", description)
        .map_err(|e| format!("form field failed: {e:?}"))?;
    form.append_with_blob_and_filename("image", photo, &photo.name())
        .map_err(|e| format!("form field failed: {e:?}"))?;
    for (name, value) in coordinate_fields(location) {
        form.append_with_str(name, &value)
            .map_err(|e| format!("form field failed: {e:?}"))?;
    }
    Ok(form)
}
