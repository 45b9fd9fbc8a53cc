//! Device geolocation capture.
//!
//! Wraps the browser's callback-based geolocation API in a oneshot future
//! so form logic can `await` a single coordinate fix. Requires a browser
//! environment; SSR paths fail with [`GeoError::Unsupported`].
//!
//! TRADE-OFFS
//! ==========
//! No retry and no client-side timeout beyond the platform default. A
//! capture settles exactly once and the user retries by pressing the
//! capture control again.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use crate::net::types::GeoPoint;

/// Why a geolocation capture failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeoError {
    /// The platform exposes no geolocation API.
    Unsupported,
    /// The user denied the permission prompt.
    PermissionDenied,
    /// The platform could not produce a position fix.
    Unavailable,
    /// The fix did not arrive in time.
    Timeout,
}

impl GeoError {
    /// One-shot notification text for a failed capture.
    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            GeoError::Unsupported => "Geolocation is not supported on this device.",
            GeoError::PermissionDenied => "Location permission was denied.",
            GeoError::Unavailable => "Your location could not be determined.",
            GeoError::Timeout => "Locating you took too long. Try again.",
        }
    }
}

/// Map a `PositionError` code onto [`GeoError`].
///
/// The DOM fixes the codes: 1 permission denied, 2 position unavailable,
/// 3 timeout.
#[cfg(any(test, feature = "hydrate"))]
fn classify_position_error(code: u16) -> GeoError {
    match code {
        1 => GeoError::PermissionDenied,
        3 => GeoError::Timeout,
        _ => GeoError::Unavailable,
    }
}

/// Resolve the device's current position once.
///
/// # Errors
///
/// Returns a [`GeoError`] when the platform lacks geolocation support,
/// permission is denied, no fix is available, or the lookup times out.
pub async fn current_position() -> Result<GeoPoint, GeoError> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use futures::channel::oneshot;
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let window = web_sys::window().ok_or(GeoError::Unsupported)?;
        let geolocation = window
            .navigator()
            .geolocation()
            .map_err(|_| GeoError::Unsupported)?;

        let (tx, rx) = oneshot::channel::<Result<GeoPoint, GeoError>>();
        // Both callbacks share one sender; whichever fires first takes it.
        let sender = Rc::new(RefCell::new(Some(tx)));

        let success_sender = Rc::clone(&sender);
        let on_success = Closure::once(move |position: web_sys::Position| {
            if let Some(tx) = success_sender.borrow_mut().take() {
                let coords = position.coords();
                let _ = tx.send(Ok(GeoPoint {
                    lat: coords.latitude(),
                    lng: coords.longitude(),
                }));
            }
        });

        let failure_sender = Rc::clone(&sender);
        let on_failure = Closure::once(move |error: web_sys::PositionError| {
            if let Some(tx) = failure_sender.borrow_mut().take() {
                let _ = tx.send(Err(classify_position_error(error.code())));
            }
        });

        geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref::<js_sys::Function>(),
                Some(on_failure.as_ref().unchecked_ref::<js_sys::Function>()),
            )
            .map_err(|_| GeoError::Unsupported)?;

        // The browser invokes at most one of the callbacks later; both must
        // outlive this scope.
        on_success.forget();
        on_failure.forget();

        rx.await.unwrap_or(Err(GeoError::Unavailable))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(GeoError::Unsupported)
    }
}
