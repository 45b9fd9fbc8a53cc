//! Shared wire DTOs for the food-spot backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON responses field for field so the
//! list view can render snapshots without any client-side reshaping. The
//! backend owns every field; the client never writes them back.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A free-food posting as returned by `GET /api/food-spots`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSpot {
    /// Unique, stable spot identifier.
    pub id: i64,
    /// Short human-entered headline (e.g. `"Free Pizza"`).
    pub title: String,
    /// Optional longer description; tolerates null, missing, and empty.
    #[serde(default)]
    pub description: Option<String>,
    /// Latitude of the reported spot, in degrees.
    pub latitude: f64,
    /// Longitude of the reported spot, in degrees.
    pub longitude: f64,
    /// URL of the uploaded photo; tolerates null, missing, and empty.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Lifecycle status, owned entirely by the backend.
    pub status: SpotStatus,
    /// Number of corroborating "finished" votes received so far.
    pub verification_count: u32,
    /// Creation timestamp as ISO-8601 text.
    pub created_at: String,
}

/// Lifecycle status of a spot.
///
/// The backend flips `Active` to `Finished` once enough viewers vote, and to
/// `Expired` on its own cleanup schedule. The client only ever reads this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpotStatus {
    /// Food is reported as still available.
    Active,
    /// Viewers voted that the food is gone.
    Finished,
    /// The backend retired the spot after its lifetime elapsed.
    Expired,
}

impl SpotStatus {
    /// Wire/badge spelling of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Finished => "FINISHED",
            Self::Expired => "EXPIRED",
        }
    }
}

/// A captured device coordinate pair from the geolocation API.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}
