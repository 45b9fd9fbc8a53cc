//! Display formatting helpers for spot cards and the page header.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Clock-time portion of an ISO-8601 timestamp, as `HH:MM`.
///
/// Falls back to the raw input when it does not look like a timestamp, so
/// a malformed server value degrades to ugly instead of wrong.
#[must_use]
pub fn short_time(created_at: &str) -> String {
    created_at
        .split_once('T')
        .map(|(_, clock)| clock.chars().take(5).collect::<String>())
        .filter(|clock| clock.len() == 5)
        .unwrap_or_else(|| created_at.to_owned())
}

/// Coordinate footer line for a spot card.
#[must_use]
pub fn coords_label(latitude: f64, longitude: f64) -> String {
    format!("Lat: {latitude:.4}, Lng: {longitude:.4}")
}

/// Description text with a placeholder for absent or blank values.
#[must_use]
pub fn description_or_placeholder(description: Option<&str>) -> &str {
    match description {
        Some(text) if !text.trim().is_empty() => text,
        _ => "No description provided",
    }
}

/// Image URL usable as an `src`, or `None` when a placeholder should render.
/// The backend sends an empty string when no image was stored.
#[must_use]
pub fn image_source(image_url: Option<&str>) -> Option<&str> {
    image_url.filter(|url| !url.trim().is_empty())
}

/// Header tally of spots currently marked active.
#[must_use]
pub fn active_spots_label(count: usize) -> String {
    if count == 1 {
        "1 active spot".to_owned()
    } else {
        format!("{count} active spots")
    }
}
