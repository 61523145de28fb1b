//! Pure HTML-to-field extraction. Every accessor is total: a missing field
//! yields its sentinel (or the empty string) instead of an error, so
//! downstream code never branches on field presence.

pub mod detail;
pub mod reviews;
pub mod search;

pub const UNAVAILABLE_NAME: &str = "name unavailable";
pub const UNAVAILABLE_PRICE: &str = "price unavailable";
pub const UNAVAILABLE_RATING: &str = "no rating";
pub const UNAVAILABLE_DISTANCE: &str = "distance unavailable";
pub const UNAVAILABLE_BEACH_DISTANCE: &str = "no beach distance";
pub const UNAVAILABLE_DESCRIPTION: &str = "description unavailable";
pub const UNAVAILABLE_LOCATION: &str = "location unavailable";

pub(crate) fn parse_selector(raw: &str) -> Option<scraper::Selector> {
    scraper::Selector::parse(raw).ok()
}

/// Element text with per-node trimming, joined by `sep`.
pub(crate) fn joined_text(element: scraper::ElementRef<'_>, sep: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}
