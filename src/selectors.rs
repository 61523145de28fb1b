//! CSS selector contract with the target site, kept in one place so a site
//! redesign is a one-file change.

/// Cookie/consent overlay dismissal, tried in order; the first clickable
/// match wins and none matching is not an error.
pub const COOKIE_ACCEPT_CANDIDATES: &[&str] = &[
    "button[aria-label=\"Aceptar\"]",
    "button[aria-label*=\"Aceptar\"]",
    "button[data-testid=\"accept-button\"]",
    "button[id*=\"onetrust-accept-btn\"]",
    "button[aria-label*=\"Accept\"]",
];

pub const SEARCH_INPUT: &str = "input[name=\"ss\"]";
pub const FIRST_SUGGESTION: &str = "li[data-i=\"0\"]";
pub const SEARCH_SUBMIT: &str = "button[type=\"submit\"]";

pub const PROPERTY_CARD: &str = "div[data-testid=\"property-card\"]";
pub const CARD_TITLE: &str = "div[data-testid=\"title\"]";
pub const CARD_PRICE: &str = "span[data-testid=\"price-and-discounted-price\"]";
pub const CARD_PRICE_FALLBACK: &str = "[data-testid=\"price-for-x-nights\"]";
pub const CARD_TITLE_LINK: &str = "a[data-testid=\"title-link\"]";
pub const CARD_LINK_FALLBACK: &str = "a[data-testid=\"availability-cta-btn\"]";
pub const CARD_REVIEW_SCORE: &str = "div[data-testid=\"review-score\"] > div[aria-hidden=\"true\"]";
pub const CARD_DISTANCE: &str = "span[data-testid=\"distance\"]";
pub const CARD_FEATURES: &str = "ul > li > span";
pub const CARD_PAYMENT_POLICY: &str = "div[data-testid=\"payment-policy-tags\"]";

pub const DETAIL_DESCRIPTION: &str = "p[data-testid=\"property-description\"]";
pub const DETAIL_MAP_PIN: &str = "a#map_trigger_header_pin";
pub const DETAIL_MAP_LATLNG_ATTR: &str = "data-atlas-latlng";
pub const DETAIL_FACILITIES: &str = "div[data-testid=\"property-most-popular-facilities-wrapper\"]";

pub const READ_ALL_REVIEWS: &str = "[data-testid=\"fr-read-all-reviews\"]";
pub const REVIEWS_MODAL: &str = "[data-testid=\"fr-reviews-modal\"], div[role=\"dialog\"]";
pub const REVIEW_CARD: &str = "div[data-testid=\"fr-reviews-modal\"] div[data-testid=\"review-card\"], div[role=\"dialog\"] div[data-testid=\"review-card\"]";
pub const REVIEW_TITLE: &str = "h4[data-testid=\"review-title\"]";
pub const REVIEW_DATE: &str = "span[data-testid=\"review-date\"]";
pub const REVIEW_POSITIVE: &str = "div[data-testid=\"review-positive-text\"]";
pub const REVIEW_NEGATIVE: &str = "div[data-testid=\"review-negative-text\"]";
pub const REVIEWS_NEXT_PAGE: &str = "button[aria-label=\"Página siguiente\"]";
pub const REVIEWS_CLOSE: &str = "button[aria-label=\"Cerrar\"]";
