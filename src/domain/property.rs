use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::review::Review;

/// One lodging listing. Summary fields are filled from the result card (with
/// sentinels for whatever the card did not render); detail fields and reviews
/// are attached in place during enrichment. Listings whose `detail_url` is
/// not an absolute URL are kept but never enriched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySummary {
    pub title: String,
    pub price: String,
    pub rating: String,
    pub distance: String,
    pub beach_distance: String,
    pub features: String,
    pub payment_policy: String,
    pub detail_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl PropertySummary {
    /// Detail/review enrichment is only attempted against a well-formed
    /// absolute http(s) URL.
    pub fn enrichable(&self) -> bool {
        Url::parse(&self.detail_url)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false)
    }

    pub fn apply_detail(&mut self, detail: PropertyDetail) {
        self.description = detail.description;
        self.location = detail.location;
        self.services = detail.services;
    }
}

impl std::fmt::Display for PropertySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {} ({})", self.title, self.price, self.rating)?;
        if !self.reviews.is_empty() {
            write!(f, ", {} reviews", self.reviews.len())?;
        }
        Ok(())
    }
}

/// Fields read from a property's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDetail {
    pub description: String,
    /// "lat,lng" from the map pin, or its sentinel.
    pub location: String,
    pub services: Vec<String>,
}
