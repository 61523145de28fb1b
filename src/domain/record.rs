use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::property::PropertySummary;

/// Terminal artifact for one destination: written once after the destination
/// finishes processing, never mutated again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationRecord {
    pub destination: String,
    pub location_id: String,
    pub location_kind: String,
    pub checkin: String,
    pub checkout: String,
    pub scraped_at: DateTime<Utc>,
    pub total_properties: usize,
    pub properties: Vec<PropertySummary>,
}

impl DestinationRecord {
    pub fn new(
        destination: impl Into<String>,
        location_id: impl Into<String>,
        location_kind: impl Into<String>,
        checkin: impl Into<String>,
        checkout: impl Into<String>,
        properties: Vec<PropertySummary>,
    ) -> Self {
        Self {
            destination: destination.into(),
            location_id: location_id.into(),
            location_kind: location_kind.into(),
            checkin: checkin.into(),
            checkout: checkout.into(),
            scraped_at: Utc::now(),
            total_properties: properties.len(),
            properties,
        }
    }

    /// File stem for this record's output file.
    pub fn file_stem(&self) -> String {
        slug(&self.destination)
    }
}

/// Lowercased, space-free form of a destination name, used for file names.
pub fn slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}
