use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};
use url::Url;

use crate::config::types::{Config, StayConfig};
use crate::domain::destination::{Destination, ResolvedLocation};
use crate::domain::property::PropertySummary;
use crate::domain::record::DestinationRecord;
use crate::error::{HarvestError, Result};
use crate::ports::page_driver::PageDriver;
use crate::ports::record_sink::RecordSink;
use crate::scrape::enricher::DetailEnricher;
use crate::scrape::harvester::SearchHarvester;
use crate::scrape::resolver::LocationResolver;
use crate::scrape::review_pager::ReviewPager;

/// Sequences the whole run: resolve every destination, persist the id map,
/// then harvest, enrich and persist one record per resolved destination.
/// Failures below destination granularity are absorbed where they occur;
/// only cancellation propagates out of `run`.
pub struct Orchestrator {
    driver: Arc<dyn PageDriver>,
    sink: Arc<dyn RecordSink>,
    config: Config,
    cancelled: Arc<AtomicBool>,
}

impl Orchestrator {
    pub fn new(
        driver: Arc<dyn PageDriver>,
        sink: Arc<dyn RecordSink>,
        config: Config,
        cancelled: Arc<AtomicBool>,
    ) -> Self {
        Self {
            driver,
            sink,
            config,
            cancelled,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let destinations = self.resolve_destinations().await?;

        if let Err(err) = self.sink.write_location_map(&destinations) {
            warn!(error = %err, "failed to persist location map");
        }

        for destination in &destinations {
            self.ensure_active()?;

            let Some(location) = &destination.resolved else {
                info!(destination = %destination.name, "skipping unresolved destination");
                continue;
            };

            info!(destination = %destination.name, "processing destination");
            let url = search_url(&self.config.scraper.base_url, location, &self.config.stay);
            let mut properties = SearchHarvester::new(self.driver.as_ref(), &self.config.scraper)
                .harvest(&url)
                .await;

            if properties.is_empty() {
                info!(destination = %destination.name, "no properties found");
                continue;
            }
            info!(
                destination = %destination.name,
                count = properties.len(),
                "harvested result cards"
            );

            self.enrich_properties(&mut properties).await?;

            let record = DestinationRecord::new(
                destination.name.clone(),
                location.id.clone(),
                location.kind.clone(),
                self.config.stay.checkin.clone(),
                self.config.stay.checkout.clone(),
                properties,
            );
            match self.sink.write_record(&record) {
                Ok(()) => info!(
                    destination = %destination.name,
                    properties = record.total_properties,
                    "destination record written"
                ),
                // A failed write does not abort the remaining destinations.
                Err(err) => warn!(
                    destination = %destination.name,
                    error = %err,
                    "failed to write destination record"
                ),
            }
        }

        Ok(())
    }

    async fn resolve_destinations(&self) -> Result<Vec<Destination>> {
        let resolver = LocationResolver::new(self.driver.as_ref(), &self.config.scraper);
        let mut destinations = Vec::with_capacity(self.config.destinations.len());

        for name in &self.config.destinations {
            self.ensure_active()?;
            let destination = match resolver.resolve(name, &self.config.country_hint).await {
                Some(location) => Destination::resolved(name.clone(), location),
                None => {
                    warn!(destination = %name, "could not resolve, will be skipped");
                    Destination::unresolved(name.clone())
                }
            };
            destinations.push(destination);
        }

        Ok(destinations)
    }

    async fn enrich_properties(&self, properties: &mut [PropertySummary]) -> Result<()> {
        let pause = Duration::from_millis(self.config.scraper.listing_pause_ms);
        let total = properties.len();

        for (index, property) in properties.iter_mut().enumerate() {
            self.ensure_active()?;

            if !property.enrichable() {
                debug!(
                    title = %property.title,
                    url = %property.detail_url,
                    "detail URL not absolute, keeping listing unenriched"
                );
                continue;
            }

            info!(title = %property.title, "enriching listing {}/{total}", index + 1);
            let detail = DetailEnricher::new(self.driver.as_ref(), &self.config.scraper)
                .enrich(&property.detail_url)
                .await;
            property.apply_detail(detail);

            property.reviews = ReviewPager::new(self.driver.as_ref(), &self.config.scraper)
                .collect(self.config.scraper.max_review_pages)
                .await;
            info!(
                title = %property.title,
                reviews = property.reviews.len(),
                "listing enriched"
            );

            tokio::time::sleep(pause).await;
        }

        Ok(())
    }

    fn ensure_active(&self) -> Result<()> {
        if self.cancelled.load(Ordering::SeqCst) {
            Err(HarvestError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Results-query URL for a resolved location and stay window.
pub fn search_url(base_url: &str, location: &ResolvedLocation, stay: &StayConfig) -> String {
    let pairs = [
        ("dest_id", location.id.clone()),
        ("dest_type", location.kind.clone()),
        ("checkin", stay.checkin.clone()),
        ("checkout", stay.checkout.clone()),
        ("group_adults", stay.adults.to_string()),
        ("no_rooms", stay.rooms.to_string()),
        ("group_children", stay.children.to_string()),
    ];

    if let Ok(parsed) = Url::parse(base_url)
        && let Ok(mut joined) = parsed.join("searchresults.html")
    {
        {
            let mut qp = joined.query_pairs_mut();
            for (key, value) in &pairs {
                qp.append_pair(key, value);
            }
        }
        return joined.to_string();
    }

    // Fallback: manual construction if the base URL cannot be parsed
    let encoded: String = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&pairs)
        .finish();
    format!("{base_url}/searchresults.html?{encoded}")
}
