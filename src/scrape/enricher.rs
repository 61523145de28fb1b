use std::time::Duration;

use tracing::{debug, warn};

use crate::config::types::ScraperConfig;
use crate::domain::property::PropertyDetail;
use crate::error::Result;
use crate::extract;
use crate::ports::page_driver::PageDriver;
use crate::selectors;

/// Loads a property's detail page and reads description, coordinates and the
/// most-popular-facilities block.
pub struct DetailEnricher<'a> {
    driver: &'a dyn PageDriver,
    config: &'a ScraperConfig,
}

impl<'a> DetailEnricher<'a> {
    pub fn new(driver: &'a dyn PageDriver, config: &'a ScraperConfig) -> Self {
        Self { driver, config }
    }

    /// Total: timeouts and driver failures all come back as the sentinel
    /// triple, never as an error.
    pub async fn enrich(&self, property_url: &str) -> PropertyDetail {
        match self.try_enrich(property_url).await {
            Ok(detail) => detail,
            Err(err) => {
                warn!(url = property_url, error = %err, "detail enrichment failed");
                unavailable()
            }
        }
    }

    async fn try_enrich(&self, property_url: &str) -> Result<PropertyDetail> {
        self.driver.navigate(property_url).await?;

        let timeout = Duration::from_secs(self.config.detail_wait_secs);
        if let Err(err) = self
            .driver
            .wait_for(selectors::DETAIL_DESCRIPTION, timeout)
            .await
        {
            if err.is_transient() {
                debug!(url = property_url, "description element never appeared");
                return Ok(unavailable());
            }
            return Err(err);
        }

        let html = self.driver.content().await?;
        Ok(extract::detail::parse_detail(&html))
    }
}

fn unavailable() -> PropertyDetail {
    PropertyDetail {
        description: extract::UNAVAILABLE_DESCRIPTION.into(),
        location: extract::UNAVAILABLE_LOCATION.into(),
        services: Vec::new(),
    }
}
