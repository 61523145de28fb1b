use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::types::ScraperConfig;
use crate::domain::property::PropertySummary;
use crate::error::Result;
use crate::extract;
use crate::ports::page_driver::PageDriver;
use crate::selectors;

const DOCUMENT_HEIGHT_JS: &str = "document.body.scrollHeight";
const SCROLL_TO_BOTTOM_JS: &str = "window.scrollTo(0, document.body.scrollHeight);";

/// Drives a search results page to full render (lazy-load exhausted), then
/// extracts every result card in one pass.
pub struct SearchHarvester<'a> {
    driver: &'a dyn PageDriver,
    config: &'a ScraperConfig,
}

impl<'a> SearchHarvester<'a> {
    pub fn new(driver: &'a dyn PageDriver, config: &'a ScraperConfig) -> Self {
        Self { driver, config }
    }

    /// An empty result is the "nothing found" outcome, not an error; driver
    /// failures are absorbed here and also produce an empty harvest.
    pub async fn harvest(&self, search_url: &str) -> Vec<PropertySummary> {
        match self.try_harvest(search_url).await {
            Ok(properties) => properties,
            Err(err) => {
                warn!(url = search_url, error = %err, "harvest aborted");
                Vec::new()
            }
        }
    }

    async fn try_harvest(&self, search_url: &str) -> Result<Vec<PropertySummary>> {
        self.driver.navigate(search_url).await?;

        let timeout = Duration::from_secs(self.config.results_wait_secs);
        if let Err(err) = self.driver.wait_for(selectors::PROPERTY_CARD, timeout).await {
            if err.is_transient() {
                info!("results page showed no property cards");
                return Ok(Vec::new());
            }
            return Err(err);
        }

        self.scroll_to_end().await?;

        let html = self.driver.content().await?;
        Ok(extract::search::parse_property_cards(&html))
    }

    /// Scroll until the document height stops growing. Convergence is the
    /// expected exit; the round cap only guards against a page that keeps
    /// inflating its height forever.
    async fn scroll_to_end(&self) -> Result<()> {
        let pause = Duration::from_millis(self.config.scroll_pause_ms);
        let mut last_height = self.document_height().await?;

        for round in 0..self.config.max_scroll_rounds {
            self.driver.eval(SCROLL_TO_BOTTOM_JS).await?;
            tokio::time::sleep(pause).await;

            let height = self.document_height().await?;
            if height == last_height {
                debug!(rounds = round + 1, height, "lazy-load converged");
                return Ok(());
            }
            last_height = height;
        }

        warn!(
            cap = self.config.max_scroll_rounds,
            "scroll cap reached before height converged"
        );
        Ok(())
    }

    async fn document_height(&self) -> Result<i64> {
        let value = self.driver.eval(DOCUMENT_HEIGHT_JS).await?;
        Ok(value.as_i64().unwrap_or(0))
    }
}
