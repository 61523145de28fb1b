use std::time::Duration;

use tracing::{debug, info, warn};
use url::Url;

use crate::config::types::ScraperConfig;
use crate::domain::destination::ResolvedLocation;
use crate::error::Result;
use crate::ports::page_driver::PageDriver;
use crate::selectors;

/// Settle after landing on the site root, before poking at the overlay.
const HOME_SETTLE: Duration = Duration::from_secs(3);
/// Settle after typing, so the suggestion list has a chance to render.
const TYPING_SETTLE: Duration = Duration::from_secs(2);

/// Turns a free-text place name into the site's internal location identifier
/// by driving the search UI and inspecting the post-search URL.
pub struct LocationResolver<'a> {
    driver: &'a dyn PageDriver,
    config: &'a ScraperConfig,
}

impl<'a> LocationResolver<'a> {
    pub fn new(driver: &'a dyn PageDriver, config: &'a ScraperConfig) -> Self {
        Self { driver, config }
    }

    /// Never fails: any error anywhere in the sequence resolves to `None`
    /// and the caller skips the destination.
    pub async fn resolve(&self, name: &str, country_hint: &str) -> Option<ResolvedLocation> {
        match self.try_resolve(name, country_hint).await {
            Ok(Some(location)) => {
                info!(
                    destination = name,
                    id = %location.id,
                    kind = %location.kind,
                    "resolved destination"
                );
                Some(location)
            }
            Ok(None) => {
                warn!(destination = name, "no location id in post-search URL");
                None
            }
            Err(err) => {
                warn!(destination = name, error = %err, "destination resolution failed");
                None
            }
        }
    }

    async fn try_resolve(
        &self,
        name: &str,
        country_hint: &str,
    ) -> Result<Option<ResolvedLocation>> {
        self.driver.navigate(&self.config.base_url).await?;
        tokio::time::sleep(HOME_SETTLE).await;

        self.dismiss_cookie_banner().await;

        let input_wait = Duration::from_secs(self.config.input_wait_secs);
        self.driver.wait_for(selectors::SEARCH_INPUT, input_wait).await?;

        // A plain clear is not enough: the box re-asserts pre-filled state.
        self.driver.clear_input(selectors::SEARCH_INPUT).await?;
        self.driver
            .type_text(selectors::SEARCH_INPUT, &format!("{name}, {country_hint}"))
            .await?;
        tokio::time::sleep(TYPING_SETTLE).await;

        if !self.pick_first_suggestion().await {
            debug!(destination = name, "no suggestion, submitting input directly");
            self.driver
                .press_key(selectors::SEARCH_INPUT, "Enter")
                .await?;
        }

        // The explicit submit control is not always rendered.
        if let Err(err) = self.driver.click(selectors::SEARCH_SUBMIT).await {
            debug!(error = %err, "search submit control not clicked");
        }

        tokio::time::sleep(Duration::from_secs(self.config.search_settle_secs)).await;

        let url = self.driver.current_url().await?;
        Ok(location_from_url(&url))
    }

    async fn pick_first_suggestion(&self) -> bool {
        let timeout = Duration::from_secs(self.config.suggestion_wait_secs);
        if self
            .driver
            .wait_for(selectors::FIRST_SUGGESTION, timeout)
            .await
            .is_err()
        {
            return false;
        }
        self.driver.click(selectors::FIRST_SUGGESTION).await.is_ok()
    }

    async fn dismiss_cookie_banner(&self) {
        let timeout = Duration::from_secs(self.config.cookie_wait_secs);
        for candidate in selectors::COOKIE_ACCEPT_CANDIDATES {
            if self.driver.wait_for(candidate, timeout).await.is_err() {
                continue;
            }
            if self.driver.click(candidate).await.is_ok() {
                debug!(selector = candidate, "dismissed cookie banner");
                return;
            }
        }
        debug!("no cookie banner matched");
    }
}

/// Read the location id and kind out of a post-search URL's query string.
/// The kind defaults to a city classification when the site leaves it out.
pub fn location_from_url(url: &str) -> Option<ResolvedLocation> {
    let parsed = Url::parse(url).ok()?;
    let mut id = None;
    let mut kind = None;
    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "dest_id" => id = Some(value.into_owned()),
            "dest_type" => kind = Some(value.into_owned()),
            _ => {}
        }
    }
    id.map(|id| ResolvedLocation::new(id, kind.unwrap_or_else(|| "city".into())))
}
