use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::{debug, info};

use crate::config::types::ScraperConfig;
use crate::error::{HarvestError, Result};
use crate::ports::page_driver::PageDriver;

/// `PageDriver` backed by a headless Chrome session. One tab for the whole
/// run; the pipeline is strictly sequential over it.
pub struct ChromeDriver {
    // Kept alive for the tab's lifetime; the process dies with the handle.
    _browser: Browser,
    tab: Arc<Tab>,
}

impl ChromeDriver {
    /// The only fatal failure point in the program: without a browser there
    /// is nothing left to do.
    pub fn launch(config: &ScraperConfig) -> Result<Self> {
        info!(headless = config.headless, "launching Chrome");

        let options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((1280, 800)))
            .args(vec![OsStr::new("--disable-blink-features=AutomationControlled")])
            .build()
            .map_err(|e| HarvestError::Browser(format!("failed to build launch options: {e}")))?;

        let browser = Browser::new(options)
            .map_err(|e| HarvestError::Browser(format!("failed to launch Chrome: {e}")))?;
        let tab = browser.new_tab().map_err(browser_err)?;

        tab.set_user_agent(&config.user_agent, None, None)
            .map_err(browser_err)?;
        // Scrub the automation flag before the site gets a look at it.
        let _ = tab.evaluate(
            "Object.defineProperty(navigator, 'webdriver', {get: () => undefined})",
            false,
        );

        info!("Chrome ready");
        Ok(Self {
            _browser: browser,
            tab,
        })
    }
}

fn browser_err(err: impl std::fmt::Display) -> HarvestError {
    HarvestError::Browser(err.to_string())
}

#[async_trait]
impl PageDriver for ChromeDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        debug!(url, "navigating");
        self.tab.navigate_to(url).map_err(browser_err)?;
        self.tab.wait_until_navigated().map_err(browser_err)?;
        Ok(())
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map(|_| ())
            .map_err(|_| HarvestError::WaitTimeout {
                selector: selector.into(),
            })
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let element = self
            .tab
            .find_element(selector)
            .map_err(|_| HarvestError::Blocked {
                reason: format!("'{selector}' not present"),
            })?;
        element.click().map(|_| ()).map_err(|e| HarvestError::Blocked {
            reason: e.to_string(),
        })
    }

    async fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let element = self
            .tab
            .find_element(selector)
            .map_err(|_| HarvestError::WaitTimeout {
                selector: selector.into(),
            })?;
        element.type_into(text).map(|_| ()).map_err(browser_err)
    }

    async fn clear_input(&self, selector: &str) -> Result<()> {
        let element = self
            .tab
            .find_element(selector)
            .map_err(|_| HarvestError::WaitTimeout {
                selector: selector.into(),
            })?;
        element.click().map_err(browser_err)?;
        // Select-all + delete; a value reset alone gets re-asserted by the
        // page's own scripts.
        self.tab
            .evaluate(
                &format!("document.querySelector('{selector}').select();"),
                false,
            )
            .map_err(browser_err)?;
        self.tab.press_key("Delete").map_err(browser_err)?;
        Ok(())
    }

    async fn press_key(&self, selector: &str, key: &str) -> Result<()> {
        let element = self
            .tab
            .find_element(selector)
            .map_err(|_| HarvestError::WaitTimeout {
                selector: selector.into(),
            })?;
        element.focus().map_err(browser_err)?;
        self.tab.press_key(key).map_err(browser_err)?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }

    async fn eval(&self, js: &str) -> Result<serde_json::Value> {
        let result = self.tab.evaluate(js, false).map_err(browser_err)?;
        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    async fn content(&self) -> Result<String> {
        self.tab.get_content().map_err(browser_err)
    }

    async fn close(&self) -> Result<()> {
        debug!("closing browser tab");
        let _ = self.tab.close(true);
        Ok(())
    }
}
