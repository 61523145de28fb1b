use std::collections::HashSet;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::types::ScraperConfig;
use crate::domain::review::Review;
use crate::extract;
use crate::ports::page_driver::PageDriver;
use crate::selectors;

/// States of the review-modal walk. `Closed` is the only terminal state;
/// an absent trigger or modal short-circuits straight to it with an empty
/// result, which is a normal outcome for properties with few reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    Start,
    ModalOpening,
    ModalOpen,
    PageExtracted,
    Exhausted,
    Closed,
}

/// Walks the paginated review modal: force-renders each page, extracts its
/// cards, admits only first-seen titles, and advances until the page cap or
/// the next-page control gives out.
pub struct ReviewPager<'a> {
    driver: &'a dyn PageDriver,
    config: &'a ScraperConfig,
    state: PagerState,
    seen_titles: HashSet<String>,
    reviews: Vec<Review>,
    pages_extracted: u32,
}

impl<'a> ReviewPager<'a> {
    pub fn new(driver: &'a dyn PageDriver, config: &'a ScraperConfig) -> Self {
        Self {
            driver,
            config,
            state: PagerState::Start,
            seen_titles: HashSet::new(),
            reviews: Vec::new(),
            pages_extracted: 0,
        }
    }

    /// Run the machine to completion. Halts within `max_pages` extractions:
    /// every loop iteration either extracts a page or moves strictly toward
    /// `Closed`.
    pub async fn collect(mut self, max_pages: u32) -> Vec<Review> {
        while self.state != PagerState::Closed {
            self.state = match self.state {
                PagerState::Start => self.open_modal().await,
                PagerState::ModalOpening => self.await_modal().await,
                PagerState::ModalOpen | PagerState::PageExtracted => {
                    self.extract_page(max_pages).await
                }
                PagerState::Exhausted => self.close_modal().await,
                PagerState::Closed => PagerState::Closed,
            };
        }
        self.reviews
    }

    async fn open_modal(&mut self) -> PagerState {
        let timeout = Duration::from_secs(self.config.modal_wait_secs);
        if let Err(err) = self
            .driver
            .wait_for(selectors::READ_ALL_REVIEWS, timeout)
            .await
        {
            debug!(error = %err, "read-all-reviews trigger not available");
            return PagerState::Closed;
        }
        match self.driver.click(selectors::READ_ALL_REVIEWS).await {
            Ok(()) => PagerState::ModalOpening,
            Err(err) => {
                debug!(error = %err, "read-all-reviews trigger not clickable");
                PagerState::Closed
            }
        }
    }

    async fn await_modal(&mut self) -> PagerState {
        let timeout = Duration::from_secs(self.config.modal_wait_secs);
        match self.driver.wait_for(selectors::REVIEWS_MODAL, timeout).await {
            Ok(()) => PagerState::ModalOpen,
            Err(err) => {
                debug!(error = %err, "review modal never appeared");
                PagerState::Closed
            }
        }
    }

    async fn extract_page(&mut self, max_pages: u32) -> PagerState {
        if self.pages_extracted >= max_pages {
            return PagerState::Exhausted;
        }

        self.render_full_page().await;

        let html = match self.driver.content().await {
            Ok(html) => html,
            Err(err) => {
                warn!(error = %err, "could not read review modal content");
                return PagerState::Exhausted;
            }
        };

        let mut admitted = 0usize;
        for review in extract::reviews::parse_modal_reviews(&html) {
            if self.seen_titles.insert(review.title.clone()) {
                self.reviews.push(review);
                admitted += 1;
            }
        }
        self.pages_extracted += 1;
        debug!(
            page = self.pages_extracted,
            admitted,
            total = self.reviews.len(),
            "review page extracted"
        );

        if self.pages_extracted >= max_pages {
            return PagerState::Exhausted;
        }
        if self.advance().await {
            PagerState::PageExtracted
        } else {
            PagerState::Exhausted
        }
    }

    /// Force-render all reviews on the current modal page by scrolling its
    /// internal container until the scroll height settles, hard-capped per
    /// page so a misbehaving modal cannot stall the walk.
    async fn render_full_page(&self) {
        let pause = Duration::from_millis(self.config.modal_scroll_pause_ms);
        let mut last_height: i64 = -1;

        for _ in 0..self.config.max_modal_scroll_rounds {
            let Ok(before) = self.driver.eval(&modal_height_js()).await else {
                return;
            };
            let before = before.as_i64().unwrap_or(0);
            if self.driver.eval(&modal_scroll_js()).await.is_err() {
                return;
            }
            tokio::time::sleep(pause).await;

            let Ok(after) = self.driver.eval(&modal_height_js()).await else {
                return;
            };
            let after = after.as_i64().unwrap_or(0);
            if after == last_height || after == before {
                return;
            }
            last_height = after;
        }
    }

    /// Click the next-page control if it exists and is enabled. Any other
    /// outcome is a non-raising advance failure.
    async fn advance(&self) -> bool {
        match self.driver.eval(&advance_js()).await {
            Ok(value) if value.as_bool() == Some(true) => {
                tokio::time::sleep(Duration::from_millis(self.config.page_settle_ms)).await;
                true
            }
            Ok(_) => {
                debug!("next-page control absent or disabled");
                false
            }
            Err(err) => {
                debug!(error = %err, "next-page advance failed");
                false
            }
        }
    }

    /// UI cleanup only; the collected reviews are already final.
    async fn close_modal(&mut self) -> PagerState {
        if let Err(err) = self.driver.click(selectors::REVIEWS_CLOSE).await {
            debug!(error = %err, "modal close skipped");
        }
        PagerState::Closed
    }
}

fn modal_height_js() -> String {
    format!(
        "(function() {{ var m = document.querySelector('{}'); return m ? m.scrollHeight : 0; }})()",
        selectors::REVIEWS_MODAL
    )
}

fn modal_scroll_js() -> String {
    format!(
        "(function() {{ var m = document.querySelector('{}'); if (m) m.scrollTop = m.scrollHeight; }})()",
        selectors::REVIEWS_MODAL
    )
}

fn advance_js() -> String {
    format!(
        "(function() {{ var b = document.querySelector('{}'); if (!b || b.disabled) return false; b.click(); return true; }})()",
        selectors::REVIEWS_NEXT_PAGE
    )
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::error::HarvestError;
    use crate::test_helpers::{modal_html, MockPageDriver};

    /// Drives the pager over scripted modal pages. `pages[i]` is the set of
    /// review titles rendered after `i` next-clicks; clicking past the last
    /// page is reported as a disabled control.
    fn paged_driver(pages: Vec<Vec<&'static str>>, advances: Arc<AtomicU32>) -> MockPageDriver {
        let page_for_content = Arc::new(AtomicU32::new(0));
        let page_for_eval = Arc::clone(&page_for_content);
        let total = pages.len() as u32;

        MockPageDriver::new()
            .with_eval(move |js| {
                if js.contains("scrollTop") {
                    Ok(serde_json::Value::Null)
                } else if js.contains("scrollHeight") {
                    Ok(serde_json::json!(1200))
                } else {
                    // next-page control
                    let current = page_for_eval.load(Ordering::SeqCst);
                    if current + 1 < total {
                        page_for_eval.store(current + 1, Ordering::SeqCst);
                        advances.fetch_add(1, Ordering::SeqCst);
                        Ok(serde_json::json!(true))
                    } else {
                        Ok(serde_json::json!(false))
                    }
                }
            })
            .with_content(move || {
                let current = page_for_content.load(Ordering::SeqCst) as usize;
                Ok(modal_html(&pages[current]))
            })
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_pages_dedup_and_cap() {
        // 3 pages of 2 reviews, page 2 repeats one title from page 1;
        // max_pages=2 must yield exactly 3 unique reviews and never click
        // into page 3.
        let advances = Arc::new(AtomicU32::new(0));
        let driver = paged_driver(
            vec![
                vec!["Lovely", "Loud at night"],
                vec!["Loud at night", "Would return"],
                vec!["Never seen", "Also never seen"],
            ],
            Arc::clone(&advances),
        );
        let config = ScraperConfig::default();

        let reviews = ReviewPager::new(&driver, &config).collect(2).await;

        let titles: Vec<&str> = reviews.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Lovely", "Loud at night", "Would return"]);
        assert_eq!(advances.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn halts_at_page_cap_even_when_next_never_disables() {
        let advances = Arc::new(AtomicU32::new(0));
        // 10 distinct pages available, next always clickable within them.
        let pages = vec![
            vec!["p0"],
            vec!["p1"],
            vec!["p2"],
            vec!["p3"],
            vec!["p4"],
            vec!["p5"],
            vec!["p6"],
            vec!["p7"],
            vec!["p8"],
            vec!["p9"],
        ];
        let driver = paged_driver(pages, Arc::clone(&advances));
        let config = ScraperConfig::default();

        let reviews = ReviewPager::new(&driver, &config).collect(5).await;
        assert_eq!(reviews.len(), 5);
        assert_eq!(advances.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_when_next_control_reports_disabled() {
        let advances = Arc::new(AtomicU32::new(0));
        let driver = paged_driver(vec![vec!["only page"]], Arc::clone(&advances));
        let config = ScraperConfig::default();

        let reviews = ReviewPager::new(&driver, &config).collect(5).await;
        assert_eq!(reviews.len(), 1);
        assert_eq!(advances.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn missing_trigger_is_a_normal_empty_result() {
        let contents = Arc::new(AtomicU32::new(0));
        let contents_probe = Arc::clone(&contents);
        let driver = MockPageDriver::new()
            .with_wait_for(|selector, _| {
                Err(HarvestError::WaitTimeout {
                    selector: selector.into(),
                })
            })
            .with_content(move || {
                contents_probe.fetch_add(1, Ordering::SeqCst);
                Ok("<html></html>".into())
            });
        let config = ScraperConfig::default();

        let reviews = ReviewPager::new(&driver, &config).collect(5).await;
        assert!(reviews.is_empty());
        // Straight to Closed: no page content was ever read.
        assert_eq!(contents.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn intercepted_trigger_click_closes_empty() {
        let driver = MockPageDriver::new().with_click(|selector| {
            if selector == selectors::READ_ALL_REVIEWS {
                Err(HarvestError::Blocked {
                    reason: "overlay".into(),
                })
            } else {
                Ok(())
            }
        });
        let config = ScraperConfig::default();

        let reviews = ReviewPager::new(&driver, &config).collect(5).await;
        assert!(reviews.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn modal_never_appearing_closes_empty() {
        let driver = MockPageDriver::new().with_wait_for(|selector, _| {
            if selector == selectors::REVIEWS_MODAL {
                Err(HarvestError::WaitTimeout {
                    selector: selector.into(),
                })
            } else {
                Ok(())
            }
        });
        let config = ScraperConfig::default();

        let reviews = ReviewPager::new(&driver, &config).collect(5).await;
        assert!(reviews.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn blocked_close_control_does_not_affect_result() {
        let advances = Arc::new(AtomicU32::new(0));
        let driver = paged_driver(vec![vec!["a", "b"]], Arc::clone(&advances)).with_click(
            |selector| {
                if selector == selectors::REVIEWS_CLOSE {
                    Err(HarvestError::Blocked {
                        reason: "detached".into(),
                    })
                } else {
                    Ok(())
                }
            },
        );
        let config = ScraperConfig::default();

        let reviews = ReviewPager::new(&driver, &config).collect(3).await;
        assert_eq!(reviews.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_page_cap_extracts_nothing() {
        let advances = Arc::new(AtomicU32::new(0));
        let driver = paged_driver(vec![vec!["a"]], Arc::clone(&advances));
        let config = ScraperConfig::default();

        let reviews = ReviewPager::new(&driver, &config).collect(0).await;
        assert!(reviews.is_empty());
    }
}
