use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_destinations")]
    pub destinations: Vec<String>,
    #[serde(default = "default_country_hint")]
    pub country_hint: String,
    #[serde(default)]
    pub stay: StayConfig,
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            destinations: default_destinations(),
            country_hint: default_country_hint(),
            stay: StayConfig::default(),
            scraper: ScraperConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Date window and occupancy that parameterize every search.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StayConfig {
    #[serde(default = "default_checkin")]
    pub checkin: String,
    #[serde(default = "default_checkout")]
    pub checkout: String,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default = "default_rooms")]
    pub rooms: u32,
    #[serde(default)]
    pub children: u32,
}

impl Default for StayConfig {
    fn default() -> Self {
        Self {
            checkin: default_checkin(),
            checkout: default_checkout(),
            adults: default_adults(),
            rooms: default_rooms(),
            children: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScraperConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_true")]
    pub headless: bool,
    /// Bounded wait for the first result card on a search page.
    #[serde(default = "default_results_wait")]
    pub results_wait_secs: u64,
    /// Bounded wait for the description element on a detail page.
    #[serde(default = "default_detail_wait")]
    pub detail_wait_secs: u64,
    /// Bounded wait for the review modal and its open trigger.
    #[serde(default = "default_modal_wait")]
    pub modal_wait_secs: u64,
    /// Bounded wait for the first autocomplete suggestion.
    #[serde(default = "default_suggestion_wait")]
    pub suggestion_wait_secs: u64,
    /// Bounded wait for the destination search input on the site root.
    #[serde(default = "default_input_wait")]
    pub input_wait_secs: u64,
    /// Per-candidate wait when dismissing the cookie banner.
    #[serde(default = "default_cookie_wait")]
    pub cookie_wait_secs: u64,
    /// Settle after submitting a destination search, before URL inspection.
    #[serde(default = "default_search_settle")]
    pub search_settle_secs: u64,
    /// Pause between lazy-load scroll rounds on the results page.
    #[serde(default = "default_scroll_pause")]
    pub scroll_pause_ms: u64,
    /// Pause between scroll rounds inside the review modal.
    #[serde(default = "default_modal_scroll_pause")]
    pub modal_scroll_pause_ms: u64,
    /// Settle after advancing the review modal to its next page.
    #[serde(default = "default_page_settle")]
    pub page_settle_ms: u64,
    /// Pause between listings, between destinations.
    #[serde(default = "default_listing_pause")]
    pub listing_pause_ms: u64,
    #[serde(default = "default_max_review_pages")]
    pub max_review_pages: u32,
    /// Safety cap on results-page scroll rounds; height convergence is the
    /// expected exit.
    #[serde(default = "default_max_scroll_rounds")]
    pub max_scroll_rounds: u32,
    /// Hard cap on scroll rounds inside the review modal per page.
    #[serde(default = "default_max_modal_scroll_rounds")]
    pub max_modal_scroll_rounds: u32,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            headless: true,
            results_wait_secs: default_results_wait(),
            detail_wait_secs: default_detail_wait(),
            modal_wait_secs: default_modal_wait(),
            suggestion_wait_secs: default_suggestion_wait(),
            input_wait_secs: default_input_wait(),
            cookie_wait_secs: default_cookie_wait(),
            search_settle_secs: default_search_settle(),
            scroll_pause_ms: default_scroll_pause(),
            modal_scroll_pause_ms: default_modal_scroll_pause(),
            page_settle_ms: default_page_settle(),
            listing_pause_ms: default_listing_pause(),
            max_review_pages: default_max_review_pages(),
            max_scroll_rounds: default_max_scroll_rounds(),
            max_modal_scroll_rounds: default_max_modal_scroll_rounds(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_destinations() -> Vec<String> {
    [
        "General Villamil",
        "Salinas",
        "Montañita",
        "Puerto López",
        "Ayampe",
        "Manta",
        "Atacames",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_country_hint() -> String {
    "Ecuador".into()
}

fn default_checkin() -> String {
    "2025-11-11".into()
}

fn default_checkout() -> String {
    "2025-12-31".into()
}

fn default_adults() -> u32 {
    2
}

fn default_rooms() -> u32 {
    1
}

fn default_base_url() -> String {
    "https://www.booking.com".into()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into()
}

fn default_true() -> bool {
    true
}

fn default_results_wait() -> u64 {
    15
}

fn default_detail_wait() -> u64 {
    10
}

fn default_modal_wait() -> u64 {
    10
}

fn default_suggestion_wait() -> u64 {
    5
}

fn default_input_wait() -> u64 {
    10
}

fn default_cookie_wait() -> u64 {
    3
}

fn default_search_settle() -> u64 {
    5
}

fn default_scroll_pause() -> u64 {
    2000
}

fn default_modal_scroll_pause() -> u64 {
    1500
}

fn default_page_settle() -> u64 {
    1500
}

fn default_listing_pause() -> u64 {
    3000
}

fn default_max_review_pages() -> u32 {
    5
}

fn default_max_scroll_rounds() -> u32 {
    40
}

fn default_max_modal_scroll_rounds() -> u32 {
    15
}

fn default_output_dir() -> String {
    "booking_data".into()
}
