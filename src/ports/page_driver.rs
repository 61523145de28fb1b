use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// The one shared browser session. Exactly one logical "current page" exists
/// at a time; each pipeline component assumes exclusive ownership of it for
/// the duration of its call.
///
/// Every wait is bounded by the caller-supplied timeout and surfaces
/// `HarvestError::WaitTimeout`; an intercepted click or disabled control
/// surfaces `HarvestError::Blocked`. Callers treat both as "move on", never
/// as run-ending failures.
#[async_trait]
pub trait PageDriver: Send + Sync {
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Block until `selector` matches an element, or `WaitTimeout`.
    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<()>;

    async fn click(&self, selector: &str) -> Result<()>;

    async fn type_text(&self, selector: &str, text: &str) -> Result<()>;

    /// Select-all-and-delete the input's contents. A plain value reset is not
    /// enough against pre-filled search boxes that re-assert their state.
    async fn clear_input(&self, selector: &str) -> Result<()>;

    /// Press a named key ("Enter", "Delete", ...) with `selector` focused.
    async fn press_key(&self, selector: &str, key: &str) -> Result<()>;

    async fn current_url(&self) -> Result<String>;

    /// Run a script in the page and return its JSON result.
    async fn eval(&self, js: &str) -> Result<serde_json::Value>;

    /// Full HTML of the current document, after rendering.
    async fn content(&self) -> Result<String>;

    /// Release the browser session. Idempotent; called on every exit path.
    async fn close(&self) -> Result<()>;
}
