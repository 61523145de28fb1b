use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::ports::page_driver::PageDriver;

type NavigateFn = Box<dyn FnMut(&str) -> Result<()> + Send>;
type WaitForFn = Box<dyn FnMut(&str, Duration) -> Result<()> + Send>;
type ClickFn = Box<dyn FnMut(&str) -> Result<()> + Send>;
type TypeTextFn = Box<dyn FnMut(&str, &str) -> Result<()> + Send>;
type ClearFn = Box<dyn FnMut(&str) -> Result<()> + Send>;
type PressKeyFn = Box<dyn FnMut(&str, &str) -> Result<()> + Send>;
type CurrentUrlFn = Box<dyn FnMut() -> Result<String> + Send>;
type EvalFn = Box<dyn FnMut(&str) -> Result<serde_json::Value> + Send>;
type ContentFn = Box<dyn FnMut() -> Result<String> + Send>;

/// Scripted `PageDriver` for pipeline tests. Every method defaults to a
/// benign success; override the ones a scenario cares about. Closures are
/// `FnMut` so a script can keep per-call state (page counters, height
/// sequences) without reaching for shared cells.
pub struct MockPageDriver {
    navigate_fn: Mutex<NavigateFn>,
    wait_for_fn: Mutex<WaitForFn>,
    click_fn: Mutex<ClickFn>,
    type_text_fn: Mutex<TypeTextFn>,
    clear_fn: Mutex<ClearFn>,
    press_key_fn: Mutex<PressKeyFn>,
    current_url_fn: Mutex<CurrentUrlFn>,
    eval_fn: Mutex<EvalFn>,
    content_fn: Mutex<ContentFn>,
}

impl Default for MockPageDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPageDriver {
    pub fn new() -> Self {
        Self {
            navigate_fn: Mutex::new(Box::new(|_| Ok(()))),
            wait_for_fn: Mutex::new(Box::new(|_, _| Ok(()))),
            click_fn: Mutex::new(Box::new(|_| Ok(()))),
            type_text_fn: Mutex::new(Box::new(|_, _| Ok(()))),
            clear_fn: Mutex::new(Box::new(|_| Ok(()))),
            press_key_fn: Mutex::new(Box::new(|_, _| Ok(()))),
            current_url_fn: Mutex::new(Box::new(|| Ok("about:blank".into()))),
            eval_fn: Mutex::new(Box::new(|_| Ok(serde_json::Value::Null))),
            content_fn: Mutex::new(Box::new(|| Ok("<html></html>".into()))),
        }
    }

    #[must_use]
    pub fn with_navigate(self, f: impl FnMut(&str) -> Result<()> + Send + 'static) -> Self {
        *self.navigate_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_wait_for(
        self,
        f: impl FnMut(&str, Duration) -> Result<()> + Send + 'static,
    ) -> Self {
        *self.wait_for_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_click(self, f: impl FnMut(&str) -> Result<()> + Send + 'static) -> Self {
        *self.click_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_type_text(
        self,
        f: impl FnMut(&str, &str) -> Result<()> + Send + 'static,
    ) -> Self {
        *self.type_text_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_press_key(
        self,
        f: impl FnMut(&str, &str) -> Result<()> + Send + 'static,
    ) -> Self {
        *self.press_key_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_current_url(self, f: impl FnMut() -> Result<String> + Send + 'static) -> Self {
        *self.current_url_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_eval(
        self,
        f: impl FnMut(&str) -> Result<serde_json::Value> + Send + 'static,
    ) -> Self {
        *self.eval_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_content(self, f: impl FnMut() -> Result<String> + Send + 'static) -> Self {
        *self.content_fn.lock().unwrap() = Box::new(f);
        self
    }
}

#[async_trait]
impl PageDriver for MockPageDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        (self.navigate_fn.lock().unwrap())(url)
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<()> {
        (self.wait_for_fn.lock().unwrap())(selector, timeout)
    }

    async fn click(&self, selector: &str) -> Result<()> {
        (self.click_fn.lock().unwrap())(selector)
    }

    async fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        (self.type_text_fn.lock().unwrap())(selector, text)
    }

    async fn clear_input(&self, selector: &str) -> Result<()> {
        (self.clear_fn.lock().unwrap())(selector)
    }

    async fn press_key(&self, selector: &str, key: &str) -> Result<()> {
        (self.press_key_fn.lock().unwrap())(selector, key)
    }

    async fn current_url(&self) -> Result<String> {
        (self.current_url_fn.lock().unwrap())()
    }

    async fn eval(&self, js: &str) -> Result<serde_json::Value> {
        (self.eval_fn.lock().unwrap())(js)
    }

    async fn content(&self) -> Result<String> {
        (self.content_fn.lock().unwrap())()
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// Minimal review-modal document with one card per title.
pub fn modal_html(titles: &[&str]) -> String {
    let cards: String = titles
        .iter()
        .map(|title| {
            format!(
                r#"<div data-testid="review-card">
                    <h4 data-testid="review-title">{title}</h4>
                    <span data-testid="review-date">May 2025</span>
                </div>"#
            )
        })
        .collect();
    format!(r#"<html><body><div data-testid="fr-reviews-modal">{cards}</div></body></html>"#)
}
