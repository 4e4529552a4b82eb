//! Page loaders: the seam between the scrapers and whatever renders a page.
//!
//! The scrapers only need three things from a browser: navigate to a URL,
//! wait for a container element to show up, and hand back the rendered HTML.
//! [`PageLoader`] captures exactly that, so the extraction logic can be
//! tested against fixture HTML and the engine can be swapped.
//!
//! # Implementations
//!
//! | Loader | Engine | Use for |
//! |--------|--------|---------|
//! | [`WebDriverLoader`] | `fantoccini` against chromedriver | Client-rendered pages (Framework7 kitchen sink) |
//! | [`HttpLoader`] | `reqwest` GET | Server-rendered pages, or when no WebDriver is running |

use crate::error::ScrapeError;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use scraper::{Html, Selector};
use serde_json::json;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Desktop Chrome user agent sent by both loaders.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Trait for anything that can render a page and return its HTML.
pub trait PageLoader {
    /// Navigate to `url`, wait up to `timeout` for `wait_selector` to match,
    /// and return the page's HTML.
    async fn load(
        &mut self,
        url: &str,
        wait_selector: &str,
        timeout: Duration,
    ) -> Result<String, ScrapeError>;

    /// Release the underlying session.
    async fn close(&mut self) -> Result<(), ScrapeError>;
}

/// A single WebDriver session, reused for every source in a run.
pub struct WebDriverLoader {
    client: Client,
}

impl fmt::Debug for WebDriverLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebDriverLoader").finish_non_exhaustive()
    }
}

impl WebDriverLoader {
    /// Open a Chrome session on the WebDriver server at `webdriver_url`.
    ///
    /// # Arguments
    ///
    /// * `webdriver_url` - e.g. `http://localhost:9515` for a local chromedriver
    /// * `headless` - pass `--headless=new` to Chrome
    /// * `user_agent` - user agent string for every request in the session
    #[instrument(level = "info", skip(user_agent))]
    pub async fn connect(
        webdriver_url: &str,
        headless: bool,
        user_agent: &str,
    ) -> Result<Self, ScrapeError> {
        let mut args = vec![
            format!("--user-agent={user_agent}"),
            "--window-size=1280,1024".to_string(),
        ];
        if headless {
            args.push("--headless=new".to_string());
            args.push("--disable-gpu".to_string());
        }

        let mut caps = serde_json::Map::new();
        caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await?;
        info!("Browser session started");

        Ok(Self { client })
    }
}

impl PageLoader for WebDriverLoader {
    #[instrument(level = "info", skip(self, timeout))]
    async fn load(
        &mut self,
        url: &str,
        wait_selector: &str,
        timeout: Duration,
    ) -> Result<String, ScrapeError> {
        let t0 = Instant::now();
        self.client.goto(url).await?;

        match self
            .client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(wait_selector))
            .await
        {
            Ok(_) => {}
            Err(CmdError::WaitTimeout) => {
                return Err(ScrapeError::SelectorNotFound {
                    selector: wait_selector.to_string(),
                    url: url.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        let html = self.client.source().await?;
        debug!(
            bytes = html.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Page rendered"
        );
        Ok(html)
    }

    async fn close(&mut self) -> Result<(), ScrapeError> {
        self.client.clone().close().await?;
        info!("Browser session closed");
        Ok(())
    }
}

/// Plain HTTP loader for pages that are rendered on the server.
///
/// There is nothing to wait for, so the wait selector is checked against the
/// fetched document instead; a missing container is reported the same way a
/// browser wait timeout is.
#[derive(Debug, Clone)]
pub struct HttpLoader {
    client: reqwest::Client,
}

impl HttpLoader {
    pub fn new(user_agent: &str) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl PageLoader for HttpLoader {
    #[instrument(level = "info", skip(self, timeout))]
    async fn load(
        &mut self,
        url: &str,
        wait_selector: &str,
        timeout: Duration,
    ) -> Result<String, ScrapeError> {
        let html = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        if !contains_selector(&html, wait_selector)? {
            warn!(selector = wait_selector, "Container element missing from response");
            return Err(ScrapeError::SelectorNotFound {
                selector: wait_selector.to_string(),
                url: url.to_string(),
            });
        }
        debug!(bytes = html.len(), "Fetched page");
        Ok(html)
    }

    async fn close(&mut self) -> Result<(), ScrapeError> {
        Ok(())
    }
}

/// Whether at least one element in `html` matches `selector`.
pub fn contains_selector(html: &str, selector: &str) -> Result<bool, ScrapeError> {
    let selector =
        Selector::parse(selector).map_err(|_| ScrapeError::InvalidSelector(selector.to_string()))?;
    let document = Html::parse_document(html);
    Ok(document.select(&selector).next().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_selector() {
        let html = r#"<html><body><div class="page-content"><p>hi</p></div></body></html>"#;
        assert!(contains_selector(html, ".page-content").unwrap());
        assert!(!contains_selector(html, "nav").unwrap());
    }

    #[test]
    fn test_contains_selector_invalid() {
        let result = contains_selector("<html></html>", "a >>> b");
        assert!(matches!(result, Err(ScrapeError::InvalidSelector(_))));
    }

    #[test]
    fn test_http_loader_builds() {
        assert!(HttpLoader::new(DEFAULT_USER_AGENT).is_ok());
    }
}
