// src/browser.rs
//! Headless Chrome session: one browser process, one tab, reused for every row.
//!
//! Navigation waits for DOMContentLoaded (document no longer `loading`), not for
//! the full load event. `fetch_title` takes `&mut self`, so there is never more
//! than one navigation in flight on the tab.

use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::page::{NavigateParams, NavigateReturns};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};

use crate::config::BrowserOptions;
use crate::config::consts::{BLANK_PAGE, READY_POLL_MS};
use crate::error::CheckError;

/// Single-owner page loader: turns a URL into the title of the page it loads,
/// one call at a time, and is released exactly once.
#[allow(async_fn_in_trait)]
pub trait Navigator {
    async fn fetch_title(&mut self, url: &str) -> Result<String, CheckError>;

    async fn close(self) -> Result<(), CheckError>;
}

// Set on the outgoing document so a late read of the old page is never
// mistaken for the new one being ready.
const MARK_STALE: &str = "window.__mintCheckStale = true";
const READY_STATE: &str =
    "window.__mintCheckStale === true ? 'stale' : document.readyState";
const CLEAR_STALE: &str = "delete window.__mintCheckStale";

/// What `Page.navigate` did with the tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavKind {
    /// A new document is loading; the old one (and its marker) goes away.
    NewDocument,
    /// Fragment or history change: no loader, the marked document stays.
    SameDocument,
}

impl NavKind {
    fn of(nav: &NavigateReturns) -> Self {
        match nav.loader_id {
            Some(_) => Self::NewDocument,
            None => Self::SameDocument,
        }
    }
}

pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
    nav_timeout: Duration,
}

impl BrowserSession {
    /// Launch the browser and open the single working tab.
    pub async fn open(opts: &BrowserOptions) -> Result<Self, CheckError> {
        let mut builder = BrowserConfig::builder();
        if !opts.headless {
            builder = builder.with_head();
        }
        if opts.no_sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(exe) = &opts.executable {
            builder = builder.chrome_executable(exe);
        }
        let config = builder.build().map_err(CheckError::browser)?;

        let (mut browser, mut events) = Browser::launch(config).await.map_err(CheckError::browser)?;

        // The CDP connection only makes progress while its handler is polled.
        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if let Err(e) = event {
                    logd!("CDP handler: {e}");
                }
            }
        });

        let page = match browser.new_page(BLANK_PAGE).await {
            Ok(page) => page,
            Err(e) => {
                let _ = browser.close().await;
                let _ = browser.wait().await;
                handler.abort();
                return Err(CheckError::browser(e));
            }
        };

        logf!("Browser launched (headless: {})", opts.headless);
        Ok(Self { browser, page, handler, nav_timeout: opts.nav_timeout })
    }

    async fn wait_dom_ready(&self, url: &str) -> Result<(), CheckError> {
        let deadline = Instant::now() + self.nav_timeout;
        loop {
            // Errors here are expected mid-navigation (context torn down); keep polling.
            let state = match self.page.evaluate(READY_STATE).await {
                Ok(v) => v.into_value::<String>().ok(),
                Err(_) => None,
            };
            if matches!(state.as_deref(), Some("interactive" | "complete")) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(CheckError::navigation(
                    url,
                    format!("DOMContentLoaded not reached within {}s", self.nav_timeout.as_secs()),
                ));
            }
            sleep(Duration::from_millis(READY_POLL_MS)).await;
        }
    }
}

impl Navigator for BrowserSession {
    async fn fetch_title(&mut self, url: &str) -> Result<String, CheckError> {
        logd!("Navigating to {url}");
        let _ = self.page.evaluate(MARK_STALE).await;

        let nav = self
            .page
            .execute(NavigateParams::new(url))
            .await
            .map_err(|e| CheckError::navigation(url, e))?;
        if let Some(text) = nav.result.error_text.as_deref() {
            return Err(CheckError::navigation(url, text));
        }

        match NavKind::of(&nav.result) {
            NavKind::NewDocument => self.wait_dom_ready(url).await?,
            NavKind::SameDocument => {
                logd!("Same-document navigation to {url}");
                let _ = self.page.evaluate(CLEAR_STALE).await;
            }
        }

        let title = self
            .page
            .get_title()
            .await
            .map_err(|e| CheckError::navigation(url, e))?
            .unwrap_or_default();
        logd!("Title for {url}: {title:?}");
        Ok(title)
    }

    /// Shut the browser down and wait for the process to exit.
    async fn close(mut self) -> Result<(), CheckError> {
        let closed = self.browser.close().await.map(|_| ()).map_err(CheckError::browser);
        if let Err(e) = self.browser.wait().await {
            logw!("Waiting for browser exit: {e}");
        }
        self.handler.abort();
        let _ = self.handler.await;

        match &closed {
            Ok(()) => logf!("Browser closed"),
            Err(e) => loge!("Browser close: {e}"),
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromiumoxide::cdp::browser_protocol::network::LoaderId;

    #[test]
    fn loader_means_a_new_document() {
        let mut nav = NavigateReturns::new("F1".to_string());
        nav.loader_id = Some(LoaderId::new("L1"));
        assert_eq!(NavKind::of(&nav), NavKind::NewDocument);
    }

    #[test]
    fn fragment_jump_skips_the_ready_wait() {
        // http://x/1 -> http://x/1#prices: Chrome reports no loader.
        let nav = NavigateReturns::new("F1".to_string());
        assert_eq!(NavKind::of(&nav), NavKind::SameDocument);
    }
}
