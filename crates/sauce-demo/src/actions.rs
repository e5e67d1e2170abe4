// Action wrappers - navigation and element interaction with suite timeouts
//
// Every function accepts either a selector string or an existing Locator, so
// page objects can keep plain selector constants and still compose locators
// (`nth`, chained) where they need to.

use crate::error::{Error, Result};
use crate::page_context::PageContext;
use async_trait::async_trait;
use playwright_rs::{ClickOptions, FillOptions, GotoOptions, Locator, Page, WaitUntil};
use std::time::{Duration, Instant};

/// Poll interval while waiting for a navigation to commit.
const NAVIGATION_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A selector string or a ready-made Locator.
#[async_trait]
pub trait IntoLocator: Send {
    async fn into_locator(self, page: &Page) -> Locator;
}

#[async_trait]
impl<'a> IntoLocator for &'a str {
    async fn into_locator(self, page: &Page) -> Locator {
        page.locator(self).await
    }
}

#[async_trait]
impl IntoLocator for String {
    async fn into_locator(self, page: &Page) -> Locator {
        page.locator(&self).await
    }
}

#[async_trait]
impl<'a> IntoLocator for &'a String {
    async fn into_locator(self, page: &Page) -> Locator {
        page.locator(self).await
    }
}

#[async_trait]
impl IntoLocator for Locator {
    async fn into_locator(self, _page: &Page) -> Locator {
        self
    }
}

#[async_trait]
impl<'a> IntoLocator for &'a Locator {
    async fn into_locator(self, _page: &Page) -> Locator {
        self.clone()
    }
}

/// Resolves a selector or Locator against the context's page.
pub async fn get_locator(ctx: &PageContext, target: impl IntoLocator) -> Locator {
    target.into_locator(ctx.page()).await
}

/// Navigates to `url` and waits for the load event.
pub async fn goto_url(ctx: &PageContext, url: &str) -> Result<()> {
    let options = GotoOptions::new()
        .timeout(ctx.config().navigation_timeout)
        .wait_until(WaitUntil::Load);
    ctx.page()
        .goto(url, Some(options))
        .await
        .map_err(|e| Error::from(e).context(format!("Navigating to {url}")))?;
    Ok(())
}

pub async fn click(ctx: &PageContext, target: impl IntoLocator) -> Result<()> {
    let locator = get_locator(ctx, target).await;
    locator.click(Some(click_options(ctx))).await?;
    Ok(())
}

/// Clicks and waits until the page has navigated away from its current URL.
pub async fn click_and_navigate(ctx: &PageContext, target: impl IntoLocator) -> Result<()> {
    let before = ctx.page().url();
    let locator = get_locator(ctx, target).await;
    let selector = locator.selector().to_string();
    locator.click(Some(click_options(ctx))).await?;

    let timeout = ctx.config().navigation_timeout;
    let start = Instant::now();
    while ctx.page().url() == before {
        if start.elapsed() >= timeout {
            return Err(Error::Timeout(format!(
                "Clicking '{selector}' did not navigate away from {before} within {timeout:?}"
            )));
        }
        tokio::time::sleep(NAVIGATION_POLL_INTERVAL).await;
    }
    tracing::debug!("Navigated from {} to {}", before, ctx.page().url());
    Ok(())
}

pub async fn fill(ctx: &PageContext, target: impl IntoLocator, text: &str) -> Result<()> {
    let locator = get_locator(ctx, target).await;
    let options = FillOptions::builder()
        .timeout(ctx.config().action_timeout.as_millis() as f64)
        .build();
    locator.fill(text, Some(options)).await?;
    Ok(())
}

fn click_options(ctx: &PageContext) -> ClickOptions {
    ClickOptions::builder()
        .timeout(ctx.config().action_timeout.as_millis() as f64)
        .build()
}
