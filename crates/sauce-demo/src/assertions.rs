// Assertion wrappers - auto-retrying checks with suite timeouts and messages
//
// Each function polls until the condition holds or the expect timeout elapses
// (TestConfig::expect_timeout unless overridden). A failing assertion returns
// Error::Assertion carrying the caller's message with the engine error as its
// source; soft assertions record both on the PageContext and let the test
// continue.
//
// See: https://playwright.dev/docs/test-assertions

use crate::actions::{IntoLocator, get_locator};
use crate::error::{Error, Result};
use crate::page_context::PageContext;
use playwright_rs::expect;
use std::future::Future;
use std::time::{Duration, Instant};

/// Poll interval for checks the engine has no built-in assertion for.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Options shared by all assertion wrappers.
///
/// A bare string converts into options carrying only a message:
///
/// ```ignore
/// expect_element_to_be_visible(&ctx, "#user-name", "Login page should be displayed").await?;
/// expect_element_to_be_visible(
///     &ctx,
///     "#inventory_container",
///     ExpectOptions::new().timeout(Duration::from_secs(1)).message("Products should show"),
/// )
/// .await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectOptions {
    pub timeout: Option<Duration>,
    pub message: Option<String>,
    /// Record the failure instead of failing immediately
    pub soft: bool,
}

impl ExpectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn soft(mut self, soft: bool) -> Self {
        self.soft = soft;
        self
    }
}

impl From<&str> for ExpectOptions {
    fn from(message: &str) -> Self {
        Self::new().message(message)
    }
}

impl From<String> for ExpectOptions {
    fn from(message: String) -> Self {
        Self::new().message(message)
    }
}

impl From<Option<ExpectOptions>> for ExpectOptions {
    fn from(options: Option<ExpectOptions>) -> Self {
        options.unwrap_or_default()
    }
}

fn timeout_for(ctx: &PageContext, options: &ExpectOptions) -> Duration {
    options.timeout.unwrap_or(ctx.config().expect_timeout)
}

/// Turns an engine assertion result into the suite's result, honoring `soft`.
async fn settle(
    ctx: &PageContext,
    options: ExpectOptions,
    assertion: impl Future<Output = playwright_rs::Result<()>>,
) -> Result<()> {
    let Err(source) = assertion.await else {
        return Ok(());
    };
    let message = options
        .message
        .unwrap_or_else(|| "Assertion failed".to_string());
    if options.soft {
        ctx.soft_assertions().record(format!("{message}: {source}"));
        return Ok(());
    }
    Err(Error::Assertion { message, source })
}

/// Asserts that the element is not in the DOM or is hidden.
pub async fn expect_element_to_be_hidden(
    ctx: &PageContext,
    target: impl IntoLocator,
    options: impl Into<ExpectOptions>,
) -> Result<()> {
    let options = options.into();
    let locator = get_locator(ctx, target).await;
    let timeout = timeout_for(ctx, &options);
    settle(ctx, options, expect(locator).with_timeout(timeout).to_be_hidden()).await
}

/// Asserts that the element is in the DOM and visible.
pub async fn expect_element_to_be_visible(
    ctx: &PageContext,
    target: impl IntoLocator,
    options: impl Into<ExpectOptions>,
) -> Result<()> {
    let options = options.into();
    let locator = get_locator(ctx, target).await;
    let timeout = timeout_for(ctx, &options);
    settle(ctx, options, expect(locator).with_timeout(timeout).to_be_visible()).await
}

/// Asserts that the element is in the DOM, visible or not.
pub async fn expect_element_to_be_attached(
    ctx: &PageContext,
    target: impl IntoLocator,
    options: impl Into<ExpectOptions>,
) -> Result<()> {
    let options = options.into();
    let locator = get_locator(ctx, target).await;
    let timeout = timeout_for(ctx, &options);

    let attached = async {
        let start = Instant::now();
        loop {
            if locator.count().await? > 0 {
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(playwright_rs::Error::AssertionTimeout(format!(
                    "Expected element '{}' to be attached, but it was not attached after {:?}",
                    locator.selector(),
                    timeout
                )));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    };
    settle(ctx, options, attached).await
}

pub async fn expect_element_to_be_enabled(
    ctx: &PageContext,
    target: impl IntoLocator,
    options: impl Into<ExpectOptions>,
) -> Result<()> {
    let options = options.into();
    let locator = get_locator(ctx, target).await;
    let timeout = timeout_for(ctx, &options);
    settle(ctx, options, expect(locator).with_timeout(timeout).to_be_enabled()).await
}

pub async fn expect_element_to_be_disabled(
    ctx: &PageContext,
    target: impl IntoLocator,
    options: impl Into<ExpectOptions>,
) -> Result<()> {
    let options = options.into();
    let locator = get_locator(ctx, target).await;
    let timeout = timeout_for(ctx, &options);
    settle(ctx, options, expect(locator).with_timeout(timeout).to_be_disabled()).await
}

pub async fn expect_element_to_be_checked(
    ctx: &PageContext,
    target: impl IntoLocator,
    options: impl Into<ExpectOptions>,
) -> Result<()> {
    let options = options.into();
    let locator = get_locator(ctx, target).await;
    let timeout = timeout_for(ctx, &options);
    settle(ctx, options, expect(locator).with_timeout(timeout).to_be_checked()).await
}

pub async fn expect_element_to_be_editable(
    ctx: &PageContext,
    target: impl IntoLocator,
    options: impl Into<ExpectOptions>,
) -> Result<()> {
    let options = options.into();
    let locator = get_locator(ctx, target).await;
    let timeout = timeout_for(ctx, &options);
    settle(ctx, options, expect(locator).with_timeout(timeout).to_be_editable()).await
}

/// Asserts the element's trimmed text equals `expected`.
pub async fn expect_element_to_have_text(
    ctx: &PageContext,
    target: impl IntoLocator,
    expected: &str,
    options: impl Into<ExpectOptions>,
) -> Result<()> {
    let options = options.into();
    let locator = get_locator(ctx, target).await;
    let timeout = timeout_for(ctx, &options);
    settle(
        ctx,
        options,
        expect(locator).with_timeout(timeout).to_have_text(expected),
    )
    .await
}

pub async fn expect_element_to_contain_text(
    ctx: &PageContext,
    target: impl IntoLocator,
    expected: &str,
    options: impl Into<ExpectOptions>,
) -> Result<()> {
    let options = options.into();
    let locator = get_locator(ctx, target).await;
    let timeout = timeout_for(ctx, &options);
    settle(
        ctx,
        options,
        expect(locator).with_timeout(timeout).to_contain_text(expected),
    )
    .await
}

pub async fn expect_element_to_have_value(
    ctx: &PageContext,
    target: impl IntoLocator,
    expected: &str,
    options: impl Into<ExpectOptions>,
) -> Result<()> {
    let options = options.into();
    let locator = get_locator(ctx, target).await;
    let timeout = timeout_for(ctx, &options);
    settle(
        ctx,
        options,
        expect(locator).with_timeout(timeout).to_have_value(expected),
    )
    .await
}

/// Asserts the page URL contains `fragment`.
pub async fn expect_page_to_contain_url(
    ctx: &PageContext,
    fragment: &str,
    options: impl Into<ExpectOptions>,
) -> Result<()> {
    let options = options.into();
    let timeout = timeout_for(ctx, &options);
    let page = ctx.page();

    let contains = async {
        let start = Instant::now();
        loop {
            let url = page.url();
            if url.contains(fragment) {
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(playwright_rs::Error::AssertionTimeout(format!(
                    "Expected page URL to contain '{fragment}', but it was '{url}' after {timeout:?}"
                )));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    };
    settle(ctx, options, contains).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_converts_into_options() {
        let options: ExpectOptions = "Login page should be displayed".into();
        assert_eq!(
            options.message.as_deref(),
            Some("Login page should be displayed")
        );
        assert_eq!(options.timeout, None);
        assert!(!options.soft);
    }

    #[test]
    fn test_builder_and_none() {
        let options = ExpectOptions::new()
            .timeout(Duration::from_secs(1))
            .message("Logged in user should see Products")
            .soft(true);
        assert_eq!(options.timeout, Some(Duration::from_secs(1)));
        assert!(options.soft);

        let none: ExpectOptions = None::<ExpectOptions>.into();
        assert_eq!(none, ExpectOptions::default());
    }
}
