// Fixtures - per-test browser, context and page wiring
//
// A test builds its fixtures, runs its body against the PageContext and then
// finishes, which checks soft assertions, writes the result line and closes
// the browser:
//
// ```ignore
// let fixtures = Fixtures::builder("should login").user(&standard_user()).launch().await?;
// fixtures
//     .run(|ctx| async move {
//         ctx.login_page().navigate_to_sauce_demo_inventory_page().await?;
//         ctx.products_page().verify_products_page_is_displayed().await
//     })
//     .await?;
// ```

use crate::config::{StorageSeed, TestConfig};
use crate::error::{Error, Result};
use crate::logging::{self, TestOutcome, TestReporter};
use crate::page_context::PageContext;
use crate::pages::{LoginPage, MiniCart, ProductsPage};
use playwright_rs::{Browser, BrowserContext, Page, Playwright};
use playwright_rs_session::{HydrationReport, SessionData, Username, add_user_cookies_and_storage};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

/// Configures and launches the fixtures for one test.
#[derive(Debug)]
pub struct FixturesBuilder {
    title: String,
    config: Option<TestConfig>,
    seed: StorageSeed,
    // Resolved against the storage directory at launch
    user: Option<String>,
}

impl FixturesBuilder {
    /// Uses `config` instead of [`TestConfig::from_env`].
    pub fn config(mut self, config: TestConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Seeds the context from a storage state file.
    pub fn storage_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed = StorageSeed::Path(path.into());
        self.user = None;
        self
    }

    /// Seeds the context from the user's stored session.
    ///
    /// The path is resolved against the storage directory at launch.
    pub fn user(mut self, user: &(impl Username + ?Sized)) -> Self {
        self.user = Some(user.username().to_string());
        self
    }

    pub fn storage_state(mut self, session: SessionData) -> Self {
        self.seed = StorageSeed::Inline(session);
        self.user = None;
        self
    }

    /// Starts with no cookies and no localStorage.
    pub fn empty_storage_state(mut self) -> Self {
        self.seed = StorageSeed::Empty;
        self.user = None;
        self
    }

    fn resolve_seed(self, config: &TestConfig) -> (String, StorageSeed) {
        let seed = match self.user {
            Some(username) => StorageSeed::Path(config.session().user_auth_path(&username)),
            None => self.seed,
        };
        (self.title, seed)
    }

    /// Launches the browser and opens a page.
    pub async fn launch(mut self) -> Result<Fixtures> {
        logging::init();
        let config = self.config.take().unwrap_or_else(TestConfig::from_env);
        let (title, seed) = self.resolve_seed(&config);

        let reporter = TestReporter;
        reporter.on_test_begin(&title);

        let playwright = Playwright::launch()
            .await
            .map_err(|e| Error::from(e).context("Launching Playwright"))?;
        let browser = playwright
            .chromium()
            .launch_with_options(config.launch_options())
            .await
            .map_err(|e| Error::from(e).context("Launching chromium"))?;
        let context = browser
            .new_context_with_options(config.context_options(&seed))
            .await
            .map_err(|e| Error::from(e).context("Creating browser context"))?;
        let page = context.new_page().await?;

        let ctx = PageContext::new(page, Arc::new(config));
        Ok(Fixtures {
            title,
            playwright,
            browser,
            context,
            ctx,
            reporter,
        })
    }
}

/// Browser, context and page for a single test.
pub struct Fixtures {
    title: String,
    playwright: Playwright,
    browser: Browser,
    context: BrowserContext,
    ctx: PageContext,
    reporter: TestReporter,
}

impl Fixtures {
    pub fn builder(title: impl Into<String>) -> FixturesBuilder {
        FixturesBuilder {
            title: title.into(),
            config: None,
            seed: StorageSeed::None,
            user: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn page(&self) -> &Page {
        self.ctx.page()
    }

    pub fn ctx(&self) -> &PageContext {
        &self.ctx
    }

    pub fn context(&self) -> &BrowserContext {
        &self.context
    }

    pub fn login_page(&self) -> LoginPage {
        self.ctx.login_page()
    }

    pub fn products_page(&self) -> ProductsPage {
        self.ctx.products_page()
    }

    pub fn mini_cart_page(&self) -> MiniCart {
        self.ctx.mini_cart_page()
    }

    /// Replays the user's stored session into the running page.
    pub async fn add_user_cookies_and_storage(
        &self,
        user: &(impl Username + ?Sized),
    ) -> Result<HydrationReport> {
        let report =
            add_user_cookies_and_storage(self.page(), self.ctx.config().session(), user, None)
                .await?;
        Ok(report)
    }

    /// Runs the test body under the test timeout, then finishes the fixtures.
    ///
    /// The body's error, a timeout, or any recorded soft assertion fails the
    /// test.
    pub async fn run<F, Fut>(self, body: F) -> Result<()>
    where
        F: FnOnce(PageContext) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let budget = self.ctx.config().test_timeout;
        let result = match tokio::time::timeout(budget, body(self.ctx.clone())).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(format!(
                "Test '{}' exceeded {budget:?}",
                self.title
            ))),
        };
        self.finish(result).await
    }

    /// Checks soft assertions, reports the outcome and closes the browser.
    pub async fn finish(self, result: Result<()>) -> Result<()> {
        let result = result.and_then(|()| self.ctx.soft_assertions().assert_all());
        let outcome = match &result {
            Ok(()) => TestOutcome::Passed,
            Err(e) => TestOutcome::Failed(e.report()),
        };
        self.reporter.on_test_end(&self.title, &outcome);
        self.close().await;
        result
    }

    /// Reports the test as skipped and closes the browser.
    pub async fn skip(self, reason: impl Into<String>) {
        self.reporter
            .on_test_end(&self.title, &TestOutcome::Skipped(reason.into()));
        self.close().await;
    }

    async fn close(self) {
        if let Err(e) = self.browser.close().await {
            self.reporter
                .on_error(&format!("Closing browser failed: {e}"));
        }
        if let Err(e) = self.playwright.shutdown().await {
            tracing::debug!("Playwright shutdown: {}", e);
        }
    }
}

impl std::fmt::Debug for Fixtures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fixtures")
            .field("title", &self.title)
            .field("ctx", &self.ctx)
            .finish()
    }
}

impl PageContext {
    pub fn login_page(&self) -> LoginPage {
        LoginPage::new(self)
    }

    pub fn products_page(&self) -> ProductsPage {
        ProductsPage::new(self)
    }

    pub fn mini_cart_page(&self) -> MiniCart {
        MiniCart::new(self)
    }
}
