// Suite configuration
//
// Browser launch settings, context defaults and timeouts for every test.
// Values come from the environment so CI and local runs share one code path:
//
// - `URL`                 application under test (default https://www.saucedemo.com/)
// - `STORAGE_STATE_PATH`  directory for per-user session files
// - `HEADED`              any non-empty value other than `0`/`false` shows the browser
// - `CI`                  marks a CI run
// - `CF_CLIENT_ID`, `CF_CLIENT_SECRET`  Cloudflare Access headers

use playwright_rs::{BrowserContextOptions, LaunchOptions, Viewport};
use playwright_rs_session::{SessionConfig, SessionData};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Timeout for actions like click, fill and select.
pub const ACTION_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for navigations (goto, reload, click-and-navigate).
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Default polling budget for assertions.
pub const EXPECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Budget for a whole test body.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// How a new browser context is seeded with cookies and localStorage.
#[derive(Debug, Clone, Default)]
pub enum StorageSeed {
    /// Browser defaults
    #[default]
    None,
    /// Explicitly anonymous: `{cookies: [], origins: []}`
    Empty,
    /// A storage state file, usually a user's auth path
    Path(PathBuf),
    /// An in-memory session
    Inline(SessionData),
}

#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Session storage settings; also owns the base URL
    pub session: SessionConfig,
    pub headless: bool,
    pub ci: bool,
    pub action_timeout: Duration,
    pub navigation_timeout: Duration,
    pub expect_timeout: Duration,
    pub test_timeout: Duration,
    pub viewport: Viewport,
    pub launch_args: Vec<String>,
    /// Slows every operation down by this many milliseconds
    pub slow_mo: f64,
    pub ignore_https_errors: bool,
    pub extra_http_headers: HashMap<String, String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            headless: true,
            ci: false,
            action_timeout: ACTION_TIMEOUT,
            navigation_timeout: NAVIGATION_TIMEOUT,
            expect_timeout: EXPECT_TIMEOUT,
            test_timeout: TEST_TIMEOUT,
            viewport: Viewport {
                width: 1600,
                height: 1000,
            },
            launch_args: vec!["--disable-web-security".to_string()],
            slow_mo: 0.0,
            ignore_https_errors: true,
            extra_http_headers: HashMap::new(),
        }
    }
}

impl TestConfig {
    /// Builds the configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self {
            session: SessionConfig::from_env(),
            ..Self::default()
        };
        config.headless = !env_flag("HEADED");
        config.ci = env_flag("CI");

        for (var, header) in [
            ("CF_CLIENT_ID", "CF-Access-Client-Id"),
            ("CF_CLIENT_SECRET", "CF-Access-Client-Secret"),
        ] {
            if let Ok(value) = std::env::var(var) {
                if !value.is_empty() {
                    config.extra_http_headers.insert(header.to_string(), value);
                }
            }
        }
        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.session.base_url = url.into();
        self
    }

    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session.storage_dir = dir.into();
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_expect_timeout(mut self, timeout: Duration) -> Self {
        self.expect_timeout = timeout;
        self
    }

    pub fn with_test_timeout(mut self, timeout: Duration) -> Self {
        self.test_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.session.base_url
    }

    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    /// Absolute URL for a path relative to the base URL.
    ///
    /// `url_for("inventory.html")` → `https://www.saucedemo.com/inventory.html`
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.session.origin_url(),
            path.trim_start_matches('/')
        )
    }

    pub fn launch_options(&self) -> LaunchOptions {
        let mut options = LaunchOptions::new()
            .headless(self.headless)
            .args(self.launch_args.clone());
        if self.slow_mo > 0.0 {
            options = options.slow_mo(self.slow_mo);
        }
        options
    }

    pub fn context_options(&self, seed: &StorageSeed) -> BrowserContextOptions {
        let mut builder = BrowserContextOptions::builder()
            .viewport(self.viewport.clone())
            .base_url(self.base_url().to_string())
            .ignore_https_errors(self.ignore_https_errors)
            .accept_downloads(true);

        if !self.extra_http_headers.is_empty() {
            builder = builder.extra_http_headers(self.extra_http_headers.clone());
        }

        builder = match seed {
            StorageSeed::None => builder,
            StorageSeed::Empty => builder.storage_state(SessionData::empty().to_storage_state()),
            StorageSeed::Path(path) => builder.storage_state_path(path.to_string_lossy().into_owned()),
            StorageSeed::Inline(session) => builder.storage_state(session.to_storage_state()),
        };
        builder.build()
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| !matches!(value.trim(), "" | "0" | "false"))
        .unwrap_or(false)
}
