// Session configuration and per-call validation options
//
// SessionConfig holds the suite-wide defaults (where sessions live, which cookie
// signals a login). ValidationOptions overrides individual fields for one call;
// unset fields fall back to the config.

use crate::domain::url_domain;
use crate::error::Result;
use crate::state::Cookie;
use crate::user::{Username, user_auth_path};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default directory for stored sessions, relative to the working directory.
pub const DEFAULT_STORAGE_DIR: &str = "playwright/.auth";

/// Default application under test.
pub const DEFAULT_BASE_URL: &str = "https://www.saucedemo.com/";

/// Cookie Sauce Demo sets after a successful login.
pub const DEFAULT_COOKIE_NAME: &str = "session-username";

/// Path filter value that disables the path check.
pub const WILDCARD_PATH: &str = "/";

/// Minimum remaining lifetime for a session cookie to be reused.
pub const DEFAULT_EXPIRATION_THRESHOLD: Duration = Duration::from_secs(120);

/// Suite-wide session settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Directory holding one `<username>.json` per user
    pub storage_dir: PathBuf,
    /// Base URL of the application; its origin keys the replayed localStorage
    pub base_url: String,
    /// Name (or name fragment) of the cookie that proves a login
    pub cookie_name: String,
    /// Required cookie domain; empty skips the domain check
    pub cookie_domain: String,
    /// Required cookie path; `/` skips the path check
    pub cookie_path: String,
    /// Minimum remaining cookie lifetime
    pub expiration_threshold: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            cookie_domain: String::new(),
            cookie_path: WILDCARD_PATH.to_string(),
            expiration_threshold: DEFAULT_EXPIRATION_THRESHOLD,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `URL` and `STORAGE_STATE_PATH` from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("URL") {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        if let Ok(dir) = std::env::var("STORAGE_STATE_PATH") {
            if !dir.is_empty() {
                config.storage_dir = PathBuf::from(dir);
            }
        }
        config
    }

    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub fn with_cookie_domain(mut self, domain: impl Into<String>) -> Self {
        self.cookie_domain = domain.into();
        self
    }

    /// Sets the domain filter to the one derived from `base_url`.
    pub fn with_cookie_domain_from_base_url(mut self) -> Result<Self> {
        self.cookie_domain = url_domain(&self.base_url)?;
        Ok(self)
    }

    pub fn with_cookie_path(mut self, path: impl Into<String>) -> Self {
        self.cookie_path = path.into();
        self
    }

    pub fn with_expiration_threshold(mut self, threshold: Duration) -> Self {
        self.expiration_threshold = threshold;
        self
    }

    /// Origin whose localStorage is replayed: the base URL without its trailing slash.
    pub fn origin_url(&self) -> &str {
        self.base_url.strip_suffix('/').unwrap_or(&self.base_url)
    }

    /// Storage file for `user` inside [`SessionConfig::storage_dir`].
    pub fn user_auth_path(&self, user: &(impl Username + ?Sized)) -> PathBuf {
        user_auth_path(&self.storage_dir, user)
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }
}

/// Per-call overrides for session validation.
///
/// Every field left as `None` takes its value from [`SessionConfig`].
///
/// # Example
///
/// ```ignore
/// let options = ValidationOptions::new()
///     .cookie_name("session-username")
///     .exact(true)
///     .expiration_threshold(Duration::from_secs(300));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationOptions {
    pub cookie_name: Option<String>,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub expiration_threshold: Option<Duration>,
    pub exact: Option<bool>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = Some(name.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn expiration_threshold(mut self, threshold: Duration) -> Self {
        self.expiration_threshold = Some(threshold);
        self
    }

    /// Require the cookie name to match exactly instead of as a substring.
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Shallow-merges these overrides over the config defaults.
    pub fn resolve(&self, config: &SessionConfig) -> CookieFilter {
        CookieFilter {
            cookie_name: self
                .cookie_name
                .clone()
                .unwrap_or_else(|| config.cookie_name.clone()),
            domain: self
                .domain
                .clone()
                .unwrap_or_else(|| config.cookie_domain.clone()),
            path: self
                .path
                .clone()
                .unwrap_or_else(|| config.cookie_path.clone()),
            expiration_threshold: self
                .expiration_threshold
                .unwrap_or(config.expiration_threshold),
            exact: self.exact.unwrap_or(false),
        }
    }
}

/// Fully resolved criteria selecting the session cookie(s) of a stored session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieFilter {
    pub cookie_name: String,
    pub domain: String,
    pub path: String,
    #[serde(serialize_with = "serialize_secs")]
    pub expiration_threshold: Duration,
    pub exact: bool,
}

impl CookieFilter {
    /// Name, domain and path checks; expiry is evaluated separately.
    pub fn matches(&self, cookie: &Cookie) -> bool {
        let name_matches = cookie.name == self.cookie_name
            || (!self.exact && cookie.name.contains(&self.cookie_name));
        let domain_matches = self.domain.is_empty() || cookie.domain == self.domain;
        let path_matches = self.path == WILDCARD_PATH || cookie.path == self.path;

        name_matches && domain_matches && path_matches
    }
}

impl Default for CookieFilter {
    fn default() -> Self {
        ValidationOptions::default().resolve(&SessionConfig::default())
    }
}

fn serialize_secs<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie(name: &str, domain: &str, path: &str) -> Cookie {
        Cookie::new(name, "v", domain).with_path(path)
    }

    #[test]
    fn test_defaults() {
        let filter = CookieFilter::default();
        assert_eq!(filter.cookie_name, "session-username");
        assert_eq!(filter.domain, "");
        assert_eq!(filter.path, "/");
        assert_eq!(filter.expiration_threshold, Duration::from_secs(120));
        assert!(!filter.exact);
    }

    #[test]
    fn test_options_override_config_field_by_field() {
        let config = SessionConfig::new()
            .with_cookie_domain("www.saucedemo.com")
            .with_expiration_threshold(Duration::from_secs(30));
        let filter = ValidationOptions::new()
            .cookie_name("token")
            .exact(true)
            .resolve(&config);

        assert_eq!(filter.cookie_name, "token");
        assert!(filter.exact);
        assert_eq!(filter.domain, "www.saucedemo.com");
        assert_eq!(filter.expiration_threshold, Duration::from_secs(30));
        assert_eq!(filter.path, "/");
    }

    #[test]
    fn test_name_substring_unless_exact() {
        let loose = CookieFilter::default();
        assert!(loose.matches(&cookie("session-username", "x", "/")));
        assert!(loose.matches(&cookie("old-session-username-v2", "x", "/")));
        assert!(!loose.matches(&cookie("session", "x", "/")));

        let strict = ValidationOptions::new().exact(true).resolve(&SessionConfig::new());
        assert!(strict.matches(&cookie("session-username", "x", "/")));
        assert!(!strict.matches(&cookie("old-session-username-v2", "x", "/")));
    }

    #[test]
    fn test_domain_check_only_when_configured() {
        let any = CookieFilter::default();
        assert!(any.matches(&cookie("session-username", "anything.test", "/")));

        let pinned = ValidationOptions::new()
            .domain("www.saucedemo.com")
            .resolve(&SessionConfig::new());
        assert!(pinned.matches(&cookie("session-username", "www.saucedemo.com", "/")));
        assert!(!pinned.matches(&cookie("session-username", ".saucedemo.com", "/")));
    }

    #[test]
    fn test_path_check_skipped_for_wildcard() {
        let any = CookieFilter::default();
        assert!(any.matches(&cookie("session-username", "x", "/inventory")));

        let pinned = ValidationOptions::new()
            .path("/app")
            .resolve(&SessionConfig::new());
        assert!(pinned.matches(&cookie("session-username", "x", "/app")));
        assert!(!pinned.matches(&cookie("session-username", "x", "/")));
    }

    #[test]
    fn test_origin_url_strips_one_trailing_slash() {
        assert_eq!(SessionConfig::new().origin_url(), "https://www.saucedemo.com");
        let config = SessionConfig::new().with_base_url("http://127.0.0.1:8080");
        assert_eq!(config.origin_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_domain_from_base_url() {
        let config = SessionConfig::new().with_cookie_domain_from_base_url().unwrap();
        assert_eq!(config.cookie_domain, "www.saucedemo.com");
    }

    #[test]
    fn test_user_auth_path_uses_storage_dir() {
        let config = SessionConfig::new().with_storage_dir("/tmp/auth");
        assert_eq!(
            config.user_auth_path("visual_user"),
            PathBuf::from("/tmp/auth/visual_user.json")
        );
    }

    #[test]
    fn test_filter_serializes_for_diagnostics() {
        let json = serde_json::to_string(&CookieFilter::default()).unwrap();
        assert!(json.contains("\"cookieName\":\"session-username\""));
        assert!(json.contains("\"expirationThreshold\":120.0"));
    }
}
