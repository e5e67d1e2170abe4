// Session state - the persisted cookies + localStorage snapshot of a logged-in user
//
// The on-disk format is Playwright's storage-state JSON, so files written here can
// be handed straight to `BrowserContextOptions::storage_state_path()` and files
// written by any Playwright binding can be validated here.
//
// See: https://playwright.dev/docs/api/class-browsercontext#browser-context-storage-state

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Expiry value Playwright uses for cookies that live until the browser closes.
pub const NON_EXPIRING: f64 = -1.0;

/// SameSite attribute of a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SameSite {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Strict" => Ok(SameSite::Strict),
            "Lax" => Ok(SameSite::Lax),
            "None" => Ok(SameSite::None),
            other => Err(format!("unknown SameSite value '{other}'")),
        }
    }
}

/// A stored cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    /// Unix timestamp in seconds. `None` or `-1` means the cookie never expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<f64>,
    #[serde(default)]
    pub http_only: bool,
    #[serde(default)]
    pub secure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_site: Option<SameSite>,
}

impl Cookie {
    /// Creates a non-expiring cookie scoped to `domain` and path `/`.
    pub fn new(name: impl Into<String>, value: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into(),
            path: "/".to_string(),
            expires: None,
            http_only: false,
            secure: false,
            same_site: None,
        }
    }

    /// Sets the absolute expiry (epoch seconds).
    pub fn with_expires(mut self, expires: f64) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Returns the expiry timestamp, or `None` for cookies that never expire.
    pub fn expiry(&self) -> Option<f64> {
        self.expires.filter(|expires| *expires != NON_EXPIRING)
    }
}

impl From<playwright_rs::Cookie> for Cookie {
    fn from(cookie: playwright_rs::Cookie) -> Self {
        Self {
            name: cookie.name,
            value: cookie.value,
            domain: cookie.domain,
            path: cookie.path,
            expires: Some(cookie.expires),
            http_only: cookie.http_only,
            secure: cookie.secure,
            same_site: cookie.same_site.and_then(|s| s.parse().ok()),
        }
    }
}

impl From<&Cookie> for playwright_rs::Cookie {
    fn from(cookie: &Cookie) -> Self {
        Self {
            name: cookie.name.clone(),
            value: cookie.value.clone(),
            domain: cookie.domain.clone(),
            path: cookie.path.clone(),
            expires: cookie.expires.unwrap_or(NON_EXPIRING),
            http_only: cookie.http_only,
            secure: cookie.secure,
            same_site: cookie.same_site.map(|s| s.as_str().to_string()),
        }
    }
}

/// A single localStorage key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalStorageEntry {
    pub name: String,
    pub value: String,
}

/// localStorage contents of one origin (scheme + host + port).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Origin {
    pub origin: String,
    #[serde(default)]
    pub local_storage: Vec<LocalStorageEntry>,
}

/// Cookies and per-origin localStorage persisted for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub cookies: Vec<Cookie>,
    pub origins: Vec<Origin>,
}

impl SessionData {
    /// An anonymous session: no cookies, no localStorage.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses session JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a storage state file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Async variant of [`SessionData::read`] for use inside browser fixtures.
    pub async fn read_async(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&contents).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the whole session to `path`, creating parent directories.
    ///
    /// Sessions are never patched in place; a regenerated session replaces the file.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(io_err)
    }

    /// Finds the localStorage snapshot for an exact origin URL.
    pub fn origin(&self, origin_url: &str) -> Option<&Origin> {
        self.origins.iter().find(|origin| origin.origin == origin_url)
    }

    /// Converts to the engine's storage state for seeding a new browser context.
    pub fn to_storage_state(&self) -> playwright_rs::StorageState {
        playwright_rs::StorageState {
            cookies: self.cookies.iter().map(Into::into).collect(),
            origins: self
                .origins
                .iter()
                .map(|origin| playwright_rs::Origin {
                    origin: origin.origin.clone(),
                    local_storage: origin
                        .local_storage
                        .iter()
                        .map(|entry| playwright_rs::LocalStorageItem {
                            name: entry.name.clone(),
                            value: entry.value.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl From<playwright_rs::StorageState> for SessionData {
    fn from(state: playwright_rs::StorageState) -> Self {
        Self {
            cookies: state.cookies.into_iter().map(Cookie::from).collect(),
            origins: state
                .origins
                .into_iter()
                .map(|origin| Origin {
                    origin: origin.origin,
                    local_storage: origin
                        .local_storage
                        .into_iter()
                        .map(|item| LocalStorageEntry {
                            name: item.name,
                            value: item.value,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
