//! playwright-rs-session: reuse logged-in Playwright sessions across test runs
//!
//! A login flow is slow, so suites log in once per user, save the browser's
//! storage state (cookies + localStorage) to `<storage_dir>/<username>.json`,
//! and start later tests from that file. This crate decides whether such a
//! file is still good to use and replays it into a live page when needed.
//!
//! # Validating a stored session
//!
//! ```ignore
//! use playwright_rs_session::{SessionConfig, ValidationOptions, is_user_storage_state_valid};
//!
//! let config = SessionConfig::from_env();
//! let options = ValidationOptions::new().cookie_name("session-username");
//!
//! if is_user_storage_state_valid(&config, "standard_user", &options) {
//!     println!("reuse {}", config.user_auth_path("standard_user").display());
//! }
//! ```
//!
//! Validation fails closed: a missing or unreadable file, no cookie matching
//! the name/domain/path filter, or a cookie with less than the expiration
//! threshold left all report `false`, so the caller regenerates the session.
//!
//! # Replaying a session into a page
//!
//! ```ignore
//! use playwright_rs::protocol::Playwright;
//! use playwright_rs_session::{SessionConfig, add_user_cookies_and_storage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let playwright = Playwright::launch().await?;
//!     let browser = playwright.chromium().launch().await?;
//!     let page = browser.new_page().await?;
//!     page.goto("https://www.saucedemo.com/", None).await?;
//!
//!     let config = SessionConfig::default();
//!     add_user_cookies_and_storage(&page, &config, "standard_user", None).await?;
//!
//!     browser.close().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod domain;
mod error;
pub mod expiry;
pub mod format;
pub mod hydrate;
pub mod state;
pub mod user;
pub mod validator;

pub use config::{
    CookieFilter, DEFAULT_BASE_URL, DEFAULT_COOKIE_NAME, DEFAULT_EXPIRATION_THRESHOLD,
    DEFAULT_STORAGE_DIR, SessionConfig, ValidationOptions,
};
pub use domain::url_domain;
pub use error::{Error, Result};
pub use expiry::{
    CookieStatus, cookie_status_at, is_session_cookie_valid, is_session_cookie_valid_at,
    is_session_cookie_valid_default,
};
pub use format::format_time;
pub use hydrate::{HydrationReport, SessionTarget, add_user_cookies_and_storage, apply_session};
pub use state::{Cookie, LocalStorageEntry, NON_EXPIRING, Origin, SameSite, SessionData};
pub use user::{User, Username, user_auth_path};
pub use validator::{
    Validity, has_valid_session_cookie, is_user_storage_state_valid,
    is_user_storage_state_valid_at,
};
