// Session hydration - replay a stored session into a live browser
//
// Used when a context was created without `storage_state` but the test still
// wants to start logged in: cookies go into the browser context, localStorage
// entries of the application origin are written through the page.

use crate::config::SessionConfig;
use crate::error::Result;
use crate::state::{Cookie, SessionData};
use crate::user::Username;
use async_trait::async_trait;
use serde::Serialize;

/// Browser surface needed to replay a session.
///
/// Implemented for [`playwright_rs::Page`]; tests can substitute a recorder.
#[async_trait]
pub trait SessionTarget: Send + Sync {
    /// Installs cookies into the browser context owning this target.
    async fn add_cookies(&self, cookies: &[Cookie]) -> Result<()>;

    /// Writes one localStorage entry for the target's current origin.
    async fn set_local_storage_item(&self, name: &str, value: &str) -> Result<()>;
}

#[derive(Serialize)]
struct StorageItemArg<'a> {
    key: &'a str,
    value: &'a str,
}

#[async_trait]
impl SessionTarget for playwright_rs::Page {
    async fn add_cookies(&self, cookies: &[Cookie]) -> Result<()> {
        let cookies: Vec<playwright_rs::Cookie> = cookies.iter().map(Into::into).collect();
        self.context()?.add_cookies(&cookies).await?;
        Ok(())
    }

    async fn set_local_storage_item(&self, name: &str, value: &str) -> Result<()> {
        let arg = StorageItemArg { key: name, value };
        self.evaluate::<_, ()>(
            "({ key, value }) => { localStorage.setItem(key, value); }",
            Some(&arg),
        )
        .await?;
        Ok(())
    }
}

/// What [`add_user_cookies_and_storage`] applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrationReport {
    pub cookies: usize,
    pub local_storage_items: usize,
}

/// Loads `user`'s stored session and replays it into `target`.
///
/// `origin_url` selects which origin's localStorage is replayed; `None` or an
/// empty string means [`SessionConfig::origin_url`]. A missing origin is logged and skipped, the
/// cookies are applied regardless. Unlike validation, a missing or malformed
/// storage file is an error here.
pub async fn add_user_cookies_and_storage<T>(
    target: &T,
    config: &SessionConfig,
    user: &(impl Username + ?Sized),
    origin_url: Option<&str>,
) -> Result<HydrationReport>
where
    T: SessionTarget + ?Sized,
{
    let path = config.user_auth_path(user);
    let session = SessionData::read_async(&path)
        .await
        .map_err(|e| e.context(format!("Loading session for {}", user.username())))?;

    // An empty origin falls back to the configured one
    let origin_url = origin_url
        .filter(|origin| !origin.is_empty())
        .unwrap_or(config.origin_url());
    apply_session(target, &session, origin_url, user.username()).await
}

/// Replays an already loaded session. See [`add_user_cookies_and_storage`].
pub async fn apply_session<T>(
    target: &T,
    session: &SessionData,
    origin_url: &str,
    username: &str,
) -> Result<HydrationReport>
where
    T: SessionTarget + ?Sized,
{
    tracing::info!("Adding cookies for user {}", username);
    target.add_cookies(&session.cookies).await?;

    let entries = session
        .origin(origin_url)
        .map(|origin| origin.local_storage.as_slice())
        .unwrap_or_default();

    if entries.is_empty() {
        tracing::error!("No LocalStorage found for origin: {}", origin_url);
    } else {
        tracing::info!("Adding all the LocalStorage items for user {}", username);
        for entry in entries {
            target
                .set_local_storage_item(&entry.name, &entry.value)
                .await?;
        }
    }

    Ok(HydrationReport {
        cookies: session.cookies.len(),
        local_storage_items: entries.len(),
    })
}
