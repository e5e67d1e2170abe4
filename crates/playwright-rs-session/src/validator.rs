// Session state validation
//
// Decides whether a user's stored session can be reused or must be regenerated
// by logging in again. Validation is advisory: every failure (missing file,
// malformed JSON, no matching cookie, cookie about to expire) answers "invalid"
// and nothing is propagated to the caller.

use crate::config::{CookieFilter, SessionConfig, ValidationOptions};
use crate::expiry::is_session_cookie_valid_at;
use crate::state::SessionData;
use crate::user::Username;
use std::time::SystemTime;

/// Returns true if `user`'s stored session holds a usable session cookie.
///
/// # Example
///
/// ```ignore
/// use playwright_rs_session::{SessionConfig, ValidationOptions, is_user_storage_state_valid};
///
/// let config = SessionConfig::from_env();
/// if !is_user_storage_state_valid(&config, "standard_user", &ValidationOptions::default()) {
///     // log in interactively and save a fresh storage state
/// }
/// ```
pub fn is_user_storage_state_valid(
    config: &SessionConfig,
    user: &(impl Username + ?Sized),
    options: &ValidationOptions,
) -> bool {
    is_user_storage_state_valid_at(config, user, options, SystemTime::now())
}

/// [`is_user_storage_state_valid`] evaluated at an explicit instant.
pub fn is_user_storage_state_valid_at(
    config: &SessionConfig,
    user: &(impl Username + ?Sized),
    options: &ValidationOptions,
    now: SystemTime,
) -> bool {
    let path = config.user_auth_path(user);
    let session = match SessionData::read(&path) {
        Ok(session) => session,
        Err(e) if e.is_not_found() => {
            tracing::error!("Cookie file: {} doesn't exist.", path.display());
            return false;
        }
        Err(e) => {
            tracing::error!("An error occurred while reading the storage file: {}", e);
            return false;
        }
    };

    let filter = options.resolve(config);
    let valid = has_valid_session_cookie(&session, &filter, now);
    if let Validity::NoMatchingCookie = valid {
        tracing::error!(
            "No valid cookies found for user: {} with criteria: {}",
            user.username(),
            serde_json::to_string(&filter).unwrap_or_else(|_| format!("{filter:?}"))
        );
    }
    valid.is_valid()
}

/// Outcome of checking one session against a cookie filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// At least one matching cookie outlives the threshold
    Valid,
    /// Cookies matched, but all of them expire too soon
    Expiring,
    /// No cookie matched the name/domain/path criteria
    NoMatchingCookie,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }
}

/// Checks an in-memory session: any matching cookie that passes the expiry
/// check makes the whole session valid.
pub fn has_valid_session_cookie(
    session: &SessionData,
    filter: &CookieFilter,
    now: SystemTime,
) -> Validity {
    let mut candidates = session
        .cookies
        .iter()
        .filter(|cookie| filter.matches(cookie))
        .peekable();

    if candidates.peek().is_none() {
        return Validity::NoMatchingCookie;
    }

    // Evaluate every candidate so each one gets its diagnostic line.
    let any_valid = candidates
        .map(|cookie| is_session_cookie_valid_at(cookie, now, filter.expiration_threshold))
        .fold(false, |acc, valid| acc || valid);

    if any_valid {
        Validity::Valid
    } else {
        Validity::Expiring
    }
}
