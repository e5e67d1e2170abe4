// Cookie expiry evaluation
//
// A stored session is only worth reusing if its session cookie outlives the
// test that is about to run, so a cookie counts as valid only while its
// remaining lifetime exceeds a threshold.

use crate::config::DEFAULT_EXPIRATION_THRESHOLD;
use crate::format::format_time;
use crate::state::Cookie;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Lifetime classification of a cookie at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CookieStatus {
    /// No expiry, or the `-1` session sentinel
    NonExpiring,
    /// Remaining lifetime (seconds) exceeds the threshold
    Valid { remaining: f64 },
    /// Still alive, but for no longer than the threshold
    ExpiringSoon { remaining: f64 },
    /// Expiry is now or in the past; `remaining` is zero or negative
    Expired { remaining: f64 },
}

impl CookieStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, CookieStatus::NonExpiring | CookieStatus::Valid { .. })
    }
}

/// Seconds since the Unix epoch as a float, matching cookie `expires` values.
pub fn epoch_seconds(at: SystemTime) -> f64 {
    match at.duration_since(UNIX_EPOCH) {
        Ok(since) => since.as_secs_f64(),
        Err(before) => -before.duration().as_secs_f64(),
    }
}

/// Classifies `cookie` at `now`. Pure; no logging.
pub fn cookie_status_at(cookie: &Cookie, now: SystemTime, threshold: Duration) -> CookieStatus {
    let Some(expires) = cookie.expiry() else {
        return CookieStatus::NonExpiring;
    };

    let remaining = expires - epoch_seconds(now);
    if remaining > threshold.as_secs_f64() {
        CookieStatus::Valid { remaining }
    } else if remaining > 0.0 {
        CookieStatus::ExpiringSoon { remaining }
    } else {
        CookieStatus::Expired { remaining }
    }
}

/// Returns true if `cookie` stays alive for longer than `threshold` from now.
pub fn is_session_cookie_valid(cookie: &Cookie, threshold: Duration) -> bool {
    is_session_cookie_valid_at(cookie, SystemTime::now(), threshold)
}

/// [`is_session_cookie_valid`] with the default 120 second threshold.
pub fn is_session_cookie_valid_default(cookie: &Cookie) -> bool {
    is_session_cookie_valid(cookie, DEFAULT_EXPIRATION_THRESHOLD)
}

/// Evaluates `cookie` at an explicit instant and logs the outcome.
pub fn is_session_cookie_valid_at(cookie: &Cookie, now: SystemTime, threshold: Duration) -> bool {
    let status = cookie_status_at(cookie, now, threshold);
    match status {
        CookieStatus::NonExpiring => {
            tracing::info!("Cookie name: {} is considered non-expiring.", cookie.name);
        }
        CookieStatus::Valid { remaining } => {
            tracing::info!(
                "Cookie name: {} is valid for the next {}.",
                cookie.name,
                format_time(remaining)
            );
        }
        CookieStatus::ExpiringSoon { remaining } => {
            tracing::error!(
                "Cookie name: {} will expire in {} but minimum time set for cookie to be valid is {}.",
                cookie.name,
                format_time(remaining),
                format_time(threshold.as_secs_f64())
            );
        }
        CookieStatus::Expired { remaining } => {
            tracing::error!(
                "Cookie name: {} expired {} ago.",
                cookie.name,
                format_time(-remaining)
            );
        }
    }
    status.is_valid()
}
