// Shared helpers for integration tests
#![allow(dead_code)]

use playwright_rs_session::{Cookie, LocalStorageEntry, Origin, SessionData};
use std::sync::Once;
use std::time::{SystemTime, UNIX_EPOCH};

static INIT: Once = Once::new();

/// Installs a test subscriber once per test binary. Honors `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn now_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_secs_f64()
}

/// A Sauce Demo style session cookie expiring `offset` seconds from now.
pub fn session_cookie(name: &str, offset: f64) -> Cookie {
    Cookie::new(name, "standard_user", "www.saucedemo.com").with_expires(now_secs() + offset)
}

pub fn sauce_demo_session(cookies: Vec<Cookie>) -> SessionData {
    SessionData {
        cookies,
        origins: vec![Origin {
            origin: "https://www.saucedemo.com".to_string(),
            local_storage: vec![
                LocalStorageEntry {
                    name: "backtrace-guid".to_string(),
                    value: "0f4c2d".to_string(),
                },
                LocalStorageEntry {
                    name: "cart-contents".to_string(),
                    value: "[4,0]".to_string(),
                },
            ],
        }],
    }
}
