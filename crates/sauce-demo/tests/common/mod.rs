// Shared helpers for the Sauce Demo specs
#![allow(dead_code)]

use sauce_demo::TestConfig;
use std::path::Path;
use std::time::Duration;

pub fn init_tracing() {
    sauce_demo::logging::init();
}

/// Suite settings pointed at a local server and a scratch storage directory.
pub fn local_config(base_url: &str, storage_dir: &Path) -> TestConfig {
    TestConfig::default()
        .with_base_url(format!("{base_url}/"))
        .with_storage_dir(storage_dir)
        .with_expect_timeout(Duration::from_secs(3))
        .with_test_timeout(Duration::from_secs(60))
}
