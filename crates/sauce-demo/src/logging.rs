// Logging and test reporting
//
// All diagnostics go through `tracing`. `init()` installs a formatted subscriber
// once per process; TestReporter writes the begin/end line for every test.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the suite's subscriber. Safe to call from every test.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        // Another subscriber may already be installed by the test harness
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}

/// Final state of a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Skipped(String),
    Failed(String),
}

/// Writes one log line when a test starts and one when it ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestReporter;

impl TestReporter {
    pub fn on_test_begin(&self, title: &str) {
        tracing::info!("Test Case Started : {}", title);
    }

    pub fn on_test_end(&self, title: &str, outcome: &TestOutcome) {
        match outcome {
            TestOutcome::Passed => tracing::info!("Test Case Passed : {}", title),
            TestOutcome::Skipped(reason) => {
                tracing::info!("Test Case Skipped : {} ({})", title, reason)
            }
            TestOutcome::Failed(error) => {
                tracing::error!("Test Case Failed : {} Error: {}", title, error)
            }
        }
    }

    pub fn on_error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
