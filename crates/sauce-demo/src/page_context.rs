// PageContext - the page a test is driving, plus the settings it runs under
//
// Every action, assertion and page object takes a PageContext instead of
// reaching for a global "current page". Cloning is cheap and clones share the
// same page and soft-assertion log.

use crate::config::TestConfig;
use crate::error::{Error, Result};
use parking_lot::Mutex;
use playwright_rs::Page;
use playwright_rs_session::SessionData;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub struct PageContext {
    page: Page,
    config: Arc<TestConfig>,
    soft: SoftAssertions,
}

impl PageContext {
    pub fn new(page: Page, config: Arc<TestConfig>) -> Self {
        Self {
            page,
            config,
            soft: SoftAssertions::default(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &TestConfig {
        &self.config
    }

    pub fn soft_assertions(&self) -> &SoftAssertions {
        &self.soft
    }

    /// Captures the browser context's cookies and localStorage and writes them
    /// to `path`, replacing any previous session.
    pub async fn save_storage_state(&self, path: impl AsRef<Path>) -> Result<SessionData> {
        let path = path.as_ref();
        let state = self.page.context()?.storage_state().await?;
        let session = SessionData::from(state);
        session
            .write(path)
            .map_err(|e| Error::from(e).context("Saving storage state"))?;
        tracing::info!("Saved storage state to {}", path.display());
        Ok(session)
    }
}

impl std::fmt::Debug for PageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageContext")
            .field("url", &self.page.url())
            .field("soft_failures", &self.soft.len())
            .finish()
    }
}

/// Failures recorded by soft assertions; checked when the test finishes.
#[derive(Debug, Clone, Default)]
pub struct SoftAssertions {
    failures: Arc<Mutex<Vec<String>>>,
}

impl SoftAssertions {
    pub fn record(&self, failure: impl Into<String>) {
        let failure = failure.into();
        tracing::error!("Soft assertion failed: {}", failure);
        self.failures.lock().push(failure);
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }

    /// Fails with every recorded soft failure, if any.
    pub fn assert_all(&self) -> Result<()> {
        let failures = self.failures();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::SoftAssertions(failures))
        }
    }
}
