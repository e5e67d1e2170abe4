// Error types for the Sauce Demo suite

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by fixtures, page objects and assertion wrappers
#[derive(Debug, Error)]
pub enum Error {
    /// Browser automation failure (launch, navigation, actions)
    #[error(transparent)]
    Playwright(#[from] playwright_rs::Error),

    /// Stored session could not be read, written or replayed
    #[error(transparent)]
    Session(#[from] playwright_rs_session::Error),

    /// A polling assertion did not pass before its timeout
    ///
    /// `message` is the caller's description (or a generic one); the engine's
    /// failure text is only reachable through `source`.
    #[error("{message}")]
    Assertion {
        message: String,
        #[source]
        source: playwright_rs::Error,
    },

    /// One or more soft assertions failed during the test
    #[error("{} soft assertion(s) failed:\n{}", .0.len(), .0.join("\n"))]
    SoftAssertions(Vec<String>),

    /// Navigation or test body exceeded its time budget
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    /// One-line description including the engine failure behind an assertion.
    pub fn report(&self) -> String {
        match self {
            Error::Assertion { message, source } => format!("{message}: {source}"),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_assertion_summary() {
        let err = Error::SoftAssertions(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "2 soft assertion(s) failed:\nfirst\nsecond");
    }

    #[test]
    fn test_assertion_shows_custom_message() {
        let err = Error::Assertion {
            message: "Login page should be displayed".into(),
            source: playwright_rs::Error::AssertionTimeout("not visible".into()),
        };
        assert_eq!(err.to_string(), "Login page should be displayed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_assertion_chain_names_engine_failure_once() {
        let err = Error::Assertion {
            message: "Products should show".into(),
            source: playwright_rs::Error::AssertionTimeout("not visible".into()),
        };
        let chained = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chained.matches("not visible").count(), 1);
        assert!(chained.starts_with("Products should show: "));
    }

    #[test]
    fn test_report_includes_engine_failure() {
        let err = Error::Assertion {
            message: "Mini cart should show 1 item(s)".into(),
            source: playwright_rs::Error::AssertionTimeout("text was 2".into()),
        };
        let report = err.report();
        assert!(report.starts_with("Mini cart should show 1 item(s): "));
        assert!(report.contains("text was 2"));
        assert_eq!(Error::Timeout("slow".into()).report(), "Timeout: slow");
    }
}
