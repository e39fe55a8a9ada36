//! Error types for diffref operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for diffref operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving diff information.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Missing or invalid runtime configuration.
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(diffref::configuration),
        help("diffref expects to run inside GitHub Actions; check the GITHUB_* environment variables")
    )]
    Configuration(String),

    /// The event payload file could not be read or parsed.
    #[error("Invalid event payload at {}: {message}", path.display())]
    #[diagnostic(
        code(diffref::event_payload),
        help("GITHUB_EVENT_PATH must point to the JSON webhook payload written by the runner")
    )]
    EventPayload {
        /// Path of the payload file
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// A GitHub API request failed.
    #[error("GitHub API error during {operation}: {message}")]
    #[diagnostic(
        code(diffref::api),
        help("Check that the token has read access to pull requests and contents")
    )]
    Api {
        /// The operation that was attempted
        operation: &'static str,
        /// The error message
        message: String,
    },

    /// Wrapped I/O error.
    #[error("I/O error: {0}")]
    #[diagnostic(code(diffref::io))]
    Io(#[from] std::io::Error),

    /// Wrapped JSON error.
    #[error("JSON error: {0}")]
    #[diagnostic(code(diffref::json))]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an event payload error.
    #[must_use]
    pub fn event_payload(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::EventPayload {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an API error for the given operation.
    #[must_use]
    pub fn api(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Api {
            operation,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let err = Error::configuration("GITHUB_REPOSITORY is not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: GITHUB_REPOSITORY is not set"
        );
    }

    #[test]
    fn test_event_payload_display_includes_path() {
        let err = Error::event_payload("/tmp/event.json", "expected value");
        assert_eq!(
            err.to_string(),
            "Invalid event payload at /tmp/event.json: expected value"
        );
    }

    #[test]
    fn test_api_display() {
        let err = Error::api("list pull requests", "Bad credentials");
        assert_eq!(
            err.to_string(),
            "GitHub API error during list pull requests: Bad credentials"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = Error::configuration("x");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("diffref::configuration".to_string())
        );

        let err = Error::from(std::io::Error::other("boom"));
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("diffref::io".to_string())
        );
    }
}
