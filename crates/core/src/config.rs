//! Runtime configuration.
//!
//! Everything comes from the environment the runner provides. The CLI layers
//! its flags on top through the `with_*` setters.

use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;

/// Environment variables consulted for the API token, in order.
pub const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "INPUT_GITHUB_TOKEN"];

/// Configuration for resolving diff information.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// API token. Never logged.
    pub token: Option<SecretString>,
    /// Base URL of the REST API, for GitHub Enterprise Server.
    pub api_url: Option<String>,
    /// `owner/repo` override for `GITHUB_REPOSITORY`.
    pub repository: Option<String>,
    /// Override for `GITHUB_EVENT_PATH`.
    pub event_path: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let token = TOKEN_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(SecretString::from);

        Self {
            token,
            api_url: non_empty_var("GITHUB_API_URL"),
            repository: non_empty_var("GITHUB_REPOSITORY"),
            event_path: non_empty_var("GITHUB_EVENT_PATH").map(PathBuf::from),
        }
    }

    /// Override the token.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.token = Some(SecretString::from(token));
        }
        self
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if api_url.is_some() {
            self.api_url = api_url;
        }
        self
    }

    /// Override the repository.
    #[must_use]
    pub fn with_repository(mut self, repository: Option<String>) -> Self {
        if repository.is_some() {
            self.repository = repository;
        }
        self
    }

    /// Override the event payload path.
    #[must_use]
    pub fn with_event_path(mut self, event_path: Option<PathBuf>) -> Self {
        if event_path.is_some() {
            self.event_path = event_path;
        }
        self
    }

    /// The token value, for handing to the HTTP client.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
