//! GitHub Actions runtime context.
//!
//! The runner exposes the triggering event through environment variables and
//! a JSON webhook payload written to `GITHUB_EVENT_PATH`. Only the payload
//! fields needed to resolve diff information are modelled; everything else is
//! ignored during deserialization.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Repository owner and name, as in `GITHUB_REPOSITORY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RepoSlug {
    /// Create a slug from its parts.
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse `owner/repo`.
    ///
    /// Anything other than exactly two non-empty segments is rejected.
    pub fn parse(value: &str) -> Result<Self> {
        match value.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self::new(owner, repo))
            }
            _ => Err(Error::configuration(format!(
                "invalid repository '{value}', expected 'owner/repo'"
            ))),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// A branch or commit reference inside a pull request payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefPayload {
    /// Branch name, without the `refs/heads/` prefix.
    #[serde(rename = "ref", default)]
    pub ref_name: String,
    /// Commit SHA the ref pointed at.
    #[serde(default)]
    pub sha: String,
}

/// The `pull_request` object of a pull request event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestPayload {
    /// Pull request number.
    #[serde(default)]
    pub number: u64,
    /// Target branch.
    #[serde(default)]
    pub base: RefPayload,
    /// Source branch.
    #[serde(default)]
    pub head: RefPayload,
}

/// The `repository` object present on most events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPayload {
    /// The repository's default branch name.
    #[serde(default)]
    pub default_branch: Option<String>,
}

/// The subset of the webhook payload diffref reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    /// SHA the ref pointed at before a push.
    #[serde(default)]
    pub before: String,
    /// SHA the ref points at after a push.
    #[serde(default)]
    pub after: String,
    /// Present for `pull_request` and `pull_request_target` events.
    #[serde(default)]
    pub pull_request: Option<PullRequestPayload>,
    /// The repository the event belongs to.
    #[serde(default)]
    pub repository: Option<RepositoryPayload>,
}

impl EventPayload {
    /// Parse a payload from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse the payload file written by the runner.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::event_payload(path, e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| Error::event_payload(path, e.to_string()))
    }

    /// The default branch, when the payload carries it.
    #[must_use]
    pub fn default_branch(&self) -> Option<&str> {
        self.repository
            .as_ref()
            .and_then(|r| r.default_branch.as_deref())
            .filter(|b| !b.is_empty())
    }
}

/// Context of the workflow run that triggered diffref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext {
    /// Event name (e.g., "push", "pull_request").
    pub event_name: String,
    /// Fully qualified ref the workflow runs for.
    pub git_ref: String,
    /// Commit SHA the workflow runs for.
    pub sha: String,
    /// Repository the event belongs to.
    pub repo: RepoSlug,
    /// Webhook payload.
    pub payload: EventPayload,
}

impl EventContext {
    /// Create a context with an empty payload.
    #[must_use]
    pub fn from_parts(
        event_name: impl Into<String>,
        git_ref: impl Into<String>,
        sha: impl Into<String>,
        repo: RepoSlug,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            git_ref: git_ref.into(),
            sha: sha.into(),
            repo,
            payload: EventPayload::default(),
        }
    }

    /// Replace the payload.
    #[must_use]
    pub fn with_payload(mut self, payload: EventPayload) -> Self {
        self.payload = payload;
        self
    }

    /// Build the context from the runner's environment.
    ///
    /// Reads `GITHUB_EVENT_NAME`, `GITHUB_REF`, `GITHUB_SHA`,
    /// `GITHUB_REPOSITORY` and the payload at `GITHUB_EVENT_PATH`.
    pub fn from_env() -> Result<Self> {
        let repository = std::env::var("GITHUB_REPOSITORY")
            .map_err(|_| Error::configuration("GITHUB_REPOSITORY is not set"))?;
        let event_path = std::env::var_os("GITHUB_EVENT_PATH").map(PathBuf::from);
        Self::from_env_with(&repository, event_path.as_deref())
    }

    /// Like [`EventContext::from_env`], with the repository and payload
    /// location supplied by the caller.
    pub fn from_env_with(repository: &str, event_path: Option<&Path>) -> Result<Self> {
        let repo = RepoSlug::parse(repository)?;

        let payload = match event_path {
            Some(path) if path.exists() => EventPayload::from_file(path)?,
            Some(path) => {
                warn!(path = %path.display(), "Event payload file does not exist, using an empty payload");
                EventPayload::default()
            }
            None => {
                debug!("No event payload path set, using an empty payload");
                EventPayload::default()
            }
        };

        let context = Self {
            event_name: std::env::var("GITHUB_EVENT_NAME").unwrap_or_default(),
            git_ref: std::env::var("GITHUB_REF").unwrap_or_default(),
            sha: std::env::var("GITHUB_SHA").unwrap_or_default(),
            repo,
            payload,
        };
        debug!(%context, "Loaded event context");
        Ok(context)
    }

    /// Whether the event carries a pull request.
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.payload.pull_request.is_some()
    }
}

impl fmt::Display for EventContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} at {} ({})",
            self.event_name,
            self.git_ref,
            self.repo,
            self.sha.get(..7).unwrap_or(&self.sha)
        )
    }
}
