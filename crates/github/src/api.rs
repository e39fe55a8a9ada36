//! GitHub REST access.
//!
//! Diff resolution only needs three calls: the repository's default branch,
//! the open pull request for a branch, and the pull requests associated with
//! a commit. They sit behind [`PullRequestApi`] so the resolution logic can
//! be exercised without a network.

use async_trait::async_trait;
use diffref_core::{Config, Error, RepoSlug, Result};
use octocrab::Octocrab;
use octocrab::models::pulls::PullRequest;
use octocrab::Page;
use serde::Deserialize;
use tracing::{debug, info};

/// The parts of a pull request diff resolution looks at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullSummary {
    /// Pull request number.
    pub number: u64,
    /// Name of the branch the pull request targets.
    #[serde(rename = "base", deserialize_with = "deserialize_base_ref")]
    pub base_ref: String,
    /// SHA of the merge commit, once merged (or the test merge commit while open).
    #[serde(default)]
    pub merge_commit_sha: Option<String>,
}

impl PullSummary {
    /// Create a summary.
    #[must_use]
    pub fn new(number: u64, base_ref: impl Into<String>, merge_commit_sha: Option<String>) -> Self {
        Self {
            number,
            base_ref: base_ref.into(),
            merge_commit_sha,
        }
    }
}

impl From<&PullRequest> for PullSummary {
    fn from(pull: &PullRequest) -> Self {
        Self {
            number: pull.number,
            base_ref: pull.base.ref_field.clone(),
            merge_commit_sha: pull.merge_commit_sha.clone(),
        }
    }
}

fn deserialize_base_ref<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Base {
        #[serde(rename = "ref")]
        ref_field: String,
    }
    Base::deserialize(deserializer).map(|base| base.ref_field)
}

/// Repository-scoped pull request queries.
#[async_trait]
pub trait PullRequestApi: Send + Sync {
    /// Name of the repository's default branch.
    async fn default_branch(&self) -> Result<String>;

    /// The first open pull request whose head is the given branch.
    ///
    /// `branch` may be a short name or a `refs/heads/...` ref.
    async fn find_pull_request(&self, branch: &str) -> Result<Option<PullSummary>>;

    /// Every pull request associated with a commit.
    async fn pulls_for_commit(&self, sha: &str) -> Result<Vec<PullSummary>>;
}

/// [`PullRequestApi`] backed by the GitHub REST API.
pub struct GitHubApi {
    client: Octocrab,
    repo: RepoSlug,
}

impl GitHubApi {
    /// Create a client for `repo` using the token and API URL from `config`.
    ///
    /// Without a token requests are unauthenticated, which only works for
    /// public repositories and is heavily rate limited.
    pub fn new(config: &Config, repo: RepoSlug) -> Result<Self> {
        let mut builder = Octocrab::builder();

        if let Some(token) = config.token() {
            builder = builder.personal_token(token.to_string());
        } else {
            debug!("No GitHub token configured, using unauthenticated requests");
        }

        if let Some(api_url) = &config.api_url {
            builder = builder.base_uri(api_url.as_str()).map_err(|e| {
                Error::configuration(format!("Invalid GitHub API URL '{api_url}': {e}"))
            })?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create GitHub client: {e}")))?;

        Ok(Self::with_client(client, repo))
    }

    /// Wrap an existing octocrab client.
    #[must_use]
    pub fn with_client(client: Octocrab, repo: RepoSlug) -> Self {
        Self { client, repo }
    }
}

#[async_trait]
impl PullRequestApi for GitHubApi {
    async fn default_branch(&self) -> Result<String> {
        debug!(repo = %self.repo, "Fetching default branch");
        let repository = self
            .client
            .repos(&self.repo.owner, &self.repo.repo)
            .get()
            .await
            .map_err(|e| Error::api("get repository", e.to_string()))?;

        repository.default_branch.ok_or_else(|| {
            Error::api(
                "get repository",
                format!("{} has no default branch", self.repo),
            )
        })
    }

    async fn find_pull_request(&self, branch: &str) -> Result<Option<PullSummary>> {
        let head = format!(
            "{}:{}",
            self.repo.owner,
            diffref_core::refs::branch_or_ref(branch)
        );
        debug!(%head, "Looking up open pull request");

        let page = self
            .client
            .pulls(&self.repo.owner, &self.repo.repo)
            .list()
            .head(head)
            .send()
            .await
            .map_err(|e| Error::api("list pull requests", e.to_string()))?;

        Ok(page.items.first().map(PullSummary::from))
    }

    async fn pulls_for_commit(&self, sha: &str) -> Result<Vec<PullSummary>> {
        let route = format!(
            "/repos/{}/{}/commits/{sha}/pulls?per_page=100",
            self.repo.owner, self.repo.repo
        );
        debug!(%sha, "Listing pull requests associated with commit");

        let first: Page<PullSummary> = self
            .client
            .get(route, None::<&()>)
            .await
            .map_err(|e| Error::api("list pull requests for commit", e.to_string()))?;

        let pulls = self
            .client
            .all_pages(first)
            .await
            .map_err(|e| Error::api("list pull requests for commit", e.to_string()))?;

        info!(%sha, count = pulls.len(), "Found pull requests associated with commit");
        Ok(pulls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_summary_from_api_json() {
        let json = r#"{
            "url": "https://api.github.com/repos/octo/repo/pulls/5",
            "id": 1,
            "number": 5,
            "state": "closed",
            "merge_commit_sha": "abc123",
            "base": { "ref": "main", "sha": "000", "label": "octo:main" },
            "head": { "ref": "feature", "sha": "111", "label": "octo:feature" }
        }"#;
        let pull: PullSummary = serde_json::from_str(json).unwrap();
        assert_eq!(pull, PullSummary::new(5, "main", Some("abc123".to_string())));
    }

    #[test]
    fn test_pull_summary_without_merge_commit() {
        let json = r#"{ "number": 9, "base": { "ref": "develop" }, "merge_commit_sha": null }"#;
        let pull: PullSummary = serde_json::from_str(json).unwrap();
        assert_eq!(pull.base_ref, "develop");
        assert!(pull.merge_commit_sha.is_none());
    }

    #[test]
    fn test_pull_summary_list() {
        let json = r#"[
            { "number": 1, "base": { "ref": "main" }, "merge_commit_sha": "a" },
            { "number": 2, "base": { "ref": "release" }, "merge_commit_sha": "b" }
        ]"#;
        let pulls: Vec<PullSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(pulls.len(), 2);
        assert_eq!(pulls[1].base_ref, "release");
    }

    #[test]
    fn test_new_rejects_invalid_api_url() {
        let config = Config {
            api_url: Some("not a url".to_string()),
            ..Config::default()
        };
        let result = GitHubApi::new(&config, RepoSlug::new("octo", "repo"));
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
