pub mod escape;
pub mod git_diff;
pub mod refs;

use crate::cli::{GitHubArgs, OutputFormat};
use diffref_core::{Config, DiffInfo, Error, EventContext, Result};
use diffref_github::{GitHubApi, diff_info};
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub enum Command {
    Refs {
        github: GitHubArgs,
        format: OutputFormat,
    },
    Escape {
        args: Vec<String>,
    },
    GitDiff {
        github: GitHubArgs,
        two_dot: bool,
        name_only: bool,
        paths: Vec<String>,
    },
}

impl Command {
    /// Run the command and return what should be written to stdout.
    pub async fn execute(self) -> Result<String> {
        match self {
            Self::Refs { github, format } => {
                let info = resolve(&github).await?;
                refs::render(&info, format)
            }
            Self::Escape { args } => Ok(escape::execute(&args)),
            Self::GitDiff {
                github,
                two_dot,
                name_only,
                paths,
            } => {
                let info = resolve(&github).await?;
                Ok(git_diff::command_line(&info, two_dot, name_only, &paths))
            }
        }
    }
}

/// Merge flags over the environment.
fn config_for(args: &GitHubArgs) -> Config {
    Config::from_env()
        .with_token(args.token.clone())
        .with_api_url(args.api_url.clone())
        .with_repository(args.repository.clone())
        .with_event_path(args.event_path.clone())
}

#[instrument(skip_all)]
async fn resolve(args: &GitHubArgs) -> Result<DiffInfo> {
    let config = config_for(args);
    let repository = config.repository.as_deref().ok_or_else(|| {
        Error::configuration("GITHUB_REPOSITORY is not set and --repository was not given")
    })?;

    let ctx = EventContext::from_env_with(repository, config.event_path.as_deref())?;
    debug!(context = %ctx, pull_request = ctx.is_pull_request(), "Loaded event context");

    // Building the client sends no request; pull request events never use it.
    let api = GitHubApi::new(&config, ctx.repo.clone())?;
    diff_info(&api, &ctx).await
}
