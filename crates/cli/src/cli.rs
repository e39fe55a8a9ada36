use crate::commands::Command;
use crate::tracing::{LogLevel, TracingFormat};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diffref")]
#[command(about = "Resolve the base and head refs of a GitHub Actions event")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'l',
        long,
        global = true,
        help = "Set logging level",
        default_value = "warn",
        env = "DIFFREF_LOG_LEVEL",
        value_enum
    )]
    pub level: LogLevel,

    #[arg(long, global = true, help = "Output logs in JSON format")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        help = "Log output format",
        default_value = "compact",
        value_enum
    )]
    pub log_format: TracingFormat,
}

impl Cli {
    /// The log format, with `--json` taking precedence.
    pub fn tracing_format(&self) -> TracingFormat {
        if self.json {
            TracingFormat::Json
        } else {
            self.log_format
        }
    }
}

/// Options for reaching GitHub, overriding the runner's environment.
#[derive(Args, Debug, Clone, Default)]
pub struct GitHubArgs {
    #[arg(long, help = "GitHub token (defaults to GITHUB_TOKEN)")]
    pub token: Option<String>,

    #[arg(long, help = "REST API base URL (defaults to GITHUB_API_URL)")]
    pub api_url: Option<String>,

    #[arg(long, help = "Repository as owner/repo (defaults to GITHUB_REPOSITORY)")]
    pub repository: Option<String>,

    #[arg(long, help = "Event payload file (defaults to GITHUB_EVENT_PATH)")]
    pub event_path: Option<PathBuf>,
}

/// How resolved refs are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `base...head`
    #[default]
    Text,
    /// `{"base": ..., "head": ...}`
    Json,
    /// `base=` and `head=` lines, appended to `GITHUB_OUTPUT` when set
    Github,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Print the base and head refs for the current event")]
    Refs {
        #[command(flatten)]
        github: GitHubArgs,
        #[arg(long, short = 'f', help = "Output format", default_value = "text", value_enum)]
        format: OutputFormat,
    },
    #[command(about = "Escape arguments for a POSIX shell")]
    Escape {
        #[arg(help = "Arguments to escape", allow_hyphen_values = true)]
        args: Vec<String>,
    },
    #[command(about = "Print a shell-safe git diff command for the current event")]
    GitDiff {
        #[command(flatten)]
        github: GitHubArgs,
        #[arg(long, help = "Compare with '..' instead of '...'")]
        two_dot: bool,
        #[arg(long, help = "Only list changed file names")]
        name_only: bool,
        #[arg(last = true, help = "Limit the diff to these paths")]
        paths: Vec<String>,
    },
}

impl From<Commands> for Command {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Refs { github, format } => Self::Refs { github, format },
            Commands::Escape { args } => Self::Escape { args },
            Commands::GitDiff {
                github,
                two_dot,
                name_only,
                paths,
            } => Self::GitDiff {
                github,
                two_dot,
                name_only,
                paths,
            },
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
