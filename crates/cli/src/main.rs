//! `diffref` command line entry point.

mod cli;
mod commands;
mod tracing;

use crate::cli::parse;
use crate::commands::Command;
use crate::tracing::{Level, LogLevel, TracingConfig};
use ::tracing::instrument;

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {panic_info}");
        eprintln!("Internal error occurred. Run with RUST_LOG=debug for more information.");
    }));

    if let Err(error) = run_main().await {
        eprintln!("{error:?}");
        std::process::exit(1);
    }
}

async fn run_main() -> miette::Result<()> {
    let cli = parse();

    let tracing_config = TracingConfig {
        format: cli.tracing_format(),
        level: Level::from(cli.level),
        enable_file_location: cli.level == LogLevel::Trace,
    };
    crate::tracing::init_tracing(tracing_config)?;

    let command: Command = cli.command.into();
    execute_command(command).await
}

#[instrument(name = "diffref_command", skip_all)]
#[allow(clippy::print_stdout)]
async fn execute_command(command: Command) -> miette::Result<()> {
    let output = command.execute().await?;

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
