mod error;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use prlog_github::{GitHubClient, GitHubConfig};
use prlog_operations::OperationError;
use prlog_operations::operations::{ReleaseNotesInput, ReleaseNotesOperation};
use prlog_operations::providers::{
    FileSystemChangelogPrepender, FileSystemProjectProvider, Git2WorkingTreeGuard,
    GitHubPullRequestSource, MarkdownRenderer,
};
use prlog_version::validate_version;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::error::{CliError, Result};

/// Name cargo passes as the first argument when run as `cargo prlog`.
const CARGO_SUBCOMMAND: &str = "prlog";

#[derive(Parser)]
#[command(name = "cargo-prlog")]
#[command(bin_name = "cargo prlog")]
#[command(version)]
#[command(
    about = "Prepend pull requests merged since the last release to the changelog",
    long_about = None
)]
struct Cli {
    /// Version number of the release, e.g. 1.4.0
    #[arg(value_name = "VERSION")]
    release_version: Option<String>,

    /// Skip the clean working tree and upstream checks
    #[arg(long)]
    sloppy: bool,

    /// Path to start project discovery from (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(strip_cargo_subcommand(std::env::args_os()));
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    let input = release_input(cli.release_version, cli.sloppy)?;
    let start_path = resolve_start_path(cli.path)?;

    let config = GitHubConfig::from_env();
    debug!(
        start_path = %start_path.display(),
        api_url = %config.api_url,
        authenticated = config.token.is_some(),
        "resolved invocation"
    );
    let client = GitHubClient::new(config)?;

    let operation = ReleaseNotesOperation::new(
        FileSystemProjectProvider::new(),
        Git2WorkingTreeGuard::new(),
        GitHubPullRequestSource::new(client),
        MarkdownRenderer::new(),
        FileSystemChangelogPrepender::new(),
    );

    let output = operation.execute(&start_path, &input)?;

    println!(
        "Added {} pull request(s) to {}",
        output.pull_request_count,
        output.changelog_path.display()
    );
    Ok(())
}

/// Rejects a missing or malformed version before any collaborator is built.
fn release_input(version: Option<String>, sloppy: bool) -> Result<ReleaseNotesInput> {
    validate_version(version.as_deref()).map_err(OperationError::from)?;
    Ok(ReleaseNotesInput { version, sloppy })
}

/// Drops the subcommand name cargo inserts when invoked as `cargo prlog`.
fn strip_cargo_subcommand<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();
    if args.get(1).is_some_and(|arg| arg == CARGO_SUBCOMMAND) {
        args.remove(1);
    }
    args
}

/// `RUST_LOG` wins; otherwise `-v` flags raise the level from `warn`.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
