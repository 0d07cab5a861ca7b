use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

use cliutil::{FatalError, current_program_name};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "cliutil",
    version,
    about = "Usage banners, progress lines and fatal errors for shell scripts",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Subcommand,

    /// Verbose logging to stderr (repeat for more)
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Subcommand {
    /// Print the display name derived from a script path
    Name(NameArgs),
    /// Print a usage banner with the description aligned beneath it
    Usage(UsageArgs),
    /// Count from 1 to TOTAL on a single overwritten stderr line
    Progress(ProgressArgs),
    /// Report a fatal error for SCRIPT and exit with status 1
    Error(ErrorArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct NameArgs {
    /// Script path (defaults to this program)
    #[arg(value_name = "SCRIPT", value_hint = ValueHint::FilePath)]
    pub script: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct UsageArgs {
    /// Script path whose base name appears in the banner
    #[arg(value_name = "SCRIPT", value_hint = ValueHint::FilePath)]
    pub script: PathBuf,

    /// Description text (read from stdin when neither source is given)
    #[arg(long = "description", short = 'd', value_name = "TEXT", conflicts_with = "description_file")]
    pub description: Option<String>,

    /// Read the description from a file
    #[arg(long = "description-file", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub description_file: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ProgressArgs {
    /// Number of steps
    #[arg(long = "total", short = 'n', value_name = "N")]
    pub total: usize,

    /// Label shown before the count
    #[arg(long = "label", short = 'l', default_value = "Progress")]
    pub label: String,

    /// Pause between steps in milliseconds
    #[arg(long = "delay-ms", value_name = "MS", default_value_t = 0)]
    pub delay_ms: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ErrorArgs {
    /// Script path used for the "<name>: error:" prefix
    #[arg(value_name = "SCRIPT", value_hint = ValueHint::FilePath)]
    pub script: PathBuf,

    /// Message to report
    #[arg(value_name = "MESSAGE")]
    pub message: String,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if the subcommand fails; `error` always does.
pub fn run() -> Result<()> {
    let args = Args::parse();
    match &args.cmd {
        Subcommand::Name(a) => run_impl::run_name(a, args.verbose),
        Subcommand::Usage(a) => run_impl::run_usage(a, args.verbose),
        Subcommand::Progress(a) => run_impl::run_progress(a, args.verbose),
        Subcommand::Error(a) => run_impl::run_error(a, args.verbose),
    }
}

/// Turns any failure into the single fatal error kind, keeping an
/// already-framed [`FatalError`] as is.
pub fn into_fatal(err: anyhow::Error) -> FatalError {
    match err.downcast::<FatalError>() {
        Ok(fatal) => fatal,
        Err(other) => FatalError {
            program: current_program_name().to_string(),
            message: format!("{other:#}"),
        },
    }
}
