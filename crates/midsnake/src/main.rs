mod config;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, Overrides};
use render::OutputFormat;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "midsnake",
    version,
    about = "Line diff of two files as a compact edit script",
    long_about = "Compares two files line by line with a linear-space Myers diff and prints \
    the edits turning OLD into NEW. Exits with 0 when the files are equal, 1 when they \
    differ and 2 on error."
)]
struct Args {
    /// Original file
    old: PathBuf,

    /// Modified file
    new: PathBuf,

    /// Milliseconds per middle-move search before splitting at the midpoint
    #[arg(long, value_name = "N")]
    timeout_ms: Option<u64>,

    /// Search with the shorter file as the primary sequence
    #[arg(long)]
    transpose: bool,

    /// Run the forward and backward searches concurrently
    #[arg(long)]
    parallel: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Config file (defaults to ~/.config/midsnake/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            timeout_ms: self.timeout_ms,
            transpose: self.transpose,
            parallel: self.parallel,
            format: self.format,
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("MIDSNAKE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Returns whether the two files were identical.
fn run(args: &Args) -> Result<bool> {
    let config = Config::load(args.config.as_deref())?.merge(&args.overrides());
    debug!(?config, "effective settings");

    let file_diff = config
        .engine()
        .diff_files(&args.old, &args.new)
        .with_context(|| {
            format!(
                "Failed to diff {} against {}",
                args.old.display(),
                args.new.display()
            )
        })?;
    let identical = file_diff.result.is_identical();
    let patches = file_diff
        .result
        .clone()
        .into_patches()
        .context("Failed to compact edit script")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render::render(config.format, &file_diff, &patches, &mut out)
        .context("Failed to write output")?;
    out.flush()?;

    Ok(identical)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("midsnake: {err:#}");
            ExitCode::from(2)
        }
    }
}
