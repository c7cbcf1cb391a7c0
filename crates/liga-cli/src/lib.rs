//! Shared plumbing for the `clean` and `standings` binaries.
//!
//! Both binaries take the same two positional arguments, log through
//! `tracing` to stderr, and exit with status 1 on any fatal error.

pub mod stages;

use std::{path::PathBuf, process::ExitCode};

use clap::Args;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

/// Input and output table paths. A path ending in `.csv.gz` is read or
/// written gzip-compressed.
#[derive(Args, Debug, Clone)]
pub struct Paths {
  /// Table to read.
  #[arg(value_name = "INPUT_FILE")]
  pub input:  PathBuf,

  /// Table to write. Created only after the input has been fully processed.
  #[arg(value_name = "OUTPUT_FILE")]
  pub output: PathBuf,
}

// ─── Process setup / teardown ─────────────────────────────────────────────────

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}

/// Map a stage result onto the process exit status, logging the full error
/// chain on failure.
pub fn finish<T>(result: anyhow::Result<T>) -> ExitCode {
  match result {
    Ok(_) => ExitCode::SUCCESS,
    Err(err) => {
      tracing::error!("{err:#}");
      ExitCode::FAILURE
    }
  }
}
