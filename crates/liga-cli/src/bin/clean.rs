//! `clean` — turn a raw league match table into cleaned rows with points.
//!
//! # Usage
//!
//! ```text
//! clean data/spain.csv results/spain_clean.csv
//! clean data/spain.csv results/spain_clean.csv.gz --exclude-round phase2
//! ```

use std::process::ExitCode;

use clap::Parser;
use liga_cli::{Paths, finish, init_tracing, stages::run_clean};
use liga_core::clean::CleanOptions;

#[derive(Parser, Debug)]
#[command(
  name = "clean",
  version,
  about = "Clean raw league match history and derive match points"
)]
struct Cli {
  #[command(flatten)]
  paths: Paths,

  /// Drop rows whose `round` equals ROUND before cleaning. May be repeated.
  #[arg(long = "exclude-round", value_name = "ROUND")]
  exclude_rounds: Vec<String>,
}

fn main() -> ExitCode {
  init_tracing();
  let cli = Cli::parse();

  let options = CleanOptions {
    exclude_rounds: cli.exclude_rounds,
  };
  finish(run_clean(&cli.paths, &options))
}
