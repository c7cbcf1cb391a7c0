//! `standings` — aggregate a cleaned match table into ranked season
//! standings.
//!
//! # Usage
//!
//! ```text
//! standings results/spain_clean.csv results/season_standings.csv
//! ```

use std::process::ExitCode;

use clap::Parser;
use liga_cli::{Paths, finish, init_tracing, stages::run_standings};
use liga_core::standings::{StandingsOptions, TeamDiscovery};

#[derive(Parser, Debug)]
#[command(
  name = "standings",
  version,
  about = "Build per-season team standings from cleaned match history"
)]
struct Cli {
  #[command(flatten)]
  paths: Paths,

  /// Only list teams that hosted a match in the season, as the legacy
  /// standings generator did.
  #[arg(long)]
  home_only_teams: bool,
}

fn main() -> ExitCode {
  init_tracing();
  let cli = Cli::parse();

  let teams = if cli.home_only_teams {
    TeamDiscovery::HomeOnly
  } else {
    TeamDiscovery::HomeAndVisitor
  };
  finish(run_standings(&cli.paths, &StandingsOptions { teams }))
}
