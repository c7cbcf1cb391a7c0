//! The two pipeline stages as load → transform → save runs.

use anyhow::Context as _;
use liga_core::{
  clean::{CleanOptions, CleanSummary, clean},
  record::Standing,
  standings::{StandingsOptions, season_tables},
};

use crate::Paths;

/// What a standings run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandingsSummary {
  pub seasons: usize,
  pub rows:    usize,
}

/// Clean the raw match table at `paths.input` into `paths.output`.
pub fn run_clean(
  paths: &Paths,
  options: &CleanOptions,
) -> anyhow::Result<CleanSummary> {
  tracing::info!("Input file is: {}", paths.input.display());
  tracing::info!("Output file is: {}", paths.output.display());

  tracing::info!("Loading and validating input file.");
  let raw = liga_table::read_raw_matches(&paths.input)
    .with_context(|| format!("failed to load {}", paths.input.display()))?;
  tracing::info!(rows = raw.len(), "Loaded raw match table.");

  if !options.exclude_rounds.is_empty() {
    tracing::info!(rounds = ?options.exclude_rounds, "Excluding rounds.");
  }
  let cleaned = clean(raw, options);
  let summary = cleaned.summary;
  tracing::info!(excluded = summary.excluded, "Derived match points.");
  for (outcome, rows) in summary.by_outcome() {
    tracing::info!("{outcome} rows: {rows}");
  }

  tracing::info!("Saving output file.");
  let compression =
    liga_table::write_clean_matches(&paths.output, &cleaned.matches)
      .with_context(|| format!("failed to write {}", paths.output.display()))?;
  tracing::info!(
    rows = summary.rows_out(),
    "Wrote {compression} to {}",
    paths.output.display()
  );

  Ok(summary)
}

/// Aggregate the cleaned match table at `paths.input` into per-season
/// standings at `paths.output`.
pub fn run_standings(
  paths: &Paths,
  options: &StandingsOptions,
) -> anyhow::Result<StandingsSummary> {
  tracing::info!("Input file is: {}", paths.input.display());
  tracing::info!("Output file is: {}", paths.output.display());

  tracing::info!("Loading and validating input file.");
  let matches = liga_table::read_clean_matches(&paths.input)
    .with_context(|| format!("failed to load {}", paths.input.display()))?;
  tracing::info!(rows = matches.len(), "Loaded cleaned match table.");

  tracing::info!(teams = ?options.teams, "Building season standings.");
  let tables = season_tables(&matches, options);
  for table in &tables {
    tracing::debug!(
      season = %table.season,
      matches = table.matches,
      teams = table.standings.len(),
      appearances = table.standings.iter().map(Standing::played).sum::<u32>(),
      leader = table.standings.first().map(|s| s.team.as_str()),
      "Ranked season."
    );
  }

  let summary = StandingsSummary {
    seasons: tables.len(),
    rows:    tables.iter().map(|t| t.standings.len()).sum(),
  };
  let standings: Vec<_> =
    tables.into_iter().flat_map(|t| t.standings).collect();

  tracing::info!("Saving output file.");
  let compression = liga_table::write_standings(&paths.output, &standings)
    .with_context(|| format!("failed to write {}", paths.output.display()))?;
  tracing::info!(
    seasons = summary.seasons,
    rows = summary.rows,
    "Wrote {compression} to {}",
    paths.output.display()
  );

  Ok(summary)
}
