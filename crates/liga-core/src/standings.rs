//! The standings stage: cleaned matches in, ranked per-season tables out.
//!
//! Seasons and teams are both kept in order of first appearance, and both
//! sorts involved are stable, so the same input always produces the same
//! table.

use std::{
  cmp::Ordering,
  collections::{HashMap, HashSet},
};

use crate::record::{CleanMatch, Standing};

// ─── Options ─────────────────────────────────────────────────────────────────

/// Which columns contribute teams to a season's table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TeamDiscovery {
  /// Every team that played in the season, home or away.
  #[default]
  HomeAndVisitor,
  /// Only teams that hosted at least one match in the season. A team seen
  /// solely as visitor gets no row. Kept for compatibility with tables
  /// produced by the legacy generator.
  HomeOnly,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandingsOptions {
  pub teams: TeamDiscovery,
}

// ─── Output ──────────────────────────────────────────────────────────────────

/// One season's ranked standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonTable {
  pub season:    String,
  /// Number of matches the season's rows cover.
  pub matches:   usize,
  /// Ranked by points, highest first.
  pub standings: Vec<Standing>,
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Compute ranked standings for every season and concatenate them, seasons
/// in order of first appearance.
pub fn aggregate(
  rows: &[CleanMatch],
  options: &StandingsOptions,
) -> Vec<Standing> {
  season_tables(rows, options)
    .into_iter()
    .flat_map(|table| table.standings)
    .collect()
}

/// Compute one ranked [`SeasonTable`] per season.
pub fn season_tables(
  rows: &[CleanMatch],
  options: &StandingsOptions,
) -> Vec<SeasonTable> {
  group_by_season(rows)
    .into_iter()
    .map(|(season, season_rows)| {
      let teams = discover_teams(&season_rows, options.teams);
      let mut standings: Vec<Standing> = teams
        .into_iter()
        .map(|team| reduce_team(season, team, &season_rows))
        .collect();
      rank(&mut standings);
      SeasonTable {
        season: season.to_string(),
        matches: season_rows.len(),
        standings,
      }
    })
    .collect()
}

/// Partition rows by season, seasons in order of first appearance and rows
/// in input order within each season.
pub fn group_by_season(rows: &[CleanMatch]) -> Vec<(&str, Vec<&CleanMatch>)> {
  let mut index: HashMap<&str, usize> = HashMap::new();
  let mut groups: Vec<(&str, Vec<&CleanMatch>)> = Vec::new();
  for row in rows {
    let slot = *index.entry(row.season.as_str()).or_insert_with(|| {
      groups.push((row.season.as_str(), Vec::new()));
      groups.len() - 1
    });
    groups[slot].1.push(row);
  }
  groups
}

/// Distinct team names in a season's rows, in order of first appearance.
/// Within a row the home team is seen before the visitor.
pub fn discover_teams<'a>(
  rows: &[&'a CleanMatch],
  mode: TeamDiscovery,
) -> Vec<&'a str> {
  let mut seen = HashSet::new();
  let mut teams = Vec::new();
  let mut push = |team: &'a str| {
    if seen.insert(team) {
      teams.push(team);
    }
  };
  for row in rows {
    push(row.home.as_str());
    if mode == TeamDiscovery::HomeAndVisitor {
      push(row.visitor.as_str());
    }
  }
  teams
}

/// Fold one team's home and away matches into a [`Standing`].
///
/// Points come from the recorded `hpoint`/`vpoint` columns; wins, losses and
/// ties come from the goal columns.
pub fn reduce_team(season: &str, team: &str, rows: &[&CleanMatch]) -> Standing {
  let mut tally = Tally::default();
  for row in rows {
    if row.home == team {
      tally.add(row.hpoint, row.hgoal, row.vgoal);
    }
    if row.visitor == team {
      tally.add(row.vpoint, row.vgoal, row.hgoal);
    }
  }
  tally.into_standing(season, team)
}

/// Order standings by points, highest first. Equal points keep their
/// current relative order.
pub fn rank(standings: &mut [Standing]) {
  standings.sort_by(|a, b| b.points.cmp(&a.points));
}

// ─── Accumulator ─────────────────────────────────────────────────────────────

#[derive(Default)]
struct Tally {
  points:  u32,
  scored:  u32,
  allowed: u32,
  wins:    u32,
  losses:  u32,
  ties:    u32,
}

impl Tally {
  /// Record one match from the team's side of the scoreline.
  fn add(&mut self, points: u32, scored: u32, allowed: u32) {
    self.points += points;
    self.scored += scored;
    self.allowed += allowed;
    match scored.cmp(&allowed) {
      Ordering::Greater => self.wins += 1,
      Ordering::Less => self.losses += 1,
      Ordering::Equal => self.ties += 1,
    }
  }

  fn into_standing(self, season: &str, team: &str) -> Standing {
    Standing {
      season:        season.to_string(),
      team:          team.to_string(),
      points:        self.points,
      goals_scored:  self.scored,
      goals_allowed: self.allowed,
      goal_diff:     i64::from(self.scored) - i64::from(self.allowed),
      wins:          self.wins,
      losses:        self.losses,
      ties:          self.ties,
    }
  }
}
