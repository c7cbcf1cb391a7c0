//! Match and standings records.
//!
//! Records are plain values: created once by a decoder or a transform and
//! never mutated afterwards. Serde field names are the CSV column names, so
//! the structs double as the wire contract between the two stages.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// The result of a match from the home side's point of view.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
  HomeWin,
  VisitorWin,
  Tie,
}

impl Outcome {
  pub fn of(hgoal: u32, vgoal: u32) -> Self {
    match hgoal.cmp(&vgoal) {
      Ordering::Greater => Self::HomeWin,
      Ordering::Less => Self::VisitorWin,
      Ordering::Equal => Self::Tie,
    }
  }

  /// League points awarded as `(home, visitor)`: three for a win, one each
  /// for a tie.
  pub const fn points(self) -> (u32, u32) {
    match self {
      Self::HomeWin => (3, 0),
      Self::VisitorWin => (0, 3),
      Self::Tie => (1, 1),
    }
  }
}

// ─── Raw match ───────────────────────────────────────────────────────────────

/// One row of the published match history, before cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMatch {
  #[serde(rename = "Date")]
  pub date:      NaiveDate,
  #[serde(rename = "Season")]
  pub season:    String,
  pub home:      String,
  pub visitor:   String,
  /// Half-time score; discarded by the cleaner.
  #[serde(rename = "HT")]
  pub half_time: String,
  /// Full-time score string, e.g. `"2-1"`. Never parsed.
  #[serde(rename = "FT")]
  pub full_time: String,
  pub hgoal:     u32,
  pub vgoal:     u32,
  pub tier:      String,
  pub round:     String,
  pub group:     String,
  pub notes:     String,
}

// ─── Cleaned match ───────────────────────────────────────────────────────────

/// A match after projection, renaming and point derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanMatch {
  #[serde(rename = "Date")]
  pub date:    NaiveDate,
  #[serde(rename = "Season")]
  pub season:  String,
  pub home:    String,
  pub visitor: String,
  pub score:   String,
  pub hgoal:   u32,
  pub vgoal:   u32,
  pub hpoint:  u32,
  pub vpoint:  u32,
}

impl CleanMatch {
  pub fn outcome(&self) -> Outcome { Outcome::of(self.hgoal, self.vgoal) }
}

impl From<RawMatch> for CleanMatch {
  fn from(raw: RawMatch) -> Self {
    let (hpoint, vpoint) = Outcome::of(raw.hgoal, raw.vgoal).points();
    Self {
      date: raw.date,
      season: raw.season,
      home: raw.home,
      visitor: raw.visitor,
      score: raw.full_time,
      hgoal: raw.hgoal,
      vgoal: raw.vgoal,
      hpoint,
      vpoint,
    }
  }
}

// ─── Standings ───────────────────────────────────────────────────────────────

/// One team's totals for one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
  #[serde(rename = "Season")]
  pub season:        String,
  #[serde(rename = "Team")]
  pub team:          String,
  #[serde(rename = "Points")]
  pub points:        u32,
  #[serde(rename = "GS")]
  pub goals_scored:  u32,
  #[serde(rename = "GA")]
  pub goals_allowed: u32,
  #[serde(rename = "GD")]
  pub goal_diff:     i64,
  #[serde(rename = "Wins")]
  pub wins:          u32,
  #[serde(rename = "Losses")]
  pub losses:        u32,
  #[serde(rename = "Ties")]
  pub ties:          u32,
}

impl Standing {
  pub fn played(&self) -> u32 { self.wins + self.losses + self.ties }
}
