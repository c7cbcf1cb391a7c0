//! The cleaning stage: raw match rows in, cleaned rows with points out.
//!
//! Pipeline:
//!   Vec<RawMatch>
//!     └─ round filter (opt-in)
//!          └─ project + rename + derive points → CleanMatch
//!               └─ stable sort by date

use strum::IntoEnumIterator;

use crate::record::{CleanMatch, Outcome, RawMatch};

/// Knobs for [`clean`].
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
  /// Rows whose `round` equals one of these values are dropped before
  /// cleaning (e.g. `"phase2"`). Empty keeps every row.
  pub exclude_rounds: Vec<String>,
}

impl CleanOptions {
  fn excludes(&self, raw: &RawMatch) -> bool {
    self.exclude_rounds.iter().any(|r| *r == raw.round)
  }
}

/// Row counts gathered while cleaning.
///
/// `home_wins + visitor_wins + ties` always equals the number of cleaned
/// rows, and adding `excluded` gives `rows_in`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanSummary {
  pub rows_in:      usize,
  pub excluded:     usize,
  pub home_wins:    usize,
  pub visitor_wins: usize,
  pub ties:         usize,
}

impl CleanSummary {
  fn tally(&mut self, outcome: Outcome) {
    match outcome {
      Outcome::HomeWin => self.home_wins += 1,
      Outcome::VisitorWin => self.visitor_wins += 1,
      Outcome::Tie => self.ties += 1,
    }
  }

  pub fn count(&self, outcome: Outcome) -> usize {
    match outcome {
      Outcome::HomeWin => self.home_wins,
      Outcome::VisitorWin => self.visitor_wins,
      Outcome::Tie => self.ties,
    }
  }

  /// Row count per outcome, in declaration order.
  pub fn by_outcome(&self) -> impl Iterator<Item = (Outcome, usize)> + '_ {
    Outcome::iter().map(|outcome| (outcome, self.count(outcome)))
  }

  pub fn rows_out(&self) -> usize {
    self.by_outcome().map(|(_, rows)| rows).sum()
  }
}

/// The cleaned table and how it was produced.
#[derive(Debug, Clone)]
pub struct Cleaned {
  pub matches: Vec<CleanMatch>,
  pub summary: CleanSummary,
}

/// Clean a raw match table.
///
/// Every retained row yields exactly one [`CleanMatch`]. The result is
/// ordered by date; rows sharing a date keep their input order.
pub fn clean(rows: Vec<RawMatch>, options: &CleanOptions) -> Cleaned {
  let mut summary = CleanSummary {
    rows_in: rows.len(),
    ..CleanSummary::default()
  };

  let mut matches = Vec::with_capacity(rows.len());
  for raw in rows {
    if options.excludes(&raw) {
      summary.excluded += 1;
      continue;
    }
    let cleaned = CleanMatch::from(raw);
    summary.tally(cleaned.outcome());
    matches.push(cleaned);
  }

  // `sort_by_key` is stable.
  matches.sort_by_key(|m| m.date);

  Cleaned { matches, summary }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tests::raw;

  #[test]
  fn points_follow_the_outcome_table() {
    let rows = vec![
      raw("1930-01-01", "1929", "A", "B", 2, 1),
      raw("1930-01-02", "1929", "C", "D", 0, 4),
      raw("1930-01-03", "1929", "E", "F", 3, 3),
    ];
    let cleaned = clean(rows, &CleanOptions::default());
    let points: Vec<_> =
      cleaned.matches.iter().map(|m| (m.hpoint, m.vpoint)).collect();
    assert_eq!(points, vec![(3, 0), (0, 3), (1, 1)]);
  }

  #[test]
  fn output_is_sorted_by_date_and_stable_within_a_date() {
    let rows = vec![
      raw("1930-02-01", "1929", "late", "x", 1, 0),
      raw("1930-01-01", "1929", "first", "x", 1, 1),
      raw("1930-01-15", "1929", "mid", "x", 0, 2),
      raw("1930-01-01", "1929", "second", "x", 5, 0),
      raw("1930-01-01", "1929", "third", "x", 0, 0),
    ];
    let cleaned = clean(rows, &CleanOptions::default());
    let homes: Vec<_> = cleaned.matches.iter().map(|m| m.home.as_str()).collect();
    assert_eq!(homes, vec!["first", "second", "third", "mid", "late"]);
    assert!(cleaned.matches.windows(2).all(|w| w[0].date <= w[1].date));
  }

  #[test]
  fn summary_partitions_cover_every_row() {
    let rows = vec![
      raw("1930-01-01", "1929", "A", "B", 2, 1),
      raw("1930-01-01", "1929", "C", "D", 1, 2),
      raw("1930-01-01", "1929", "E", "F", 0, 0),
      raw("1930-01-08", "1929", "B", "A", 2, 2),
      raw("1930-01-08", "1929", "D", "C", 4, 1),
    ];
    let cleaned = clean(rows, &CleanOptions::default());
    let s = cleaned.summary;
    assert_eq!(s.rows_in, 5);
    assert_eq!(s.excluded, 0);
    assert_eq!((s.home_wins, s.visitor_wins, s.ties), (2, 1, 2));
    assert_eq!(s.rows_out(), cleaned.matches.len());
  }

  #[test]
  fn summary_lists_counts_under_outcome_names() {
    let rows = vec![
      raw("1930-01-01", "1929", "A", "B", 2, 1),
      raw("1930-01-01", "1929", "C", "D", 0, 0),
      raw("1930-01-08", "1929", "B", "A", 3, 0),
    ];
    let cleaned = clean(rows, &CleanOptions::default());
    let named: Vec<_> = cleaned
      .summary
      .by_outcome()
      .map(|(outcome, rows)| (outcome.to_string(), rows))
      .collect();
    assert_eq!(
      named,
      vec![
        ("home_win".to_string(), 2),
        ("visitor_win".to_string(), 0),
        ("tie".to_string(), 1),
      ]
    );
  }

  #[test]
  fn default_options_keep_every_round() {
    let mut second_phase = raw("1930-01-01", "1929", "A", "B", 1, 0);
    second_phase.round = "phase2".into();
    let cleaned = clean(vec![second_phase], &CleanOptions::default());
    assert_eq!(cleaned.matches.len(), 1);
  }

  #[test]
  fn excluded_rounds_are_dropped_and_counted() {
    let mut second_phase = raw("1930-03-01", "1929", "A", "B", 1, 0);
    second_phase.round = "phase2".into();
    let rows = vec![raw("1930-01-01", "1929", "A", "B", 1, 0), second_phase];
    let options = CleanOptions {
      exclude_rounds: vec!["phase2".into()],
    };
    let cleaned = clean(rows, &options);
    assert_eq!(cleaned.matches.len(), 1);
    assert_eq!(cleaned.summary.excluded, 1);
    assert_eq!(cleaned.summary.rows_in, 2);
    assert_eq!(cleaned.summary.rows_out(), 1);
  }

  #[test]
  fn empty_table_cleans_to_empty_table() {
    let cleaned = clean(Vec::new(), &CleanOptions::default());
    assert!(cleaned.matches.is_empty());
    assert_eq!(cleaned.summary, CleanSummary::default());
  }
}
