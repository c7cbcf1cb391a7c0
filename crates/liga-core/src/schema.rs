//! Column contracts for each table and header validation.

use std::collections::HashSet;

use crate::{Error, Result};

/// Columns a raw match table must carry.
pub const RAW_MATCH_COLUMNS: [&str; 12] = [
  "Date", "Season", "home", "visitor", "HT", "FT", "hgoal", "vgoal", "tier",
  "round", "group", "notes",
];

/// Columns a cleaned match table must carry; also the cleaner's output
/// header.
pub const CLEAN_MATCH_COLUMNS: [&str; 9] = [
  "Date", "Season", "home", "visitor", "score", "hgoal", "vgoal", "hpoint",
  "vpoint",
];

/// The standings output header.
pub const STANDING_COLUMNS: [&str; 9] = [
  "Season", "Team", "Points", "GS", "GA", "GD", "Wins", "Losses", "Ties",
];

/// Required columns absent from `headers`, in `required` order.
///
/// Matching is exact and case-sensitive. Extra headers are ignored.
pub fn missing_columns<'r, I, S>(headers: I, required: &[&'r str]) -> Vec<&'r str>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let present: HashSet<String> =
    headers.into_iter().map(|h| h.as_ref().to_string()).collect();
  required
    .iter()
    .copied()
    .filter(|name| !present.contains(*name))
    .collect()
}

/// Fail with [`Error::MissingColumns`] unless every required column is
/// present.
pub fn validate<I, S>(headers: I, required: &[&str]) -> Result<()>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let missing = missing_columns(headers, required);
  if missing.is_empty() {
    return Ok(());
  }
  Err(Error::MissingColumns(
    missing.into_iter().map(str::to_string).collect(),
  ))
}
