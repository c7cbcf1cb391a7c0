//! CSV codec for league match tables.
//!
//! Reads header-ful CSV (plain or gzip) into [`liga_core`] records and writes
//! them back out. The header is checked against the table's column contract
//! before any row is decoded, and output is fully encoded in memory before
//! the destination path is touched, so a failed run never leaves a partial
//! file behind.
//!
//! # Quick start
//!
//! ```no_run
//! use liga_table::{read_raw_matches, write_clean_matches};
//!
//! let raw = read_raw_matches("data/spain.csv").unwrap();
//! let cleaned = liga_core::clean::clean(raw, &Default::default());
//! write_clean_matches("results/spain_clean.csv.gz", &cleaned.matches).unwrap();
//! ```

mod compression;
pub mod error;
mod read;
mod write;

use std::path::Path;

pub use compression::Compression;
pub use error::{Error, Result};
use liga_core::{
  record::{CleanMatch, RawMatch, Standing},
  schema::{CLEAN_MATCH_COLUMNS, RAW_MATCH_COLUMNS, STANDING_COLUMNS},
};
pub use read::{decode, read_table};
pub use write::{encode, write_table};

// ─── Typed entry points ──────────────────────────────────────────────────────

/// Load a raw match table, requiring every raw column.
pub fn read_raw_matches(path: impl AsRef<Path>) -> Result<Vec<RawMatch>> {
  read_table(path.as_ref(), &RAW_MATCH_COLUMNS)
}

/// Load a cleaned match table, requiring every cleaned column.
pub fn read_clean_matches(path: impl AsRef<Path>) -> Result<Vec<CleanMatch>> {
  read_table(path.as_ref(), &CLEAN_MATCH_COLUMNS)
}

/// Write a cleaned match table.
pub fn write_clean_matches(
  path: impl AsRef<Path>,
  rows: &[CleanMatch],
) -> Result<Compression> {
  write_table(path.as_ref(), rows, &CLEAN_MATCH_COLUMNS)
}

/// Write a standings table.
pub fn write_standings(
  path: impl AsRef<Path>,
  rows: &[Standing],
) -> Result<Compression> {
  write_table(path.as_ref(), rows, &STANDING_COLUMNS)
}
