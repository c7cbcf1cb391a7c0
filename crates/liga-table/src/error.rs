//! Error type for `liga-table`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] liga_core::Error),

  #[error("input file not found: {}", .0.display())]
  InputNotFound(PathBuf),

  /// A record that could not be decoded into the expected row type.
  /// `line` is the 1-based line number in the file, header included.
  #[error("malformed row at line {line}: {source}")]
  MalformedRow {
    line:   u64,
    #[source]
    source: csv::Error,
  },

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("i/o error on {}: {source}", .path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
