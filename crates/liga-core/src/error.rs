//! Error types for `liga-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// One or more required columns are absent from a table header.
  #[error("missing required column(s): {}", .0.join(", "))]
  MissingColumns(Vec<String>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
