//! Compression selection by file name.

use std::{fmt, path::Path};

/// Suffix that selects gzip for both reading and writing.
const GZIP_SUFFIX: &str = ".csv.gz";

/// How a table file's bytes are stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
  Plain,
  Gzip,
}

impl Compression {
  /// `Gzip` when the file name ends in `.csv.gz`, `Plain` otherwise.
  pub fn from_path(path: &Path) -> Self {
    let gzip = path
      .file_name()
      .and_then(|name| name.to_str())
      .is_some_and(|name| name.ends_with(GZIP_SUFFIX));
    if gzip { Self::Gzip } else { Self::Plain }
  }
}

impl fmt::Display for Compression {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Plain => f.write_str("plain csv"),
      Self::Gzip => f.write_str("gzip csv"),
    }
  }
}
