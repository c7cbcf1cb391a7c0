//! Table encoding.

use std::{io::Write, path::Path};

use flate2::write::GzEncoder;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::{
  Compression,
  error::{Error, Result},
};

/// Encode `rows` as CSV under `header`.
///
/// The header line is always written, even for an empty table. Field order
/// follows the row type's field order, which must match `header`.
pub fn encode<T>(rows: &[T], header: &[&str]) -> Result<Vec<u8>>
where
  T: Serialize,
{
  let mut writer = csv::WriterBuilder::new()
    .has_headers(false)
    .from_writer(Vec::new());
  writer.write_record(header)?;
  for row in rows {
    writer.serialize(row)?;
  }
  writer
    .into_inner()
    .map_err(|e| Error::Csv(e.into_error().into()))
}

/// Write `rows` to `path`, gzip-compressed when the name ends in `.csv.gz`.
///
/// The whole file is encoded in memory, written to a temporary file beside
/// `path`, and renamed over `path` only once that write has succeeded. On
/// failure whatever was at `path` before is left untouched.
pub fn write_table<T>(
  path: &Path,
  rows: &[T],
  header: &[&str],
) -> Result<Compression>
where
  T: Serialize,
{
  let io_error = |source: std::io::Error| Error::Io {
    path: path.to_path_buf(),
    source,
  };

  let compression = Compression::from_path(path);
  let csv = encode(rows, header)?;
  let bytes = match compression {
    Compression::Plain => csv,
    Compression::Gzip => gzip(&csv).map_err(io_error)?,
  };

  let dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };
  // Dropping the temp file on any early return removes it.
  let mut staged = NamedTempFile::new_in(dir).map_err(io_error)?;
  staged.write_all(&bytes).map_err(io_error)?;
  // Temp files are created owner-only; published tables are world-readable.
  #[cfg(unix)]
  {
    use std::{fs::Permissions, os::unix::fs::PermissionsExt};
    staged
      .as_file()
      .set_permissions(Permissions::from_mode(0o644))
      .map_err(io_error)?;
  }
  staged.as_file().sync_all().map_err(io_error)?;
  staged.persist(path).map_err(|e| io_error(e.error))?;

  Ok(compression)
}

/// Gzip `data` with a fixed header (no name, zero mtime), so equal input
/// gives equal bytes.
fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
  let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
  encoder.write_all(data)?;
  encoder.finish()
}
