//! Table decoding.

use std::{fs::File, io::Read, path::Path};

use flate2::read::MultiGzDecoder;
use serde::de::DeserializeOwned;

use crate::{
  Compression,
  error::{Error, Result},
};

/// Load every row of the table at `path`.
///
/// Fails with [`Error::InputNotFound`] when the path does not exist, and with
/// a missing-columns error when the header lacks any `required` column.
pub fn read_table<T>(path: &Path, required: &[&str]) -> Result<Vec<T>>
where
  T: DeserializeOwned,
{
  if !path.exists() {
    return Err(Error::InputNotFound(path.to_path_buf()));
  }
  let file = File::open(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;

  match Compression::from_path(path) {
    Compression::Plain => decode(file, required),
    Compression::Gzip => decode(MultiGzDecoder::new(file), required),
  }
}

/// Decode CSV from `reader`, validating the header first.
///
/// Columns not named by `T` are ignored.
pub fn decode<R, T>(reader: R, required: &[&str]) -> Result<Vec<T>>
where
  R: Read,
  T: DeserializeOwned,
{
  let mut reader = csv::Reader::from_reader(reader);
  let headers = reader.headers()?.clone();
  liga_core::schema::validate(&headers, required)?;

  let mut rows = Vec::new();
  for (index, result) in reader.deserialize::<T>().enumerate() {
    let row = result.map_err(|source| Error::MalformedRow {
      line: source
        .position()
        .map(|pos| pos.line())
        .unwrap_or(index as u64 + 2),
      source,
    })?;
    rows.push(row);
  }
  Ok(rows)
}
