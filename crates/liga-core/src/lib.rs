//! Core record types and transforms for league match history.
//!
//! Two pure stages live here: [`clean`] turns raw published match rows into
//! cleaned rows with point accounting, and [`standings`] folds cleaned rows
//! into ranked per-season standings. This crate does no I/O and no logging;
//! reading and writing tables is the job of `liga-table`.

pub mod clean;
pub mod error;
pub mod record;
pub mod schema;
pub mod standings;

pub use error::{Error, Result};
