//! Error type for `mistakes-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A stored row id that is not a positive integer.
  #[error("invalid row id: {0}")]
  RowId(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
