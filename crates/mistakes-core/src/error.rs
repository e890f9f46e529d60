//! Error types for `mistakes-core`.
//!
//! Every variant is a client input error; the `Display` text is shown to the
//! user as-is.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("All fields are required.")]
  MissingFields,

  #[error("Invalid date format. Use YYYY-MM-DD.")]
  InvalidDate,

  /// A `from` / `to` filter bound that is not a `YYYY-MM-DD` date.
  #[error("Invalid '{0}' date. Use YYYY-MM-DD.")]
  InvalidFilterDate(&'static str),

  #[error("Missing/invalid id")]
  InvalidId,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
