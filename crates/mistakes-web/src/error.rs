//! Error types and axum `IntoResponse` implementation.
//!
//! Client errors carry a short reason for the user. Store and render
//! failures are logged in full and answered with a generic message.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Invalid(#[from] mistakes_core::Error),
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("not found")]
  NotFound,
  #[error("failed to {action}: {source}")]
  Store {
    action: &'static str,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },
  #[error("render error: {0}")]
  Render(#[from] std::fmt::Error),
}

impl Error {
  /// Adapter for `map_err`: wrap a backend error with the action that failed.
  pub fn store<E>(action: &'static str) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |e| Error::Store { action, source: Box::new(e) }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Invalid(e) => {
        tracing::debug!(reason = %e, "rejected request");
        (StatusCode::BAD_REQUEST, e.to_string()).into_response()
      }
      Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
      Error::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
      Error::Store { action, source } => {
        tracing::error!(error = %source, "failed to {action}");
        let msg = format!("Failed to {action}");
        (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
      }
      Error::Render(e) => {
        tracing::error!(error = %e, "failed to render page");
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page")
          .into_response()
      }
    }
  }
}
