//! HTML front end for the mistake log.
//!
//! Exposes an axum [`Router`] serving the list, rules, edit, and CSV export
//! pages, backed by any [`MistakeStore`].

pub mod csv;
pub mod error;
pub mod handlers;
pub mod views;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  http::{HeaderValue, header},
  routing::{get, post},
};
use mistakes_core::store::MistakeStore;
use serde::Deserialize;
use tower_http::{
  services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use handlers::{add, delete, edit, export, list, rules};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, layered from defaults, `config.toml`,
/// `MISTAKES_*` environment variables, and command-line flags.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Directory served under `/static/`.
  pub static_dir: PathBuf,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: MistakeStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the mistake log.
///
/// Unsupported methods on a known path yield `405 Method Not Allowed`.
/// Every response carries `nosniff`, `DENY` framing, and `no-referrer`
/// headers.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: MistakeStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let static_files = ServeDir::new(&state.config.static_dir);

  Router::new()
    .route("/",           get(list::handler::<S>))
    .route("/add",        post(add::handler::<S>))
    .route("/edit",       get(edit::form::<S>).post(edit::apply::<S>))
    .route("/delete",     post(delete::handler::<S>))
    .route("/rules",      get(rules::handler::<S>))
    .route("/export.csv", get(export::handler::<S>))
    .nest_service("/static", static_files)
    .layer(TraceLayer::new_for_http())
    .layer(SetResponseHeaderLayer::overriding(
      header::X_CONTENT_TYPE_OPTIONS,
      HeaderValue::from_static("nosniff"),
    ))
    .layer(SetResponseHeaderLayer::overriding(
      header::X_FRAME_OPTIONS,
      HeaderValue::from_static("DENY"),
    ))
    .layer(SetResponseHeaderLayer::overriding(
      header::REFERRER_POLICY,
      HeaderValue::from_static("no-referrer"),
    ))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
