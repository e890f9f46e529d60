//! `POST /add` — record a new mistake.

use axum::{
  Form,
  extract::{State, rejection::FormRejection},
  http::HeaderMap,
  response::Redirect,
};
use chrono::Utc;
use mistakes_core::store::MistakeStore;

use crate::{
  AppState,
  error::Error,
  handlers::{MistakeForm, redirect_back},
};

pub async fn handler<S>(
  State(state): State<AppState<S>>,
  headers:      HeaderMap,
  form:         Result<Form<MistakeForm>, FormRejection>,
) -> Result<Redirect, Error>
where
  S: MistakeStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Form(form) = form.map_err(|_| Error::BadRequest("Bad form".to_string()))?;
  let input = form.to_new_mistake()?;

  let mistake = state.store
    .add_mistake(input, Utc::now())
    .await
    .map_err(Error::store("save mistake"))?;

  tracing::info!(id = %mistake.id, topic = %mistake.topic, "mistake recorded");
  Ok(redirect_back(&headers))
}
