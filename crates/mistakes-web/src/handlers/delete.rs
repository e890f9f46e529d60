//! `POST /delete` — permanently remove a mistake.
//!
//! Deleting an id that no longer exists still redirects back.

use axum::{
  Form,
  extract::{Query, State, rejection::FormRejection},
  http::HeaderMap,
  response::Redirect,
};
use mistakes_core::store::MistakeStore;

use crate::{
  AppState,
  error::Error,
  handlers::{IdParams, redirect_back, resolve_id},
};

pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Query(query): Query<IdParams>,
  headers:      HeaderMap,
  form:         Result<Form<IdParams>, FormRejection>,
) -> Result<Redirect, Error>
where
  S: MistakeStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  // The id may come from the query string alone, so an absent body is fine.
  let form = form.map(|Form(f)| f).unwrap_or_default();
  let id = resolve_id(&query, form.id.as_deref())?;

  let removed = state.store
    .delete_mistake(id)
    .await
    .map_err(Error::store("delete mistake"))?;

  tracing::info!(%id, removed, "mistake deleted");
  Ok(redirect_back(&headers))
}
