//! `GET /edit` renders the edit form; `POST /edit` applies it.
//!
//! Updating an id that does not exist is a 404, not a silent no-op.

use axum::{
  Form,
  extract::{Query, State, rejection::FormRejection},
  http::HeaderMap,
  response::{Html, Redirect},
};
use mistakes_core::store::MistakeStore;

use crate::{
  AppState,
  error::Error,
  handlers::{IdParams, MistakeForm, redirect_back, resolve_id},
  views::{self, EditPage},
};

/// `GET /edit?id=N`
pub async fn form<S>(
  State(state): State<AppState<S>>,
  Query(query): Query<IdParams>,
) -> Result<Html<String>, Error>
where
  S: MistakeStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = resolve_id(&query, None)?;

  let mistake = state.store
    .get_mistake(id)
    .await
    .map_err(Error::store("load mistake"))?
    .ok_or(Error::NotFound)?;
  let topics = state.store
    .list_topics()
    .await
    .map_err(Error::store("load topics"))?;

  let page = views::edit(&EditPage { mistake: &mistake, topics: &topics })?;
  Ok(Html(page))
}

/// `POST /edit[?id=N]` — the id may also arrive in the form body.
pub async fn apply<S>(
  State(state): State<AppState<S>>,
  Query(query): Query<IdParams>,
  headers:      HeaderMap,
  form:         Result<Form<MistakeForm>, FormRejection>,
) -> Result<Redirect, Error>
where
  S: MistakeStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let form = form.map(|Form(f)| f);
  let form_id = form.as_ref().ok().and_then(|f| f.id.as_deref());
  let id = resolve_id(&query, form_id)?;

  let form = form.map_err(|_| Error::BadRequest("Bad form".to_string()))?;
  let input = form.to_new_mistake()?;

  let updated = state.store
    .update_mistake(id, input)
    .await
    .map_err(Error::store("update mistake"))?
    .ok_or(Error::NotFound)?;

  tracing::info!(id = %updated.id, "mistake updated");
  Ok(redirect_back(&headers))
}
