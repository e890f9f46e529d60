//! `GET /export.csv` — filtered mistakes as a CSV attachment.

use axum::{
  extract::{Query, State},
  http::header,
  response::{IntoResponse, Response},
};
use mistakes_core::store::MistakeStore;

use crate::{
  AppState, csv,
  error::Error,
  handlers::{EXPORT_LIMIT, FilterParams},
};

pub async fn handler<S>(
  State(state):   State<AppState<S>>,
  Query(params): Query<FilterParams>,
) -> Result<Response, Error>
where
  S: MistakeStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let filter = params.to_filter()?;

  let items = state.store
    .search(&filter, EXPORT_LIMIT)
    .await
    .map_err(Error::store("export"))?;

  tracing::debug!(rows = items.len(), "exporting mistakes");

  Ok((
    [
      (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
      (header::CONTENT_DISPOSITION, "attachment; filename=\"mistakes.csv\""),
    ],
    csv::serialize(&items),
  )
    .into_response())
}
