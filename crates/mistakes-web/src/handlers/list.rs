//! `GET /` — the filtered mistake list with the add form.

use axum::{
  extract::{Query, State},
  response::Html,
};
use chrono::Local;
use mistakes_core::store::MistakeStore;

use crate::{
  AppState,
  error::Error,
  handlers::{FilterParams, LIST_LIMIT},
  views::{self, IndexPage},
};

pub async fn handler<S>(
  State(state):   State<AppState<S>>,
  Query(params): Query<FilterParams>,
) -> Result<Html<String>, Error>
where
  S: MistakeStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let filter = params.to_filter()?;

  let mistakes = state.store
    .search(&filter, LIST_LIMIT)
    .await
    .map_err(Error::store("load mistakes"))?;
  let total = state.store
    .count_mistakes()
    .await
    .map_err(Error::store("load mistakes"))?;
  let topics = state.store
    .list_topics()
    .await
    .map_err(Error::store("load topics"))?;

  let page = views::index(&IndexPage {
    today:    Local::now().date_naive(),
    filters:  &params.echo(),
    mistakes: &mistakes,
    total,
    topics:   &topics,
  })?;
  Ok(Html(page))
}
