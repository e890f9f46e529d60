//! `GET /rules` — fix rules and patterns as revision cards.

use axum::{
  extract::{Query, State},
  response::Html,
};
use mistakes_core::store::MistakeStore;

use crate::{
  AppState,
  error::Error,
  handlers::{FilterParams, RULES_LIMIT},
  views::{self, RulesPage},
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

  let items = state.store
    .search(&filter, RULES_LIMIT)
    .await
    .map_err(Error::store("load rules"))?;
  let topics = state.store
    .list_topics()
    .await
    .map_err(Error::store("load topics"))?;

  let page = views::rules(&RulesPage {
    filters: &params.echo(),
    items:   &items,
    topics:  &topics,
  })?;
  Ok(Html(page))
}
