//! Request handlers and the input types they share.

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod rules;

use axum::{
  http::{HeaderMap, header},
  response::Redirect,
};
use mistakes_core::{MistakeFilter, MistakeId, NewMistake};
use serde::Deserialize;

use crate::views::Filters;

/// Row cap for the list page.
pub const LIST_LIMIT: usize = 200;
/// Row cap for the rules page.
pub const RULES_LIMIT: usize = 500;
/// Row cap for CSV export.
pub const EXPORT_LIMIT: usize = 10_000;

// ─── Query parameters ────────────────────────────────────────────────────────

/// `?q=&topic=&from=&to=` as accepted by the list, rules, and export routes.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
  pub q:     Option<String>,
  pub topic: Option<String>,
  pub from:  Option<String>,
  pub to:    Option<String>,
}

impl FilterParams {
  pub fn to_filter(&self) -> mistakes_core::Result<MistakeFilter> {
    MistakeFilter::parse(
      self.q.as_deref(),
      self.topic.as_deref(),
      self.from.as_deref(),
      self.to.as_deref(),
    )
  }

  /// Trimmed values for re-populating the filter form.
  pub fn echo(&self) -> Filters {
    let trimmed = |s: &Option<String>| s.as_deref().unwrap_or_default().trim().to_owned();
    Filters {
      q:     trimmed(&self.q),
      topic: trimmed(&self.topic),
      from:  trimmed(&self.from),
      to:    trimmed(&self.to),
    }
  }
}

#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
  pub id: Option<String>,
}

// ─── Form bodies ─────────────────────────────────────────────────────────────

/// Add / edit form body. Missing fields deserialize as empty and are rejected
/// by validation rather than by the extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MistakeForm {
  pub id:                  Option<String>,
  pub topic:               String,
  pub date:                String,
  pub problem_statement:   String,
  pub what_i_missed:       String,
  pub fix_rule:            String,
  pub pattern_to_remember: String,
}

impl MistakeForm {
  pub fn to_new_mistake(&self) -> mistakes_core::Result<NewMistake> {
    NewMistake::parse(
      &self.topic,
      &self.date,
      &self.problem_statement,
      &self.what_i_missed,
      &self.fix_rule,
      &self.pattern_to_remember,
    )
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Resolve the target id: the query string wins, the form body is the
/// fallback.
pub(crate) fn resolve_id(
  query: &IdParams,
  form:  Option<&str>,
) -> mistakes_core::Result<MistakeId> {
  query
    .id
    .as_deref()
    .filter(|s| !s.is_empty())
    .or(form)
    .unwrap_or_default()
    .parse()
}

/// `303 See Other` to the page the browser came from, or `/`.
pub(crate) fn redirect_back(headers: &HeaderMap) -> Redirect {
  let back = headers
    .get(header::REFERER)
    .and_then(|v| v.to_str().ok())
    .filter(|s| !s.is_empty())
    .unwrap_or("/");
  Redirect::to(back)
}

#[cfg(test)]
mod tests {
  use axum::{http::HeaderValue, response::IntoResponse};

  use super::*;

  fn query(id: Option<&str>) -> IdParams { IdParams { id: id.map(str::to_owned) } }

  #[test]
  fn query_id_takes_precedence_over_form() {
    let id = resolve_id(&query(Some("4")), Some("9")).unwrap();
    assert_eq!(id.get(), 4);
  }

  #[test]
  fn form_id_is_the_fallback() {
    assert_eq!(resolve_id(&query(None), Some("9")).unwrap().get(), 9);
    assert_eq!(resolve_id(&query(Some("")), Some("9")).unwrap().get(), 9);
  }

  #[test]
  fn missing_or_bad_ids_are_rejected() {
    assert!(resolve_id(&query(None), None).is_err());
    assert!(resolve_id(&query(Some("0")), None).is_err());
    assert!(resolve_id(&query(Some("x1")), Some("1")).is_err());
  }

  #[test]
  fn redirect_defaults_to_root() {
    let resp = redirect_back(&HeaderMap::new()).into_response();
    assert_eq!(resp.headers()[header::LOCATION], "/");
  }

  #[test]
  fn redirect_follows_referer() {
    let mut headers = HeaderMap::new();
    headers.insert(header::REFERER, HeaderValue::from_static("/rules?topic=dp"));
    let resp = redirect_back(&headers).into_response();
    assert_eq!(resp.headers()[header::LOCATION], "/rules?topic=dp");
  }

  #[test]
  fn echo_trims_values() {
    let params = FilterParams {
      q: Some("  loop ".into()),
      topic: None,
      from: Some("2024-01-01 ".into()),
      to: None,
    };
    let echo = params.echo();
    assert_eq!(echo.q, "loop");
    assert_eq!(echo.topic, "");
    assert_eq!(echo.from, "2024-01-01");
  }
}
