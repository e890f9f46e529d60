//! Filter query builder shared by every search path.
//!
//! Filters become placeholder clauses plus a parallel, ordered argument list.
//! User values never reach the SQL text.

use mistakes_core::MistakeFilter;
use rusqlite::types::Value;

use crate::encode::encode_date;

/// Column list understood by [`RawMistake::from_row`](crate::encode::RawMistake::from_row).
pub const SELECT_COLUMNS: &str = "id, topic, date, problem_statement, what_i_missed, \
                                  fix_rule, pattern_to_remember, created_at";

const TERM_CLAUSE: &str = "(topic LIKE ? OR problem_statement LIKE ? OR what_i_missed LIKE ? \
                           OR fix_rule LIKE ? OR pattern_to_remember LIKE ?)";

/// `AND`-joined clauses and the values bound to their `?` placeholders.
#[derive(Debug, Default, PartialEq)]
pub struct Predicate {
  clauses: Vec<&'static str>,
  args:    Vec<Value>,
}

impl Predicate {
  pub fn from_filter(filter: &MistakeFilter) -> Self {
    let mut p = Self::default();

    if let Some(topic) = &filter.topic {
      p.push("topic = ?", [Value::Text(topic.clone())]);
    }
    if let Some(from) = filter.date_from {
      p.push("date >= ?", [Value::Text(encode_date(from))]);
    }
    if let Some(to) = filter.date_to {
      p.push("date <= ?", [Value::Text(encode_date(to))]);
    }
    if let Some(term) = &filter.term {
      let like = Value::Text(format!("%{term}%"));
      p.push(TERM_CLAUSE, std::iter::repeat_n(like, 5));
    }

    p
  }

  fn push(&mut self, clause: &'static str, args: impl IntoIterator<Item = Value>) {
    self.clauses.push(clause);
    self.args.extend(args);
  }

  /// `WHERE ...` followed by a newline, or the empty string for no filter.
  pub fn where_clause(&self) -> String {
    if self.clauses.is_empty() {
      String::new()
    } else {
      format!("WHERE {}\n", self.clauses.join(" AND "))
    }
  }
}

/// A complete, ready-to-prepare search statement.
#[derive(Debug)]
pub struct SearchQuery {
  pub sql:  String,
  pub args: Vec<Value>,
}

/// Build the ordered, capped search for `filter`.
pub fn search_query(filter: &MistakeFilter, limit: usize) -> SearchQuery {
  let predicate = Predicate::from_filter(filter);
  let sql = format!(
    "SELECT {SELECT_COLUMNS}\nFROM mistakes\n{}ORDER BY date DESC, id DESC\nLIMIT ?",
    predicate.where_clause(),
  );

  let mut args = predicate.args;
  args.push(Value::Integer(i64::try_from(limit).unwrap_or(i64::MAX)));

  SearchQuery { sql, args }
}
