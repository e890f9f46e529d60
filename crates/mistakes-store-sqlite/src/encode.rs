//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD` so that text comparison orders them
//! correctly. `created_at` is written as RFC 3339 UTC in whole seconds; rows
//! written with a local UTC offset decode with that offset intact.

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use mistakes_core::{
  mistake::{DATE_FORMAT, format_date},
  Mistake, MistakeId,
};

use crate::{Error, Result};

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { format_date(d) }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── DateTime ────────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<FixedOffset>> {
  DateTime::parse_from_rfc3339(s)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row ─────────────────────────────────────────────────────────────────────

/// A `mistakes` row exactly as SQLite returns it.
pub struct RawMistake {
  pub id:         i64,
  pub topic:      String,
  pub date:       String,
  pub problem:    String,
  pub missed:     String,
  pub fix_rule:   String,
  pub pattern:    String,
  pub created_at: String,
}

impl RawMistake {
  /// Map a row selected with [`SELECT_COLUMNS`](crate::query::SELECT_COLUMNS).
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      topic:      row.get(1)?,
      date:       row.get(2)?,
      problem:    row.get(3)?,
      missed:     row.get(4)?,
      fix_rule:   row.get(5)?,
      pattern:    row.get(6)?,
      created_at: row.get(7)?,
    })
  }

  pub fn into_mistake(self) -> Result<Mistake> {
    Ok(Mistake {
      id:         MistakeId::new(self.id).ok_or(Error::RowId(self.id))?,
      topic:      self.topic,
      date:       decode_date(&self.date)?,
      problem:    self.problem,
      missed:     self.missed,
      fix_rule:   self.fix_rule,
      pattern:    self.pattern,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
