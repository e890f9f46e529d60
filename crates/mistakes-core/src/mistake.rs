//! Mistake records: the single entity of the log.
//!
//! A mistake captures a problem, what was missed, the corrective rule, and a
//! pattern worth remembering, tagged with a topic and the calendar date on
//! which it happened.

use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::{Error, Result};

/// `strftime` layout of every stored and submitted date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Identity ────────────────────────────────────────────────────────────────

/// Store-assigned row identifier. Always positive and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MistakeId(i64);

impl MistakeId {
  /// Wrap a raw row id. Returns `None` for zero or negative values.
  pub fn new(raw: i64) -> Option<Self> { (raw > 0).then_some(Self(raw)) }

  pub fn get(self) -> i64 { self.0 }
}

impl FromStr for MistakeId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    s.parse::<i64>()
      .ok()
      .and_then(Self::new)
      .ok_or(Error::InvalidId)
  }
}

impl fmt::Display for MistakeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A persisted mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mistake {
  pub id:         MistakeId,
  pub topic:      String,
  /// When the mistake happened, not when it was recorded.
  pub date:       NaiveDate,
  pub problem:    String,
  pub missed:     String,
  pub fix_rule:   String,
  pub pattern:    String,
  /// Set once on insert; display only. Keeps the offset it was stored with.
  pub created_at: DateTime<FixedOffset>,
}

/// The six user-editable fields of a mistake, already trimmed and validated.
///
/// Used both to create a record and to overwrite an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMistake {
  pub topic:    String,
  pub date:     NaiveDate,
  pub problem:  String,
  pub missed:   String,
  pub fix_rule: String,
  pub pattern:  String,
}

impl NewMistake {
  /// Trim and validate raw form values.
  ///
  /// Every field must be non-empty after trimming, and `date` must be a
  /// `YYYY-MM-DD` calendar date.
  pub fn parse(
    topic:    &str,
    date:     &str,
    problem:  &str,
    missed:   &str,
    fix_rule: &str,
    pattern:  &str,
  ) -> Result<Self> {
    let fields = [topic, date, problem, missed, fix_rule, pattern].map(str::trim);
    if fields.iter().any(|f| f.is_empty()) {
      return Err(Error::MissingFields);
    }
    let [topic, date, problem, missed, fix_rule, pattern] = fields;

    Ok(Self {
      topic:    topic.to_owned(),
      date:     parse_date(date).ok_or(Error::InvalidDate)?,
      problem:  problem.to_owned(),
      missed:   missed.to_owned(),
      fix_rule: fix_rule.to_owned(),
      pattern:  pattern.to_owned(),
    })
  }
}

// ─── Dates ───────────────────────────────────────────────────────────────────

/// Parse a strict `YYYY-MM-DD` date.
///
/// `chrono` accepts unpadded months and days; stored dates are compared as
/// text, so anything but the zero-padded form is rejected.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
  let well_formed = s.len() == 10
    && s.bytes().enumerate().all(|(i, b)| match i {
      4 | 7 => b == b'-',
      _ => b.is_ascii_digit(),
    });
  if !well_formed {
    return None;
  }
  NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

pub fn format_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }
