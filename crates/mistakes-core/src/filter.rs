//! Search filters shared by the list, rules, and export read paths.

use chrono::NaiveDate;

use crate::{Error, Result, mistake::parse_date};

/// Optional constraints for [`MistakeStore::search`](crate::store::MistakeStore::search).
///
/// `None` imposes no constraint. All present constraints must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MistakeFilter {
  /// Substring matched against topic, problem, missed, fix rule, and pattern.
  pub term:      Option<String>,
  /// Exact topic match.
  pub topic:     Option<String>,
  /// Inclusive lower bound on the mistake date.
  pub date_from: Option<NaiveDate>,
  /// Inclusive upper bound on the mistake date.
  pub date_to:   Option<NaiveDate>,
}

impl MistakeFilter {
  /// Build a filter from raw query-string values.
  ///
  /// Values are trimmed; blank values are treated as absent. A non-blank
  /// `from` or `to` that is not a `YYYY-MM-DD` date is an input error.
  pub fn parse(
    term:  Option<&str>,
    topic: Option<&str>,
    from:  Option<&str>,
    to:    Option<&str>,
  ) -> Result<Self> {
    Ok(Self {
      term:      non_blank(term).map(str::to_owned),
      topic:     non_blank(topic).map(str::to_owned),
      date_from: parse_bound(from, "from")?,
      date_to:   parse_bound(to, "to")?,
    })
  }

}

fn non_blank(s: Option<&str>) -> Option<&str> {
  s.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_bound(raw: Option<&str>, name: &'static str) -> Result<Option<NaiveDate>> {
  non_blank(raw)
    .map(|s| parse_date(s).ok_or(Error::InvalidFilterDate(name)))
    .transpose()
}
