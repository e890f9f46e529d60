//! CSV serializer for exported mistakes.
//!
//! Produces UTF-8, comma-separated rows terminated by `\n`. Fields are quoted
//! only when they contain a delimiter, quote, or line break, or start with
//! whitespace; embedded quotes are doubled (RFC 4180).

use chrono::SecondsFormat;
use mistakes_core::{Mistake, mistake::format_date};

/// Fixed export column order.
pub const HEADER: [&str; 8] = [
  "id",
  "date",
  "topic",
  "problem_statement",
  "what_i_missed",
  "fix_rule",
  "pattern_to_remember",
  "created_at",
];

/// Serialize `mistakes` in the given order, preceded by [`HEADER`].
pub fn serialize(mistakes: &[Mistake]) -> String {
  let mut out = String::new();
  write_row(&mut out, HEADER);

  for m in mistakes {
    let id = m.id.to_string();
    let date = format_date(m.date);
    let created_at = m.created_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    write_row(&mut out, [
      id.as_str(),
      date.as_str(),
      m.topic.as_str(),
      m.problem.as_str(),
      m.missed.as_str(),
      m.fix_rule.as_str(),
      m.pattern.as_str(),
      created_at.as_str(),
    ]);
  }

  out
}

fn write_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
  for (i, field) in fields.into_iter().enumerate() {
    if i > 0 {
      out.push(',');
    }
    write_field(out, field);
  }
  out.push('\n');
}

fn write_field(out: &mut String, field: &str) {
  if !needs_quotes(field) {
    out.push_str(field);
    return;
  }
  out.push('"');
  out.push_str(&field.replace('"', "\"\""));
  out.push('"');
}

fn needs_quotes(field: &str) -> bool {
  field.contains([',', '"', '\r', '\n'])
    || field.starts_with(char::is_whitespace)
}

#[cfg(test)]
mod tests {
  use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
  use mistakes_core::MistakeId;

  use super::*;

  fn mistake(id: i64, problem: &str) -> Mistake {
    Mistake {
      id:         MistakeId::new(id).unwrap(),
      topic:      "graphs".into(),
      date:       NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
      problem:    problem.into(),
      missed:     "visited set".into(),
      fix_rule:   "reset state".into(),
      pattern:    "colour nodes".into(),
      created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap().fixed_offset(),
    }
  }

  #[test]
  fn empty_export_is_just_the_header() {
    assert_eq!(
      serialize(&[]),
      "id,date,topic,problem_statement,what_i_missed,fix_rule,pattern_to_remember,created_at\n"
    );
  }

  #[test]
  fn rows_follow_input_order() {
    let csv = serialize(&[mistake(2, "second"), mistake(1, "first")]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
      lines[1],
      "2,2024-03-01,graphs,second,visited set,reset state,colour nodes,2024-03-01T09:30:00Z"
    );
    assert!(lines[2].starts_with("1,2024-03-01,graphs,first,"));
  }

  #[test]
  fn created_at_keeps_its_stored_offset() {
    let mut m = mistake(1, "first");
    m.created_at = FixedOffset::east_opt(3600)
      .unwrap()
      .with_ymd_and_hms(2024, 3, 1, 10, 30, 0)
      .unwrap();
    let csv = serialize(&[m]);
    assert!(csv.ends_with(",2024-03-01T10:30:00+01:00\n"), "csv: {csv}");
  }

  #[test]
  fn special_characters_are_quoted() {
    let csv = serialize(&[mistake(1, "said \"no\", then\nleft")]);
    assert!(
      csv.contains(",\"said \"\"no\"\", then\nleft\","),
      "csv: {csv}"
    );
  }

  #[test]
  fn plain_fields_are_not_quoted() {
    let mut out = String::new();
    write_field(&mut out, "plain text");
    assert_eq!(out, "plain text");
  }
}
