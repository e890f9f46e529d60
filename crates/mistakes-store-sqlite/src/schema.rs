//! SQL schema for the mistake log.
//!
//! Executed on every open. Column names and order match data files written by
//! earlier releases and must not change.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS mistakes (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  topic TEXT NOT NULL,
  date TEXT NOT NULL, -- YYYY-MM-DD
  problem_statement TEXT NOT NULL,
  what_i_missed TEXT NOT NULL,
  fix_rule TEXT NOT NULL,
  pattern_to_remember TEXT NOT NULL,
  created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_mistakes_date ON mistakes(date DESC, id DESC);
CREATE INDEX IF NOT EXISTS idx_mistakes_topic ON mistakes(topic);
";
