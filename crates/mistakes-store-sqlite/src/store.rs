//! [`SqliteStore`] — the SQLite implementation of [`MistakeStore`].

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension as _;

use mistakes_core::{
  filter::MistakeFilter,
  mistake::{Mistake, MistakeId, NewMistake},
  store::MistakeStore,
};

use crate::{
  encode::{encode_date, encode_dt, RawMistake},
  query::{search_query, SearchQuery, SELECT_COLUMNS},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A mistake log backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// The six editable columns, in statement order.
fn field_params(input: NewMistake) -> [String; 6] {
  [
    input.topic,
    encode_date(input.date),
    input.problem,
    input.missed,
    input.fix_rule,
    input.pattern,
  ]
}

// ─── MistakeStore impl ───────────────────────────────────────────────────────

impl MistakeStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn add_mistake(
    &self,
    input:      NewMistake,
    created_at: DateTime<Utc>,
  ) -> Result<Mistake> {
    let [topic, date, problem, missed, fix_rule, pattern] = field_params(input);
    let created_at = encode_dt(created_at);

    let raw: RawMistake = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          &format!(
            "INSERT INTO mistakes (
               topic, date, problem_statement, what_i_missed,
               fix_rule, pattern_to_remember, created_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {SELECT_COLUMNS}"
          ),
          rusqlite::params![
            topic, date, problem, missed, fix_rule, pattern, created_at,
          ],
          RawMistake::from_row,
        )?)
      })
      .await?;

    raw.into_mistake()
  }

  async fn update_mistake(
    &self,
    id:    MistakeId,
    input: NewMistake,
  ) -> Result<Option<Mistake>> {
    let [topic, date, problem, missed, fix_rule, pattern] = field_params(input);
    let id = id.get();

    let raw: Option<RawMistake> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "UPDATE mistakes
               SET topic = ?1, date = ?2, problem_statement = ?3,
                   what_i_missed = ?4, fix_rule = ?5, pattern_to_remember = ?6
               WHERE id = ?7
               RETURNING {SELECT_COLUMNS}"
            ),
            rusqlite::params![
              topic, date, problem, missed, fix_rule, pattern, id,
            ],
            RawMistake::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawMistake::into_mistake).transpose()
  }

  async fn delete_mistake(&self, id: MistakeId) -> Result<bool> {
    let id = id.get();

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM mistakes WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    Ok(removed > 0)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn get_mistake(&self, id: MistakeId) -> Result<Option<Mistake>> {
    let id = id.get();

    let raw: Option<RawMistake> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {SELECT_COLUMNS} FROM mistakes WHERE id = ?1"),
            rusqlite::params![id],
            RawMistake::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawMistake::into_mistake).transpose()
  }

  async fn search(&self, filter: &MistakeFilter, limit: usize) -> Result<Vec<Mistake>> {
    let SearchQuery { sql, args } = search_query(filter, limit);

    let raws: Vec<RawMistake> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(args), RawMistake::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawMistake::into_mistake).collect()
  }

  async fn count_mistakes(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM mistakes", [], |row| row.get(0))?)
      })
      .await?;

    Ok(u64::try_from(n).unwrap_or_default())
  }

  async fn list_topics(&self) -> Result<Vec<String>> {
    let topics = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT DISTINCT topic FROM mistakes ORDER BY topic")?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(topics)
  }
}
