//! The `MistakeStore` trait.
//!
//! Implemented by storage backends (e.g. `mistakes-store-sqlite`). The web
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::{
  filter::MistakeFilter,
  mistake::{Mistake, MistakeId, NewMistake},
};

/// Abstraction over a mistake log backend.
///
/// Every method is a single atomic operation; there is no conflict detection
/// between concurrent writers (last write wins).
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait MistakeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist a new mistake. The store assigns the id; `created_at` is
  /// supplied by the caller and never changes afterwards.
  ///
  /// The returned record equals what [`get_mistake`](Self::get_mistake)
  /// yields later, so `created_at` carries only the precision the backend
  /// keeps.
  fn add_mistake(
    &self,
    input: NewMistake,
    created_at: DateTime<Utc>,
  ) -> impl Future<Output = Result<Mistake, Self::Error>> + Send + '_;

  /// Overwrite the editable fields of an existing mistake.
  ///
  /// Returns the updated record, or `None` if no mistake has that id.
  fn update_mistake(
    &self,
    id: MistakeId,
    input: NewMistake,
  ) -> impl Future<Output = Result<Option<Mistake>, Self::Error>> + Send + '_;

  /// Permanently remove a mistake.
  ///
  /// Idempotent: returns `false` (not an error) when the id does not exist.
  fn delete_mistake(
    &self,
    id: MistakeId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Retrieve a mistake by id. Returns `None` if not found.
  fn get_mistake(
    &self,
    id: MistakeId,
  ) -> impl Future<Output = Result<Option<Mistake>, Self::Error>> + Send + '_;

  /// Mistakes matching `filter`, newest date first (ties: highest id first),
  /// truncated to `limit` rows.
  fn search<'a>(
    &'a self,
    filter: &'a MistakeFilter,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Mistake>, Self::Error>> + Send + 'a;

  /// Total number of stored mistakes, ignoring any filter.
  fn count_mistakes(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Distinct topics in ascending order.
  fn list_topics(
    &self,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;
}
