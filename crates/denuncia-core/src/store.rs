//! The `ReportStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `denuncia-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::report::{NewReport, Report};

/// Abstraction over a Denuncia report store backend.
///
/// Reports are append-only: there is no update or delete.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ReportStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new report and return the stored record.
  ///
  /// The store assigns `id`, and `created_at` unless the input pins one.
  fn insert(
    &self,
    input: NewReport,
  ) -> impl Future<Output = Result<Report, Self::Error>> + Send + '_;

  /// Return every stored report. Order is unspecified.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Report>, Self::Error>> + Send + '_;

  /// Return every stored report, most recent `created_at` first.
  ///
  /// Reports sharing a timestamp keep their insertion order.
  fn list_by_recency(
    &self,
  ) -> impl Future<Output = Result<Vec<Report>, Self::Error>> + Send + '_;
}
