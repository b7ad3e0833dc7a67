//! [`SqliteStore`] — the SQLite implementation of [`ReportStore`].

use std::path::Path;

use chrono::{SubsecRound as _, Utc};

use denuncia_core::{
  report::{NewReport, Report},
  store::ReportStore,
};

use crate::{
  encode::{RawReport, encode_dt},
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Denuncia report store backed by a single SQLite file.
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
    let version: i64 = self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(conn.query_row("PRAGMA user_version", [], |r| r.get(0))?)
      })
      .await?;
    tracing::debug!(schema_version = version, "report schema ready");
    Ok(())
  }

  /// Run `sql` (selecting the columns [`RawReport::from_row`] expects) and
  /// decode the rows.
  async fn select_reports(&self, sql: &'static str) -> Result<Vec<Report>> {
    let raws: Vec<RawReport> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
          .query_map([], RawReport::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawReport::into_report).collect()
  }
}

// ─── ReportStore impl ────────────────────────────────────────────────────────

impl ReportStore for SqliteStore {
  type Error = crate::Error;

  async fn insert(&self, input: NewReport) -> Result<Report> {
    let (category, description, created_at) = input.into_parts();
    // Stored precision is microseconds; truncate so the returned record
    // matches what a later read produces.
    let created_at = created_at.unwrap_or_else(Utc::now).trunc_subsecs(6);
    let at_str     = encode_dt(created_at);

    let (cat, desc) = (category.clone(), description.clone());
    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO reports (category, description, created_at) VALUES (?1, ?2, ?3)",
          rusqlite::params![cat, desc, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Report { id, category, description, created_at })
  }

  async fn list_all(&self) -> Result<Vec<Report>> {
    self
      .select_reports("SELECT id, category, description, created_at FROM reports ORDER BY id")
      .await
  }

  async fn list_by_recency(&self) -> Result<Vec<Report>> {
    self
      .select_reports(
        "SELECT id, category, description, created_at
         FROM reports
         ORDER BY created_at DESC, id ASC",
      )
      .await
  }
}
