//! Handlers for report submission and listing.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/enviar` | Body: `{"category":"...","description":"..."}` |
//! | `GET`  | `/api/denuncias` | Reports grouped by category, newest first |

use std::{collections::BTreeMap, sync::Arc};

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use denuncia_core::{
  aggregate::{ReportDetail, group_by_category_with_detail},
  report::NewReport,
  store::ReportStore,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, REQUIRED_FIELDS};

// ─── Submit ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /enviar`.
///
/// All fields are optional here so that a missing key is reported the same
/// way as an empty one. The Portuguese keys are read as fallbacks when the
/// English one is absent or empty.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitBody {
  pub category:    Option<String>,
  pub description: Option<String>,
  pub categoria:   Option<String>,
  pub descricao:   Option<String>,
}

fn first_present(primary: Option<String>, fallback: Option<String>) -> String {
  primary
    .filter(|s| !s.is_empty())
    .or(fallback)
    .unwrap_or_default()
}

impl TryFrom<SubmitBody> for NewReport {
  type Error = denuncia_core::Error;

  fn try_from(b: SubmitBody) -> Result<Self, Self::Error> {
    NewReport::new(
      first_present(b.category, b.categoria),
      first_present(b.description, b.descricao),
    )
  }
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
  pub success: bool,
}

/// `POST /enviar` — returns `{"success": true}` once the report is stored.
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<SubmitBody>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError>
where
  S: ReportStore,
{
  let Json(body) = body.map_err(|rejection| {
    tracing::warn!(reason = %rejection.body_text(), "unreadable submission");
    ApiError::BadRequest(REQUIRED_FIELDS.to_string())
  })?;

  let input = NewReport::try_from(body).inspect_err(|e| {
    tracing::warn!(error = %e, "rejected submission");
  })?;

  let report = store.insert(input).await.map_err(ApiError::store)?;
  tracing::info!(id = report.id, category = %report.category, "report stored");

  Ok(Json(SubmitResponse { success: true }))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /api/denuncias` — `{"<category>": [{"description", "created_at"}]}`.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<BTreeMap<String, Vec<ReportDetail>>>, ApiError>
where
  S: ReportStore,
{
  let reports = store.list_by_recency().await.map_err(ApiError::store)?;
  Ok(Json(group_by_category_with_detail(&reports)))
}
