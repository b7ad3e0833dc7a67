//! Handler for `GET /api/stats`.
//!
//! Response: `{"categoryCounts": {...}, "monthCounts": {...}, "total": n}`.

use std::sync::Arc;

use axum::{Json, extract::State};
use denuncia_core::{aggregate::DashboardStats, store::ReportStore};

use crate::error::ApiError;

/// `GET /api/stats`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<DashboardStats>, ApiError>
where
  S: ReportStore,
{
  let reports = store.list_all().await.map_err(ApiError::store)?;
  Ok(Json(DashboardStats::from_reports(&reports)))
}
