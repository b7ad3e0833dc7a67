//! HTTP server for Denuncia.
//!
//! Combines the static views with the JSON API from `denuncia-api` into a
//! single axum [`Router`] backed by any [`ReportStore`].

pub mod views;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use denuncia_core::store::ReportStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `DENUNCIA_*` environment variables. Every field has a default.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    ServerConfig {
      host:       "127.0.0.1".to_string(),
      port:       5000,
      store_path: PathBuf::from("denuncias.db"),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: views, API, and request tracing.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: ReportStore + 'static,
{
  Router::new()
    .route("/",          get(views::index))
    .route("/dashboard", get(views::dashboard))
    .merge(denuncia_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use denuncia_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  async fn get_path(uri: &str) -> axum::response::Response {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    let req   = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router(store).oneshot(req).await.unwrap()
  }

  #[tokio::test]
  async fn index_serves_html() {
    let resp = get_path("/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(ct.starts_with("text/html"));
  }

  #[tokio::test]
  async fn dashboard_serves_html() {
    let resp = get_path("/dashboard").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html  = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/api/stats"));
    assert!(html.contains("/api/denuncias"));
  }

  #[tokio::test]
  async fn api_routes_are_mounted() {
    let resp = get_path("/api/stats").await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn unknown_path_is_404() {
    let resp = get_path("/nope").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[test]
  fn default_config_points_at_local_database() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.address(), "127.0.0.1:5000");
    assert_eq!(cfg.store_path, PathBuf::from("denuncias.db"));
  }
}
