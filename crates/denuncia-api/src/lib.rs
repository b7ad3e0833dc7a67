//! JSON API for Denuncia.
//!
//! Exposes an axum [`Router`] backed by any [`denuncia_core::store::ReportStore`].
//! Static views, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(denuncia_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod reports;
pub mod stats;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use denuncia_core::store::ReportStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ReportStore + 'static,
{
  Router::new()
    .route("/enviar", post(reports::submit::<S>))
    .route("/api/stats", get(stats::handler::<S>))
    .route("/api/denuncias", get(reports::list::<S>))
    .with_state(store)
}
