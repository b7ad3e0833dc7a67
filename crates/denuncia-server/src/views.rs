//! Static HTML views: the submission form and the dashboard.
//!
//! Both pages are compiled into the binary and talk to the JSON API from the
//! browser; the server does no templating.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../assets/index.html");
const DASHBOARD_HTML: &str = include_str!("../assets/dashboard.html");

/// `GET /`
pub async fn index() -> Html<&'static str> { Html(INDEX_HTML) }

/// `GET /dashboard`
pub async fn dashboard() -> Html<&'static str> { Html(DASHBOARD_HTML) }
