//! Dashboard page route.

use axum::response::Html;

use crate::html::DASHBOARD_HTML;

/// GET / - Serve the dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
