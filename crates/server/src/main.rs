//! Flood dashboard web server.
//!
//! Serves the single-page map dashboard and the JSON API behind it.

mod config;
mod html;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use config::ServerConfig;
use routes::{get_map_view, index, list_markers, list_reports, map_click, submit_report};
use state::AppState;

/// Build the application router over the given state.
fn app(state: AppState) -> Router {
    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build API routes
    let api_routes = Router::new()
        .route("/map", get(get_map_view))
        .route("/map/click", post(map_click))
        .route("/reports", get(list_reports).post(submit_report))
        .route("/markers", get(list_markers));

    Router::new()
        .route("/", get(index))
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .init();

    let state = AppState::default();

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Dashboard listening on http://{addr}");

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use tower::ServiceExt;

    async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_routes_dispatch() {
        let state = AppState::default();

        let (status, body) = send(
            app(state.clone()),
            Method::POST,
            "/api/map/click",
            r#"{"lat_lng":[-1.2921,36.8219]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"pending":"-1.2921,36.8219"}"#);

        let (status, body) = send(
            app(state.clone()),
            Method::POST,
            "/api/reports",
            r#"{"n_clicks":1,"pending":"-1.2921,36.8219","severity":4}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Severity: 4"));

        let (status, body) = send(app(state.clone()), Method::GET, "/api/reports", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"[{"latitude":-1.2921,"longitude":36.8219,"severity":4}]"#
        );

        let (status, _) = send(app(state.clone()), Method::GET, "/api/markers", "").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(app(state.clone()), Method::GET, "/api/map", "").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(app(state), Method::GET, "/", "").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Add Flood"));
    }

    #[tokio::test]
    async fn test_fractional_severity_is_unprocessable() {
        let state = AppState::default();

        let (status, _) = send(
            app(state.clone()),
            Method::POST,
            "/api/reports",
            r#"{"n_clicks":1,"pending":"-1.2921,36.8219","severity":3.5}"#,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, body) = send(app(state), Method::GET, "/api/reports", "").await;
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_unknown_method_is_rejected() {
        let (status, _) = send(app(AppState::default()), Method::GET, "/api/map/click", "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
