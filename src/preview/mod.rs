//! Tandem Preview Server
//!
//! Local HTTP server for looking at a built UI bundle, built with Axum. The
//! site itself is fully static and never calls these routes; they exist for
//! previewing and for inspecting the content the site renders.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status, including whether the bundle is built
//! - `GET /content.json` - Full content snapshot
//! - `GET /api/v1/charts/:id` - One chart spec
//! - `GET /api/v1/topics/:key` - One topic with parsed sessions
//! - anything else - files from the bundle, falling back to `index.html`
//!
//! # Example
//!
//! ```rust,ignore
//! use tandem::config::PreviewConfig;
//! use tandem::preview::{serve, PreviewState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = PreviewState::new(PreviewConfig::default())?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{PreviewError, PreviewResult};
pub use state::PreviewState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the preview router with all routes and middleware
pub fn build_router(state: PreviewState) -> Router {
    let dist = state.dist_dir();
    let bundle = ServeDir::new(&dist).fallback(ServeFile::new(dist.join("index.html")));

    let api_routes = Router::new()
        .route("/charts/:id", get(routes::chart))
        .route("/topics/:key", get(routes::topic));

    let health_routes = Router::new()
        .route("/live", get(routes::liveness))
        .route("/", get(routes::health));

    Router::new()
        .route("/content.json", get(routes::content))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Start the preview server
pub async fn serve(state: PreviewState) -> Result<(), PreviewError> {
    let addr = state.config.addr();
    if !state.dist_ready() {
        tracing::warn!(
            "No index.html in {:?}; build the UI bundle first",
            state.config.dist_dir
        );
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Tandem preview listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PreviewError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Tandem preview shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreviewConfig;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>tandem</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('tandem')").unwrap();

        let config = PreviewConfig {
            dist_dir: dir.path().to_path_buf(),
            ..PreviewConfig::default()
        };
        let state = PreviewState::new(config).unwrap();
        (build_router(state), dir)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app();
        let response = get(app, "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_reports_bundle() {
        let (app, _dir) = create_test_app();
        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["dist_ready"], true);
    }

    #[tokio::test]
    async fn test_content_snapshot() {
        let (app, _dir) = create_test_app();
        let response = get(app, "/content.json").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["insights"].as_array().unwrap().len(), 5);
        assert_eq!(body["topics"].as_array().unwrap().len(), 5);
        assert_eq!(body["charts"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_chart_route() {
        let (app, _dir) = create_test_app();
        let response = get(app, "/api/v1/charts/topics").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["kind"], "doughnut");
        assert_eq!(body["labels"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_chart_is_not_found() {
        let (app, _dir) = create_test_app();
        let response = get(app, "/api/v1/charts/pie").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_topic_route() {
        let (app, _dir) = create_test_app();
        let response = get(app, "/api/v1/topics/ai-experiments").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["sessions"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_serves_bundle_files() {
        let (app, _dir) = create_test_app();
        let response = get(app, "/app.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("tandem"));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let (app, _dir) = create_test_app();
        let response = get(app, "/retro/valtina").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<html>tandem</html>");
    }
}
