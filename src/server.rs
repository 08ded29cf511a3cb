//! # HTTP Endpoint Module
//!
//! Exposes the auditor to browser clients:
//!
//! - `POST /api/seo-audit` with `{"url": "..."}` runs one audit
//! - `GET /health` answers `{"status": "ok"}`
//!
//! Audit failures are reported in the body with status 200. Only a missing
//! or empty `url` is answered with 400.

use crate::audit::{AuditOutcome, Auditor};
use crate::error::{Error, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Default address the server binds to
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Message returned when the request carries no usable `url`
pub const URL_REQUIRED: &str = "URL is required";

/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: String,

    /// Origins allowed to call the API; empty allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Build the CORS layer for this configuration
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        let allow_origin = if self.allowed_origins.is_empty() {
            AllowOrigin::any()
        } else {
            let origins = self
                .allowed_origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin)
                        .map_err(|e| Error::Config(format!("Invalid origin '{}': {}", origin, e)))
                })
                .collect::<Result<Vec<_>>>()?;
            AllowOrigin::list(origins)
        };

        Ok(CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any))
    }
}

/// Body of an audit request
#[derive(Debug, Default, Deserialize)]
pub struct AuditRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

/// Shared state handed to every handler
pub type AppState = Arc<Auditor>;

/// Build the application router
pub fn router(auditor: Auditor, config: &ServerConfig) -> Result<Router> {
    let state: AppState = Arc::new(auditor);

    Ok(Router::new()
        .route("/api/seo-audit", post(seo_audit))
        .route("/health", get(health))
        .layer(config.cors_layer()?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Bind and serve until `shutdown` resolves
pub async fn serve(
    auditor: Auditor,
    config: ServerConfig,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let app = router(auditor, &config)?;
    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn seo_audit(State(auditor): State<AppState>, body: Bytes) -> Response {
    let request: AuditRequest = serde_json::from_slice(&body).unwrap_or_else(|e| {
        warn!(error = %e, "Unreadable audit request body");
        AuditRequest::default()
    });

    let url = match request.url.filter(|url| !url.is_empty()) {
        Some(url) => url,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: URL_REQUIRED,
                }),
            )
                .into_response();
        }
    };

    let outcome = auditor.run(&url).await;
    if let AuditOutcome::Failed { error } = &outcome {
        warn!(url = %url, error = %error, "Audit failed");
    }

    (StatusCode::OK, Json(outcome)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditConfig;
    use axum::body::Body;
    use axum::http::{Request, header};
    use mockito::Server;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        let auditor = Auditor::new(AuditConfig::default()).unwrap();
        router(auditor, &ServerConfig::default()).unwrap()
    }

    async fn post_audit(app: Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/seo-audit")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_empty_url_is_rejected() {
        let (status, body) = post_audit(app(), r#"{"url": ""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "URL is required" }));
    }

    #[tokio::test]
    async fn test_missing_url_is_rejected() {
        let (status, body) = post_audit(app(), "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "URL is required" }));

        let (status, _) = post_audit(app(), "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_audit_failure_is_reported_with_200() {
        let mut server = Server::new_async().await;
        let _page = server
            .mock("GET", "/")
            .with_status(404)
            .create_async()
            .await;

        let body = json!({ "url": server.url() }).to_string();
        let (status, body) = post_audit(app(), &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "error": "Status code: 404" }));
    }

    #[tokio::test]
    async fn test_successful_audit() {
        let mut server = Server::new_async().await;
        let _page = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(
                r#"<html><head><title>T</title></head><body><h1>H</h1><img src="x.jpg"></body></html>"#,
            )
            .create_async()
            .await;
        let _robots = server
            .mock("GET", "/robots.txt")
            .with_status(200)
            .create_async()
            .await;
        let _sitemap = server
            .mock("GET", "/sitemap.xml")
            .with_status(404)
            .create_async()
            .await;

        let body = json!({ "url": server.url() }).to_string();
        let (status, body) = post_audit(app(), &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "title": "T",
                "meta_description": "Missing",
                "h1": "H",
                "total_images": 1,
                "image_alt_missing": 1,
                "word_count": 1,
                "has_canonical": false,
                "has_robots_txt": true,
                "has_sitemap_xml": false
            })
        );
    }

    #[tokio::test]
    async fn test_cors_allows_cross_origin() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/seo-audit")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_invalid_origin_is_config_error() {
        let config = ServerConfig {
            allowed_origins: vec!["http://bad\norigin".to_string()],
            ..ServerConfig::default()
        };
        assert!(matches!(config.cors_layer(), Err(Error::Config(_))));
    }
}
