//! Web API module for the keyword matrix service.
//!
//! This module provides the REST API consumed by the 3D keyword globe frontend,
//! and optionally serves the frontend's prebuilt static bundle.
//!
//! # Endpoints
//!
//! - `GET /api/health` - Health check
//! - `GET /api/keywords/matrix` - Matrix summary (totals, categories, timestamp)
//! - `GET /api/keywords/all` - All 442 keywords with sphere positions
//! - `GET /api/keywords/stats` - Keyword statistics
//! - `GET /*` - Static frontend bundle (only when the bundle directory exists)

pub mod static_files;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::constants::{SERVICE_DOMAIN, SERVICE_NAME};
use crate::models::{KeywordPoint, KeywordStats, MatrixSummary};
use crate::services::repository::local_timestamp;
use crate::services::{InMemoryKeywordRepository, KeywordRepository};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    config: Arc<Config>,
    /// Keyword data provider
    repository: Arc<dyn KeywordRepository>,
    /// Frontend bundle directory, if it existed when the state was built
    static_root: Option<PathBuf>,
}

impl AppState {
    /// Creates application state backed by the in-memory keyword repository.
    pub fn new(config: Config) -> Self {
        Self::with_repository(config, Arc::new(InMemoryKeywordRepository::new()))
    }

    /// Creates application state with a custom keyword repository.
    pub fn with_repository(config: Config, repository: Arc<dyn KeywordRepository>) -> Self {
        let static_root = config.static_root();
        Self {
            config: Arc::new(config),
            repository,
            static_root,
        }
    }

    /// Returns the service configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the frontend bundle directory, if one is mounted.
    #[must_use]
    pub fn static_root(&self) -> Option<&Path> {
        self.static_root.as_deref()
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (always "healthy").
    pub status: String,
    /// Service display name.
    pub service: String,
    /// Port the service is configured to listen on.
    pub port: u16,
    /// Local time of the check (ISO-8601).
    pub timestamp: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

/// Logs a repository failure and converts it into a 500 response.
fn internal_error(action: &str, err: &anyhow::Error) -> (StatusCode, Json<ApiError>) {
    error!("Failed to {}: {:#}", action, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::with_details(
            "Internal server error",
            format!("{err:#}"),
        )),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/health - Health check.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        port: state.config.server.port,
        timestamp: local_timestamp(),
    })
}

/// GET /api/keywords/matrix - Keyword matrix summary.
async fn keyword_matrix(State(state): State<AppState>) -> ApiResult<MatrixSummary> {
    let summary = state
        .repository
        .matrix_summary()
        .map_err(|e| internal_error("load keyword matrix", &e))?;

    info!("Keyword matrix summary served");
    Ok(Json(summary))
}

/// GET /api/keywords/all - Every keyword with its sphere position.
async fn all_keywords(State(state): State<AppState>) -> ApiResult<Vec<KeywordPoint>> {
    let keywords = state
        .repository
        .all_keywords()
        .map_err(|e| internal_error("load keyword list", &e))?;

    Ok(Json(keywords))
}

/// GET /api/keywords/stats - Keyword statistics.
async fn keyword_stats(State(state): State<AppState>) -> ApiResult<KeywordStats> {
    let stats = state
        .repository
        .stats()
        .map_err(|e| internal_error("load keyword stats", &e))?;

    Ok(Json(stats))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
///
/// The static bundle is installed as the fallback only when `state` has a
/// static root; otherwise unknown paths get axum's default 404.
pub fn create_router(state: AppState) -> Router {
    // The globe frontend may be hosted on another origin, so CORS is fully open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/keywords/matrix", get(keyword_matrix))
        .route("/api/keywords/all", get(all_keywords))
        .route("/api/keywords/stats", get(keyword_stats));

    if state.static_root().is_some() {
        router = router.fallback(static_files::serve_static);
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server until it is shut down.
///
/// Startup information is logged once here, before binding.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the server fails to start.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let state = AppState::new(config);

    match state.static_root() {
        Some(root) => info!("Serving frontend bundle from {}", root.display()),
        None => warn!(
            "Frontend bundle not found at {}; serving API only",
            state.config().frontend.static_dir.display()
        ),
    }

    info!("Starting {}", SERVICE_NAME);
    info!("Port: {}", addr.port());
    info!("Domain: {}", SERVICE_DOMAIN);
    info!("Feature: keyword 3D matrix visualization");

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_app_state_without_bundle() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.frontend.static_dir = temp_dir.path().join("missing");

        let state = AppState::new(config);
        assert!(state.static_root().is_none());
        assert_eq!(state.config().server.port, 8003);
    }

    #[test]
    fn test_app_state_with_bundle() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.frontend.static_dir = temp_dir.path().to_path_buf();

        let state = AppState::new(config);
        assert_eq!(state.static_root(), Some(temp_dir.path()));
    }

    #[test]
    fn test_internal_error_carries_details() {
        let err = anyhow::anyhow!("backing store offline");
        let (status, Json(body)) = internal_error("load keyword stats", &err);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal server error");
        assert_eq!(body.details.as_deref(), Some("backing store offline"));
    }
}
