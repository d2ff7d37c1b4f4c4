//! HTTP handlers for the preview server (status and embedded assets).
//!
//! The site itself is static; these routes only serve what `export` would
//! write to disk.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::assets;
use crate::config::SiteConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub variant: &'static str,
    pub projects: usize,
}

/// GET /status - Service status
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "portfolio-site",
        version: env!("PORTFOLIO_VERSION"),
        git_sha: env!("PORTFOLIO_GIT_SHA"),
        variant: state.config.variant.as_str(),
        projects: state.config.projects.len(),
    })
}

/// GET /assets/{*path} - Embedded static asset
pub async fn asset_handler(Path(path): Path<String>) -> Response {
    match assets::get(&path) {
        Some(asset) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, asset.mime),
                (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
            ],
            asset.data.into_owned(),
        )
            .into_response(),
        None => {
            tracing::debug!("Asset not found: {}", path);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Asset not found: {}", path),
                }),
            )
                .into_response()
        }
    }
}
