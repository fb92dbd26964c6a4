//! Liveness and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Body returned by the probe endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "ok" or "not_ready: <reason>".
    pub status: String,
    pub service: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cities_loaded: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_routes: Option<usize>,
}

impl HealthStatus {
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            cities_loaded: None,
            declared_routes: None,
        }
    }

    pub fn ready(service: &str, version: &str, cities: usize, declared_routes: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            cities_loaded: Some(cities),
            declared_routes: Some(declared_routes),
        }
    }

    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            cities_loaded: None,
            declared_routes: None,
        }
    }
}

/// `GET /health/live`: 200 whenever the process is serving.
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// `GET /health/ready`: 200 once a non-empty catalog is loaded.
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"tripplanner-service-shared","version":"0.1.0","cities_loaded":9,"declared_routes":6}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let catalog = state.catalog();

    if catalog.is_empty() {
        let status = HealthStatus::not_ready(service, version, "no cities loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(
        service,
        version,
        catalog.len(),
        catalog.declared_routes().len(),
    );
    (StatusCode::OK, Json(status)).into_response()
}
