//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::state::AppState;
use crate::api::types::{ApiError, Json};

/// Health response body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<usize>,
}

impl HealthResponse {
    fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            users: None,
        }
    }
}

/// Liveness check - returns 200 whenever the process is serving requests
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::ok()))
}

/// Readiness check - verifies the user store answers
pub async fn ready_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let users = state.user_service.count().await.map_err(|e| {
        warn!(error = %e, "User store failed readiness check");
        ApiError::unavailable("User store unavailable")
    })?;

    Ok(Json(HealthResponse {
        users: Some(users),
        ..HealthResponse::ok()
    }))
}

/// Plain-text greeting served at the root
pub async fn index() -> &'static str {
    "Hello, the registration service is running!"
}
