//! Registration and user lookup endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, JsonRejection, MessageResponse, UserResponse};

/// Register a new user
///
/// POST /register, POST /api/register
///
/// An unreadable body is handed to the service as an absent payload so the
/// validation order stays in one place.
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let payload = match body {
        Ok(json) => Some(json.into_inner()),
        Err(rejection) => {
            debug!(reason = %rejection, "Registration body rejected");
            None
        }
    };

    let registration = state.user_service.register(payload.as_ref()).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: registration.message,
        }),
    ))
}

/// Get a registered user's public profile
///
/// GET /api/users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get(&username).await?;

    Ok(Json(UserResponse::from(&user)))
}
