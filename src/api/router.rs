use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::health;
use super::state::AppState;
use super::users;
use crate::config::CorsConfig;

/// Create the full router with application state
///
/// `/` and `/register` are the bare surface; `/api` carries the same
/// registration handler plus health checks, with an open cross-origin policy when
/// enabled.
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/register", post(users::register))
        .nest("/api", create_api_router(cors))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn create_api_router(cors: &CorsConfig) -> Router<AppState> {
    let router = Router::new()
        .route("/register", post(users::register))
        .route("/users/{username}", get(users::get_user))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check));

    if cors.enabled {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any),
        )
    } else {
        router
    }
}
