use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::get_root))
        .route("/health", get(handlers::health_check))
        .route("/v1/history", get(handlers::get_history))
        .route("/v1/tools/lookup", get(handlers::lookup_domain))
        .route("/v1/tools/validate", post(handlers::validate_ip))
        .with_state(state)
}
