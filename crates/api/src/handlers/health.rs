use axum::http::StatusCode;
use tracing::debug;

pub async fn health_check() -> StatusCode {
    debug!("Health check requested");
    StatusCode::OK
}
