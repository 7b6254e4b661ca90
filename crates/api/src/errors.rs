use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ferrous_lookup_domain::DomainError;
use tracing::error;

use crate::dto::HttpError;

/// Maps domain failures to a status code and a `{ "message": .. }` body.
/// Internal details stay in the logs.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            DomainError::InvalidIpAddress(_) => {
                (StatusCode::BAD_REQUEST, "Invalid IP address".to_string())
            }

            DomainError::ResolutionFailed { domain, .. } => (
                StatusCode::NOT_FOUND,
                format!("Unable to find IP addresses for domain: {}", domain),
            ),

            DomainError::StoreUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error retrieving query history".to_string(),
            ),

            DomainError::SerializationFailure(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (status, Json(HttpError { message })).into_response()
    }
}
