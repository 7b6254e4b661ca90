use crate::{
    client_ip::ClientIp,
    dto::{LookupParams, QueryPairs, QueryResponse, ValidateIpRequest, ValidateIpResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use ferrous_lookup_domain::DomainError;
use tracing::{debug, instrument};

#[instrument(skip_all, name = "api_lookup_domain")]
pub async fn lookup_domain(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<QueryResponse>, ApiError> {
    let params = LookupParams::from_pairs(&pairs);

    let query = state
        .lookup_domain
        .execute(&params.domain, &client_ip)
        .await?;

    Ok(Json(query.into()))
}

#[instrument(skip_all, name = "api_validate_ip")]
pub async fn validate_ip(
    State(state): State<AppState>,
    payload: Result<Json<ValidateIpRequest>, JsonRejection>,
) -> Result<Json<ValidateIpResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        DomainError::InvalidArgument(format!("Invalid request: {}", rejection.body_text()))
    })?;

    if !state.validate_ip.execute(&request.ip) {
        debug!(ip = %request.ip, "Rejected IP address");
        return Err(DomainError::InvalidIpAddress(request.ip).into());
    }

    Ok(Json(ValidateIpResponse { status: true }))
}
