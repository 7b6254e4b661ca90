use crate::{
    dto::{HistoryParams, QueryPairs, QueryResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, instrument};

#[instrument(skip_all, name = "api_get_history")]
pub async fn get_history(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<Vec<QueryResponse>>, ApiError> {
    let params = HistoryParams::from_pairs(&pairs);

    let queries = match params.limit {
        Some(limit) => state.get_history.execute_with_limit(limit).await?,
        None => state.get_history.execute().await?,
    };

    debug!(count = queries.len(), limit = ?params.limit, "Query history retrieved");

    Ok(Json(queries.into_iter().map(QueryResponse::from).collect()))
}
