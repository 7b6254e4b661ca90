use crate::{dto::RootResponse, state::AppState};
use axum::{extract::State, Json};

pub async fn get_root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(state.get_service_info.execute().into())
}
