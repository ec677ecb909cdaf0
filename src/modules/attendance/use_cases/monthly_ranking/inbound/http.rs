use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(month): Path<String>) -> Response {
    match state.monthly_ranking_handler.handle(&month).await {
        Ok(ranking) => (StatusCode::OK, Json(ranking)).into_response(),
        Err(e) => e.into_response(),
    }
}
