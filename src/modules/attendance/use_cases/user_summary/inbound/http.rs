use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    match state.user_summary_handler.handle(&user_id).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => e.into_response(),
    }
}
