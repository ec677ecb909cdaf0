use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(event_id): Path<String>) -> Response {
    match state.event_roster_handler.handle(&event_id).await {
        Ok(roster) => (StatusCode::OK, Json(roster)).into_response(),
        Err(e) => e.into_response(),
    }
}
