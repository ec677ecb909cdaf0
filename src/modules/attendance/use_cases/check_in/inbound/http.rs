use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::modules::attendance::use_cases::check_in::command::CheckInRequest;
use crate::shell::identity::Actor;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CheckInRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let actor = Actor::from_headers(&headers).map(|actor| actor.0);
    let command = match body.into_command(actor) {
        Ok(command) => command,
        Err(e) => return e.into_response(),
    };

    match state.check_in_handler.handle(command).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => e.into_response(),
    }
}
