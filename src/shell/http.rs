use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::modules::attendance::use_cases::check_in::inbound::http as check_in_http;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::event_roster::inbound::http as event_roster_http;
use crate::modules::attendance::use_cases::global_study_rank::inbound::http as global_study_rank_http;
use crate::modules::attendance::use_cases::host_event_view::inbound::http as host_event_view_http;
use crate::modules::attendance::use_cases::monthly_ranking::inbound::http as monthly_ranking_http;
use crate::modules::attendance::use_cases::study_summary::inbound::http as study_summary_http;
use crate::modules::attendance::use_cases::user_summary::inbound::http as user_summary_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/attendance/check", post(check_in_http::handle))
        .route("/attendance/user/{user_id}", get(user_summary_http::handle))
        .route("/attendance/study/{study_id}", get(study_summary_http::handle))
        .route(
            "/attendance/study/{study_id}/global-rank",
            get(global_study_rank_http::handle),
        )
        .route("/attendance/ranking/{month}", get(monthly_ranking_http::handle))
        .route("/attendance/host/{user_id}/events", get(host_event_view_http::handle))
        .route("/attendance/event/{event_id}/roster", get(event_roster_http::handle))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) | Self::OutOfWindow(_) => StatusCode::FORBIDDEN,
            Self::InvalidStatus(_) | Self::MissingRequiredField(_) | Self::InvalidMonth(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Store(_) | Self::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal error".to_string()
        } else {
            self.to_string()
        };
        let mut body = json!({ "error": self.code(), "message": message });
        if let Self::OutOfWindow(position) = &self {
            body["reason"] = json!(position.as_str());
        }
        (status, Json(body)).into_response()
    }
}
