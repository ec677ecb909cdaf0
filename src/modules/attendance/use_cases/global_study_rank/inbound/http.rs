use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GlobalRankParams {
    pub month: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(study_id): Path<String>,
    Query(params): Query<GlobalRankParams>,
) -> Response {
    match state
        .global_study_rank_handler
        .handle(&study_id, params.month.as_deref())
        .await
    {
        Ok(rank) => (StatusCode::OK, Json(rank)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod global_study_rank_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    use crate::modules::attendance::core::status::AttendanceStatus;
    use crate::tests::fixtures::directory::at;
    use crate::tests::fixtures::state::{TestApp, make_test_app, read_json, seed_record};

    use super::handle;

    fn app(test_app: &TestApp) -> Router {
        Router::new()
            .route("/attendance/study/{study_id}/global-rank", get(handle))
            .with_state(test_app.state.clone())
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_rank() {
        let test_app = make_test_app(at(2025, 9, 30, 12, 0));
        seed_record(&test_app, "ev-algo-0910", "u-kim", AttendanceStatus::Present).await;
        seed_record(&test_app, "ev-algo-0910", "u-lee", AttendanceStatus::Late).await;
        seed_record(&test_app, "ev-algo-0920", "u-kim", AttendanceStatus::Late).await;

        let response = app(&test_app)
            .oneshot(
                Request::get("/attendance/study/st-algorithms/global-rank?month=2025-09")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["rank"], 1);
        assert_eq!(json["cohort_size"], 3);
        assert_eq!(json["percent"], 66.67);
        assert_eq!(json["percent_label"], "66.67");
    }

    #[tokio::test]
    async fn it_should_use_the_current_month_without_a_query() {
        let test_app = make_test_app(at(2025, 9, 30, 12, 0));

        let response = app(&test_app)
            .oneshot(
                Request::get("/attendance/study/st-english/global-rank")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["month"], "2025-09");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_study() {
        let test_app = make_test_app(at(2025, 9, 30, 12, 0));

        let response = app(&test_app)
            .oneshot(
                Request::get("/attendance/study/st-gone/global-rank")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
