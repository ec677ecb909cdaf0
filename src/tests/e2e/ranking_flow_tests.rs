use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use crate::modules::attendance::core::status::AttendanceStatus;
use crate::shell;
use crate::tests::fixtures::directory::at;
use crate::tests::fixtures::state::{make_test_app, read_json, seed_record};

async fn get_json(app: &axum::Router, uri: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    read_json(response).await
}

#[tokio::test]
async fn study_without_records_ranks_last_in_the_month() {
    let test_app = make_test_app(at(2025, 9, 30, 12, 0));
    seed_record(&test_app, "ev-algo-0910", "u-kim", AttendanceStatus::Present).await;
    seed_record(&test_app, "ev-algo-0910", "u-lee", AttendanceStatus::Late).await;
    seed_record(&test_app, "ev-eng-0912", "u-kim", AttendanceStatus::Late).await;
    let app = shell::app(test_app.state.clone());

    let ranking = get_json(&app, "/attendance/ranking/2025-09").await;
    let design = get_json(&app, "/attendance/study/st-design/global-rank?month=2025-09").await;

    assert_eq!(ranking["studies"][0]["study_id"], "st-algorithms");
    assert_eq!(ranking["studies"][0]["percent"], 75.0);
    assert_eq!(ranking["studies"][1]["study_id"], "st-english");
    assert_eq!(ranking["studies"][2]["study_id"], "st-design");
    assert_eq!(ranking["studies"][2]["rank"], 3);
    assert_eq!(design["rank"], 3);
    assert_eq!(design["cohort_size"], 3);
    assert_eq!(design["percent_label"], "0.00");
}

#[tokio::test]
async fn tied_studies_share_a_rank_and_the_next_one_skips() {
    let test_app = make_test_app(at(2025, 9, 30, 12, 0));
    seed_record(&test_app, "ev-algo-0910", "u-kim", AttendanceStatus::Late).await;
    seed_record(&test_app, "ev-eng-0912", "u-kim", AttendanceStatus::Late).await;
    let app = shell::app(test_app.state.clone());

    let ranking = get_json(&app, "/attendance/ranking/2025-09").await;

    let ranks: Vec<u64> = ranking["studies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["rank"].as_u64().unwrap())
        .collect();
    assert_eq!(ranks, vec![1, 1, 3]);
}

#[tokio::test]
async fn records_are_bucketed_by_event_month() {
    let test_app = make_test_app(at(2025, 10, 2, 9, 0));
    seed_record(&test_app, "ev-algo-0920", "u-kim", AttendanceStatus::Absent).await;
    seed_record(&test_app, "ev-algo-1001", "u-kim", AttendanceStatus::Present).await;
    let app = shell::app(test_app.state.clone());

    let september = get_json(&app, "/attendance/study/st-algorithms/global-rank?month=2025-09").await;
    let current = get_json(&app, "/attendance/study/st-algorithms/global-rank").await;

    assert_eq!(september["percent"], 0.0);
    assert_eq!(current["month"], "2025-10");
    assert_eq!(current["percent"], 100.0);
    assert_eq!(current["counts"]["present"], 1);
}

#[tokio::test]
async fn user_summary_lists_history_newest_first() {
    let test_app = make_test_app(at(2025, 10, 2, 9, 0));
    seed_record(&test_app, "ev-algo-0910", "u-kim", AttendanceStatus::Present).await;
    seed_record(&test_app, "ev-algo-1001", "u-kim", AttendanceStatus::Late).await;
    seed_record(&test_app, "ev-algo-0920", "u-kim", AttendanceStatus::Present).await;
    let app = shell::app(test_app.state.clone());

    let summary = get_json(&app, "/attendance/user/u-kim").await;

    assert_eq!(summary["total"], 3);
    assert_eq!(summary["percent"], 83.3);
    assert_eq!(summary["records"][0]["event_id"], "ev-algo-1001");
    assert_eq!(summary["records"][2]["event_id"], "ev-algo-0910");
}
