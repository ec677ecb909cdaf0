use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::core::status::AttendanceStatus;
use crate::modules::attendance::use_cases::check_in::command::CheckIn;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::shell;
use crate::tests::fixtures::directory::at;
use crate::tests::fixtures::state::{make_test_app, read_json};

fn check_in(actor: &str, user_id: &str, status: &str) -> Request<Body> {
    let body = format!(r#"{{"event_id":"ev-algo-0910","user_id":"{user_id}","status":"{status}"}}"#);
    Request::post("/attendance/check")
        .header("content-type", "application/json")
        .header("x-user-id", actor)
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn host_checks_in_three_members_and_the_study_scores_fifty_percent() {
    let test_app = make_test_app(at(2025, 9, 10, 14, 2));
    let app = shell::app(test_app.state.clone());

    for (user_id, status) in [("u-kim", "present"), ("u-lee", "late"), ("u-choi", "absent")] {
        let response = app
            .clone()
            .oneshot(check_in("u-host", user_id, status))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(
            Request::get("/attendance/study/st-algorithms")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["counts"]["present"], 1);
    assert_eq!(json["counts"]["late"], 1);
    assert_eq!(json["counts"]["absent"], 1);
    assert_eq!(json["percent"], 50.0);
    assert_eq!(json["members"][0]["display_name"], "Kim");
    assert_eq!(json["members"][2]["rank"], 3);
}

#[tokio::test]
async fn non_host_check_in_is_forbidden_and_writes_nothing() {
    let test_app = make_test_app(at(2025, 9, 10, 14, 2));

    let response = shell::app(test_app.state.clone())
        .oneshot(check_in("u-lee", "u-kim", "present"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(test_app.store.find_by_event("ev-algo-0910").await.unwrap().is_empty());
}

#[tokio::test]
async fn check_in_twenty_minutes_early_is_out_of_window() {
    let test_app = make_test_app(at(2025, 9, 10, 13, 40));

    let response = shell::app(test_app.state.clone())
        .oneshot(check_in("u-host", "u-kim", "present"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(read_json(response).await["reason"], "too_early");
    assert_eq!(test_app.store.len().await, 0);
}

#[tokio::test]
async fn repeated_check_in_keeps_a_single_record_with_the_latest_status() {
    let test_app = make_test_app(at(2025, 9, 10, 14, 2));
    let app = shell::app(test_app.state.clone());

    for status in ["present", "late"] {
        let response = app
            .clone()
            .oneshot(check_in("u-host", "u-kim", status))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let records = test_app.store.find_by_user("u-kim").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, AttendanceStatus::Late);
}

#[tokio::test]
async fn concurrent_check_ins_for_the_same_pair_store_one_record() {
    let test_app = make_test_app(at(2025, 9, 10, 14, 2));
    let command = CheckIn {
        event_id: "ev-algo-0910".into(),
        user_id: "u-lee".into(),
        status: AttendanceStatus::Present,
        acting_user_id: "u-host".into(),
    };

    let handler = test_app.state.check_in_handler.clone();
    let (first, second) = tokio::join!(
        handler.handle(command.clone()),
        handler.handle(CheckIn {
            status: AttendanceStatus::Absent,
            ..command
        })
    );

    assert_eq!(first.unwrap().record_id, second.unwrap().record_id);
    assert_eq!(test_app.store.len().await, 1);
}

#[tokio::test]
async fn history_survives_event_deletion() {
    let test_app = make_test_app(at(2025, 9, 10, 14, 2));
    test_app
        .state
        .check_in_handler
        .handle(CheckIn {
            event_id: "ev-algo-0910".into(),
            user_id: "u-choi".into(),
            status: AttendanceStatus::Present,
            acting_user_id: "u-host".into(),
        })
        .await
        .unwrap();
    test_app.directory.remove_event("ev-algo-0910").await;

    let summary = test_app
        .state
        .user_summary_handler
        .handle("u-choi")
        .await
        .unwrap();
    let roster = test_app.state.event_roster_handler.handle("ev-algo-0910").await;

    assert_eq!(summary.records[0].event_title, "Graph problems");
    assert_eq!(summary.percent, 100.0);
    assert!(matches!(roster, Err(ApplicationError::NotFound(_))));
}
