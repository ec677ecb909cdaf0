use async_graphql::Request;
use serde_json::json;

use crate::modules::attendance::core::status::AttendanceStatus;
use crate::shell::graphql::build_schema;
use crate::shell::identity::Actor;
use crate::tests::fixtures::directory::at;
use crate::tests::fixtures::state::{make_test_app, seed_record};

const CHECK_IN: &str = r#"
    mutation {
        checkIn(eventId: "ev-algo-0910", userId: "u-kim", status: "present") {
            userId
            status
            eventTitle
        }
    }
"#;

#[tokio::test]
async fn check_in_mutation_uses_the_actor_from_request_data() {
    let test_app = make_test_app(at(2025, 9, 10, 14, 2));
    let schema = build_schema(test_app.state.clone());

    let response = schema
        .execute(Request::new(CHECK_IN).data(Actor("u-host".into())))
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(
        data,
        json!({ "checkIn": { "userId": "u-kim", "status": "present", "eventTitle": "Graph problems" } })
    );
    assert_eq!(test_app.store.len().await, 1);
}

#[tokio::test]
async fn check_in_mutation_reports_the_error_code() {
    let test_app = make_test_app(at(2025, 9, 10, 13, 40));
    let schema = build_schema(test_app.state.clone());

    let response = schema
        .execute(Request::new(CHECK_IN).data(Actor("u-host".into())))
        .await;

    assert_eq!(response.errors.len(), 1);
    let error = serde_json::to_value(&response.errors[0]).unwrap();
    assert_eq!(error["extensions"]["code"], "out_of_window");
    assert_eq!(error["extensions"]["reason"], "too_early");
    assert_eq!(test_app.store.len().await, 0);
}

#[tokio::test]
async fn check_in_mutation_requires_an_actor() {
    let test_app = make_test_app(at(2025, 9, 10, 14, 2));
    let schema = build_schema(test_app.state.clone());

    let response = schema.execute(CHECK_IN).await;

    assert_eq!(response.errors.len(), 1);
    let error = serde_json::to_value(&response.errors[0]).unwrap();
    assert_eq!(error["extensions"]["code"], "unauthorized");
    assert_eq!(test_app.store.len().await, 0);
}

#[tokio::test]
async fn check_in_mutation_treats_a_blank_checker_id_as_no_actor() {
    let test_app = make_test_app(at(2025, 9, 10, 14, 2));
    let schema = build_schema(test_app.state.clone());

    let response = schema
        .execute(
            r#"
            mutation {
                checkIn(eventId: "ev-algo-0910", userId: "u-kim", status: "present", checkerId: "") {
                    userId
                }
            }
            "#,
        )
        .await;

    assert_eq!(response.errors.len(), 1);
    let error = serde_json::to_value(&response.errors[0]).unwrap();
    assert_eq!(error["extensions"]["code"], "unauthorized");
    assert_eq!(test_app.store.len().await, 0);
}

#[tokio::test]
async fn queries_expose_summaries_and_rankings() {
    let test_app = make_test_app(at(2025, 9, 30, 12, 0));
    seed_record(&test_app, "ev-algo-0910", "u-kim", AttendanceStatus::Present).await;
    seed_record(&test_app, "ev-algo-0910", "u-lee", AttendanceStatus::Late).await;
    let schema = build_schema(test_app.state.clone());

    let response = schema
        .execute(
            r#"
            {
                studyAttendance(studyId: "st-algorithms") {
                    percent
                    members { rank displayName }
                }
                monthlyRanking(month: "2025-09") {
                    studies { rank studyId }
                }
                globalStudyRank(studyId: "st-english", month: "2025-09") {
                    rank
                    cohortSize
                    percentLabel
                }
                eventRoster(eventId: "ev-algo-0910") {
                    canCheck
                    participants { userId status }
                }
            }
            "#,
        )
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["studyAttendance"]["percent"], 75.0);
    assert_eq!(data["studyAttendance"]["members"][0]["displayName"], "Kim");
    assert_eq!(data["studyAttendance"]["members"][2]["rank"], 3);
    assert_eq!(data["monthlyRanking"]["studies"][0]["studyId"], "st-algorithms");
    assert_eq!(data["globalStudyRank"]["rank"], 2);
    assert_eq!(data["globalStudyRank"]["cohortSize"], 3);
    assert_eq!(data["globalStudyRank"]["percentLabel"], "0.00");
    assert_eq!(data["eventRoster"]["canCheck"], false);
    assert_eq!(data["eventRoster"]["participants"][2]["status"], json!(null));
}
