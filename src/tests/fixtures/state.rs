// Wired application state over the seeded directory, with time frozen.

use axum::response::Response;
use chrono::NaiveDateTime;
use http_body_util::BodyExt;
use std::sync::Arc;

use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::adapters::outbound::attendance_store_in_memory::InMemoryAttendanceStore;
use crate::modules::attendance::adapters::outbound::directories::EventDirectory;
use crate::modules::attendance::adapters::outbound::directories_in_memory::InMemoryDirectory;
use crate::modules::attendance::core::check_window::CheckWindowPolicy;
use crate::modules::attendance::core::record::{AttendanceRecord, EventSnapshot};
use crate::modules::attendance::core::scoring::ScoringWeights;
use crate::modules::attendance::core::status::AttendanceStatus;
use crate::shared::core::clock::FixedClock;
use crate::shell::state::AppState;
use crate::tests::fixtures::directory::seeded_directory;

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<InMemoryAttendanceStore>,
    pub directory: Arc<InMemoryDirectory>,
}

pub fn make_test_app(now: NaiveDateTime) -> TestApp {
    make_test_app_with(InMemoryAttendanceStore::new(), seeded_directory(), now)
}

pub fn make_test_app_with(
    store: InMemoryAttendanceStore,
    directory: InMemoryDirectory,
    now: NaiveDateTime,
) -> TestApp {
    let store = Arc::new(store);
    let directory = Arc::new(directory);
    let state = AppState::in_memory(
        store.clone(),
        directory.clone(),
        Arc::new(FixedClock(now)),
        CheckWindowPolicy::default(),
        ScoringWeights::default(),
    );
    TestApp {
        state,
        store,
        directory,
    }
}

/// Writes a record straight into the store, bypassing the host and window rules.
pub async fn seed_record(
    test_app: &TestApp,
    event_id: &str,
    user_id: &str,
    status: AttendanceStatus,
) -> AttendanceRecord {
    let event = test_app
        .directory
        .find_event(event_id)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("no seeded event {event_id}"));
    let created_at = 1_000 + test_app.store.len().await as i64;
    test_app
        .store
        .record_status(&EventSnapshot::from(&event), user_id, status, created_at)
        .await
        .unwrap()
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
