// Attendance record store port.
//
// Contract
// - `record_status` is an upsert keyed by (event_id, user_id). It must be atomic with
//   respect to that key: concurrent calls for one pair leave exactly one record.
// - An existing record only has its status overwritten; a new record copies the event
//   snapshot.
// - Finders never mutate and return records newest first.
// - `find_by_date_range` matches on the record's event date, half-open [start, end).

use crate::modules::attendance::core::record::{AttendanceRecord, EventSnapshot};
use crate::modules::attendance::core::status::AttendanceStatus;
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttendanceStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AttendanceStore: Send + Sync {
    async fn record_status(
        &self,
        snapshot: &EventSnapshot,
        user_id: &str,
        status: AttendanceStatus,
        recorded_at: i64,
    ) -> Result<AttendanceRecord, AttendanceStoreError>;

    async fn find_by_user(&self, user_id: &str)
    -> Result<Vec<AttendanceRecord>, AttendanceStoreError>;

    async fn find_by_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<AttendanceRecord>, AttendanceStoreError>;

    async fn find_by_study(
        &self,
        study_id: &str,
    ) -> Result<Vec<AttendanceRecord>, AttendanceStoreError>;

    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, AttendanceStoreError>;
}
