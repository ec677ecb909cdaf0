// One observation of one participant at one scheduled event.
//
// Invariants
// - At most one record per (event_id, user_id). Later check-ins overwrite `status` only.
// - `event_title` and `event_date` are copied from the event at write time and are
//   never re-read from the event, so history survives event deletion.
// - `created_at` is epoch milliseconds.

use crate::modules::attendance::core::directory::ScheduledEvent;
use crate::modules::attendance::core::status::AttendanceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub record_id: String,
    pub event_id: String,
    pub study_id: String,
    pub user_id: String,
    pub status: AttendanceStatus,
    pub event_title: String,
    pub event_date: Option<NaiveDate>,
    pub created_at: i64,
}

/// The event fields a record keeps once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSnapshot {
    pub event_id: String,
    pub study_id: String,
    pub title: String,
    pub date: Option<NaiveDate>,
}

impl From<&ScheduledEvent> for EventSnapshot {
    fn from(event: &ScheduledEvent) -> Self {
        Self {
            event_id: event.event_id.clone(),
            study_id: event.study_id.clone(),
            title: event.title.clone(),
            date: event.start_date,
        }
    }
}

/// Newest first: by event date, then by creation time.
pub fn sort_newest_first(records: &mut [AttendanceRecord]) {
    records.sort_by(|a, b| {
        b.event_date
            .cmp(&a.event_date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}
