// Entities owned by the surrounding platform and read through the directory ports.
//
// Boundaries
// - The attendance core never mutates these. Schedules, studies and users are
//   managed elsewhere; here they are plain snapshots of what a lookup returned.
// - Dates and times of day stay in the shape the schedule editor stores them in
//   (optional date, "HH:mm" text) so the window evaluator can fail closed on bad data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub event_id: String,
    pub study_id: String,
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: String,
    pub created_by: String,
    #[serde(default)]
    pub participants: Vec<String>,
    /// Zero means unlimited.
    #[serde(default)]
    pub capacity: u32,
}

impl ScheduledEvent {
    pub fn is_hosted_by(&self, user_id: &str) -> bool {
        self.created_by == user_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Study {
    pub study_id: String,
    pub title: String,
    pub host_id: String,
    #[serde(default)]
    pub member_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: String,
}

pub const UNKNOWN_LABEL: &str = "unknown";
