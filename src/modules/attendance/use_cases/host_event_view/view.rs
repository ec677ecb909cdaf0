use crate::modules::attendance::core::check_window::{CheckWindow, WindowPosition};
use crate::modules::attendance::core::scoring::StatusCounts;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostedEvent {
    pub event_id: String,
    pub study_id: String,
    pub study_title: Option<String>,
    pub title: String,
    pub location: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingEvent {
    #[serde(flatten)]
    pub event: HostedEvent,
    pub can_check: bool,
    pub window: WindowPosition,
    pub check_window: CheckWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PastEvent {
    #[serde(flatten)]
    pub event: HostedEvent,
    pub counts: StatusCounts,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostEventView {
    pub host_id: String,
    /// Soonest first.
    pub upcoming: Vec<UpcomingEvent>,
    /// Most recent first.
    pub past: Vec<PastEvent>,
}
