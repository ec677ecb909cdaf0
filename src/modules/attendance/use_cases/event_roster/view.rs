use crate::modules::attendance::core::check_window::{CheckWindow, WindowPosition};
use crate::modules::attendance::core::directory::ScheduledEvent;
use crate::modules::attendance::core::status::AttendanceStatus;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub user_id: String,
    pub display_name: String,
    /// `None` until the host records a status.
    pub status: Option<AttendanceStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRoster {
    pub event: ScheduledEvent,
    pub can_check: bool,
    pub window: WindowPosition,
    pub check_window: Option<CheckWindow>,
    pub participants: Vec<RosterEntry>,
}
