use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::core::scoring::StatusCounts;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAttendanceSummary {
    pub user_id: String,
    pub display_name: String,
    pub total: u32,
    pub counts: StatusCounts,
    /// One decimal place.
    pub percent: f64,
    /// Newest first.
    pub records: Vec<AttendanceRecord>,
}
