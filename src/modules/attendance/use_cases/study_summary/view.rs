use crate::modules::attendance::core::ranking::RankedEntry;
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::core::scoring::StatusCounts;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberAttendance {
    pub rank: usize,
    pub user_id: String,
    pub display_name: String,
    pub counts: StatusCounts,
    pub percent: f64,
}

impl From<RankedEntry> for MemberAttendance {
    fn from(ranked: RankedEntry) -> Self {
        Self {
            rank: ranked.rank,
            user_id: ranked.entry.id,
            display_name: ranked.entry.label,
            counts: ranked.entry.counts,
            percent: ranked.entry.percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyAttendanceSummary {
    pub study_id: String,
    pub title: String,
    pub total: u32,
    pub counts: StatusCounts,
    pub percent: f64,
    /// Ranked by percent. Members without records are included at zero.
    pub members: Vec<MemberAttendance>,
    pub records: Vec<AttendanceRecord>,
}
