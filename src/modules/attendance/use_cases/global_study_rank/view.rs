use crate::modules::attendance::core::scoring::StatusCounts;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalStudyRank {
    pub study_id: String,
    pub title: String,
    pub month: String,
    pub rank: usize,
    pub cohort_size: usize,
    pub counts: StatusCounts,
    /// Two decimal places.
    pub percent: f64,
    /// `percent` formatted with exactly two decimals, e.g. "66.70".
    pub percent_label: String,
}
