use crate::modules::attendance::core::ranking::RankedEntry;
use crate::modules::attendance::core::scoring::StatusCounts;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyRankingRow {
    pub rank: usize,
    pub study_id: String,
    pub title: String,
    pub counts: StatusCounts,
    pub percent: f64,
}

impl From<RankedEntry> for StudyRankingRow {
    fn from(ranked: RankedEntry) -> Self {
        Self {
            rank: ranked.rank,
            study_id: ranked.entry.id,
            title: ranked.entry.label,
            counts: ranked.entry.counts,
            percent: ranked.entry.percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRanking {
    /// "YYYY-MM".
    pub month: String,
    pub studies: Vec<StudyRankingRow>,
}
