// Ranking engine: snapshot -> aggregate -> rank.
//
// Aggregation
// - `CohortTally` keeps members in first-seen order. Members can be seeded with zero
//   counts so that they are ranked even without records.
//
// Ranking
// - Percent descending, stable for exact ties.
// - Standard competition ranking: ties share a rank, the next distinct value takes
//   its 1-based position ([80, 80, 60] ranks as [1, 1, 3]).

use crate::modules::attendance::core::directory::Study;
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::core::scoring::{Precision, ScoringWeights, StatusCounts};
use crate::modules::attendance::core::status::AttendanceStatus;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub id: String,
    pub label: String,
    pub counts: StatusCounts,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: RankingEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankPosition {
    pub rank: usize,
    pub cohort_size: usize,
    pub entry: RankingEntry,
}

#[derive(Debug, Default, Clone)]
pub struct CohortTally {
    order: Vec<String>,
    members: HashMap<String, (String, StatusCounts)>,
}

impl CohortTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member with zero counts. An existing member keeps its label and counts.
    pub fn seed(&mut self, id: &str, label: &str) {
        if !self.members.contains_key(id) {
            self.order.push(id.to_string());
            self.members
                .insert(id.to_string(), (label.to_string(), StatusCounts::default()));
        }
    }

    /// Counts a status, adding the member first if needed.
    pub fn add(&mut self, id: &str, label: &str, status: AttendanceStatus) {
        self.seed(id, label);
        if let Some((_, counts)) = self.members.get_mut(id) {
            counts.record(status);
        }
    }

    /// Counts a status only for members already in the cohort.
    pub fn add_if_seeded(&mut self, id: &str, status: AttendanceStatus) -> bool {
        match self.members.get_mut(id) {
            Some((_, counts)) => {
                counts.record(status);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_entries(mut self, weights: &ScoringWeights, precision: Precision) -> Vec<RankingEntry> {
        self.order
            .into_iter()
            .filter_map(|id| {
                let (label, counts) = self.members.remove(&id)?;
                let percent = weights.weighted_percent(&counts, precision);
                Some(RankingEntry {
                    id,
                    label,
                    counts,
                    percent,
                })
            })
            .collect()
    }
}

pub fn rank(mut entries: Vec<RankingEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| b.percent.total_cmp(&a.percent));

    let mut previous: Option<(f64, usize)> = None;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let rank = match previous {
                Some((percent, rank)) if entry.percent == percent => rank,
                _ => index + 1,
            };
            previous = Some((entry.percent, rank));
            RankedEntry { rank, entry }
        })
        .collect()
}

pub fn find_rank_of(ranked: &[RankedEntry], id: &str) -> Option<RankPosition> {
    ranked
        .iter()
        .find(|ranked_entry| ranked_entry.entry.id == id)
        .map(|ranked_entry| RankPosition {
            rank: ranked_entry.rank,
            cohort_size: ranked.len(),
            entry: ranked_entry.entry.clone(),
        })
}

/// Ranks every existing study over the given records. Studies without records rank
/// at zero; records of deleted studies are dropped.
pub fn rank_studies(
    studies: &[Study],
    records: &[AttendanceRecord],
    weights: &ScoringWeights,
    precision: Precision,
) -> Vec<RankedEntry> {
    let mut tally = CohortTally::new();
    for study in studies {
        tally.seed(&study.study_id, &study.title);
    }
    for record in records {
        tally.add_if_seeded(&record.study_id, record.status);
    }
    rank(tally.into_entries(weights, precision))
}
