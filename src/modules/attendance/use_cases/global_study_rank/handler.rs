use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::adapters::outbound::directories::StudyDirectory;
use crate::modules::attendance::core::ranking::{find_rank_of, rank_studies};
use crate::modules::attendance::core::scoring::{Precision, ScoringWeights};
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::global_study_rank::view::GlobalStudyRank;
use crate::shared::core::clock::Clock;
use crate::shared::core::year_month::YearMonth;
use std::sync::Arc;

pub struct GlobalStudyRankHandler {
    store: Arc<dyn AttendanceStore>,
    studies: Arc<dyn StudyDirectory>,
    clock: Arc<dyn Clock>,
    weights: ScoringWeights,
}

impl GlobalStudyRankHandler {
    pub fn new(
        store: Arc<dyn AttendanceStore>,
        studies: Arc<dyn StudyDirectory>,
        clock: Arc<dyn Clock>,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            store,
            studies,
            clock,
            weights,
        }
    }

    /// Ranks `study_id` among all studies for `month`, or the current month when absent.
    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        study_id: &str,
        month: Option<&str>,
    ) -> Result<GlobalStudyRank, ApplicationError> {
        let month = match month {
            Some(raw) => raw.parse::<YearMonth>()?,
            None => YearMonth::containing(self.clock.now()),
        };
        let studies = self
            .studies
            .list_studies()
            .await
            .map_err(ApplicationError::directory)?;
        let records = self
            .store
            .find_by_date_range(month.first_day(), month.next_first_day())
            .await?;

        let ranked = rank_studies(&studies, &records, &self.weights, Precision::TwoDecimals);
        let position = find_rank_of(&ranked, study_id)
            .ok_or_else(|| ApplicationError::NotFound(format!("study {study_id}")))?;

        Ok(GlobalStudyRank {
            study_id: position.entry.id,
            title: position.entry.label,
            month: month.to_string(),
            rank: position.rank,
            cohort_size: position.cohort_size,
            counts: position.entry.counts,
            percent: position.entry.percent,
            percent_label: format!("{:.2}", position.entry.percent),
        })
    }
}
