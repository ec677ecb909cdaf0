use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::adapters::outbound::directories::StudyDirectory;
use crate::modules::attendance::core::ranking::rank_studies;
use crate::modules::attendance::core::scoring::{Precision, ScoringWeights};
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::monthly_ranking::view::MonthlyRanking;
use crate::shared::core::year_month::YearMonth;
use std::sync::Arc;

pub struct MonthlyRankingHandler {
    store: Arc<dyn AttendanceStore>,
    studies: Arc<dyn StudyDirectory>,
    weights: ScoringWeights,
}

impl MonthlyRankingHandler {
    pub fn new(
        store: Arc<dyn AttendanceStore>,
        studies: Arc<dyn StudyDirectory>,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            store,
            studies,
            weights,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, month: &str) -> Result<MonthlyRanking, ApplicationError> {
        let month: YearMonth = month.parse()?;
        let studies = self
            .studies
            .list_studies()
            .await
            .map_err(ApplicationError::directory)?;
        let records = self
            .store
            .find_by_date_range(month.first_day(), month.next_first_day())
            .await?;

        let ranked = rank_studies(&studies, &records, &self.weights, Precision::OneDecimal);
        Ok(MonthlyRanking {
            month: month.to_string(),
            studies: ranked.into_iter().map(Into::into).collect(),
        })
    }
}
