use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::adapters::outbound::directories::{StudyDirectory, UserDirectory};
use crate::modules::attendance::core::ranking::{CohortTally, rank};
use crate::modules::attendance::core::scoring::{Precision, ScoringWeights, summarize_records};
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::study_summary::view::StudyAttendanceSummary;
use std::sync::Arc;

pub struct StudySummaryHandler {
    store: Arc<dyn AttendanceStore>,
    studies: Arc<dyn StudyDirectory>,
    users: Arc<dyn UserDirectory>,
    weights: ScoringWeights,
}

impl StudySummaryHandler {
    pub fn new(
        store: Arc<dyn AttendanceStore>,
        studies: Arc<dyn StudyDirectory>,
        users: Arc<dyn UserDirectory>,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            store,
            studies,
            users,
            weights,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, study_id: &str) -> Result<StudyAttendanceSummary, ApplicationError> {
        let study = self
            .studies
            .find_study(study_id)
            .await
            .map_err(ApplicationError::directory)?
            .ok_or_else(|| ApplicationError::NotFound(format!("study {study_id}")))?;
        let records = self.store.find_by_study(study_id).await?;

        let mut tally = CohortTally::new();
        for member_id in &study.member_ids {
            let name = self
                .users
                .display_name(member_id)
                .await
                .map_err(ApplicationError::directory)?;
            tally.seed(member_id, &name);
        }
        for record in &records {
            if !tally.contains(&record.user_id) {
                let name = self
                    .users
                    .display_name(&record.user_id)
                    .await
                    .map_err(ApplicationError::directory)?;
                tally.seed(&record.user_id, &name);
            }
            tally.add_if_seeded(&record.user_id, record.status);
        }

        let counts = summarize_records(&records);
        let members = rank(tally.into_entries(&self.weights, Precision::OneDecimal))
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(StudyAttendanceSummary {
            study_id: study.study_id,
            title: study.title,
            total: counts.total(),
            percent: self.weights.weighted_percent(&counts, Precision::OneDecimal),
            counts,
            members,
            records,
        })
    }
}
