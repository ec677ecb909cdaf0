use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::adapters::outbound::directories::UserDirectory;
use crate::modules::attendance::core::scoring::{Precision, ScoringWeights, summarize_records};
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::user_summary::view::UserAttendanceSummary;
use std::sync::Arc;

pub struct UserSummaryHandler {
    store: Arc<dyn AttendanceStore>,
    users: Arc<dyn UserDirectory>,
    weights: ScoringWeights,
}

impl UserSummaryHandler {
    pub fn new(
        store: Arc<dyn AttendanceStore>,
        users: Arc<dyn UserDirectory>,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            store,
            users,
            weights,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, user_id: &str) -> Result<UserAttendanceSummary, ApplicationError> {
        let records = self.store.find_by_user(user_id).await?;
        let display_name = self
            .users
            .display_name(user_id)
            .await
            .map_err(ApplicationError::directory)?;

        let counts = summarize_records(&records);
        Ok(UserAttendanceSummary {
            user_id: user_id.to_string(),
            display_name,
            total: counts.total(),
            percent: self.weights.weighted_percent(&counts, Precision::OneDecimal),
            counts,
            records,
        })
    }
}
