use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::adapters::inbound::graphql::{
    GqlAttendanceRecord, GqlStatusCounts, gql_error,
};
use crate::modules::attendance::use_cases::user_summary::view::UserAttendanceSummary;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlUserAttendance {
    pub user_id: String,
    pub display_name: String,
    pub total: u32,
    pub counts: GqlStatusCounts,
    pub percent: f64,
    pub records: Vec<GqlAttendanceRecord>,
}

impl From<UserAttendanceSummary> for GqlUserAttendance {
    fn from(summary: UserAttendanceSummary) -> Self {
        Self {
            user_id: summary.user_id,
            display_name: summary.display_name,
            total: summary.total,
            counts: summary.counts.into(),
            percent: summary.percent,
            records: summary.records.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct UserSummaryQuery;

#[Object]
impl UserSummaryQuery {
    async fn user_attendance(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<GqlUserAttendance> {
        let state = context.data_unchecked::<AppState>();
        let summary = state
            .user_summary_handler
            .handle(&user_id)
            .await
            .map_err(gql_error)?;
        Ok(summary.into())
    }
}
