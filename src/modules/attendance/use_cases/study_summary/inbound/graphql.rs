use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::adapters::inbound::graphql::{
    GqlAttendanceRecord, GqlStatusCounts, gql_error,
};
use crate::modules::attendance::use_cases::study_summary::view::{
    MemberAttendance, StudyAttendanceSummary,
};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlMemberAttendance {
    pub rank: u32,
    pub user_id: String,
    pub display_name: String,
    pub counts: GqlStatusCounts,
    pub percent: f64,
}

impl From<MemberAttendance> for GqlMemberAttendance {
    fn from(member: MemberAttendance) -> Self {
        Self {
            rank: member.rank as u32,
            user_id: member.user_id,
            display_name: member.display_name,
            counts: member.counts.into(),
            percent: member.percent,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlStudyAttendance {
    pub study_id: String,
    pub title: String,
    pub total: u32,
    pub counts: GqlStatusCounts,
    pub percent: f64,
    pub members: Vec<GqlMemberAttendance>,
    pub records: Vec<GqlAttendanceRecord>,
}

impl From<StudyAttendanceSummary> for GqlStudyAttendance {
    fn from(summary: StudyAttendanceSummary) -> Self {
        Self {
            study_id: summary.study_id,
            title: summary.title,
            total: summary.total,
            counts: summary.counts.into(),
            percent: summary.percent,
            members: summary.members.into_iter().map(Into::into).collect(),
            records: summary.records.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct StudySummaryQuery;

#[Object]
impl StudySummaryQuery {
    async fn study_attendance(
        &self,
        context: &Context<'_>,
        study_id: String,
    ) -> GqlResult<GqlStudyAttendance> {
        let state = context.data_unchecked::<AppState>();
        let summary = state
            .study_summary_handler
            .handle(&study_id)
            .await
            .map_err(gql_error)?;
        Ok(summary.into())
    }
}
