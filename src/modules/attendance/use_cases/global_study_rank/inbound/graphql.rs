use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::adapters::inbound::graphql::{GqlStatusCounts, gql_error};
use crate::modules::attendance::use_cases::global_study_rank::view::GlobalStudyRank;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlGlobalStudyRank {
    pub study_id: String,
    pub title: String,
    pub month: String,
    pub rank: u32,
    pub cohort_size: u32,
    pub counts: GqlStatusCounts,
    pub percent: f64,
    pub percent_label: String,
}

impl From<GlobalStudyRank> for GqlGlobalStudyRank {
    fn from(rank: GlobalStudyRank) -> Self {
        Self {
            study_id: rank.study_id,
            title: rank.title,
            month: rank.month,
            rank: rank.rank as u32,
            cohort_size: rank.cohort_size as u32,
            counts: rank.counts.into(),
            percent: rank.percent,
            percent_label: rank.percent_label,
        }
    }
}

#[derive(Default)]
pub struct GlobalStudyRankQuery;

#[Object]
impl GlobalStudyRankQuery {
    async fn global_study_rank(
        &self,
        context: &Context<'_>,
        study_id: String,
        month: Option<String>,
    ) -> GqlResult<GqlGlobalStudyRank> {
        let state = context.data_unchecked::<AppState>();
        let rank = state
            .global_study_rank_handler
            .handle(&study_id, month.as_deref())
            .await
            .map_err(gql_error)?;
        Ok(rank.into())
    }
}
