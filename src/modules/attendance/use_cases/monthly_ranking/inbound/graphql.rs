use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::adapters::inbound::graphql::{GqlStatusCounts, gql_error};
use crate::modules::attendance::use_cases::monthly_ranking::view::{MonthlyRanking, StudyRankingRow};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlStudyRankingRow {
    pub rank: u32,
    pub study_id: String,
    pub title: String,
    pub counts: GqlStatusCounts,
    pub percent: f64,
}

impl From<StudyRankingRow> for GqlStudyRankingRow {
    fn from(row: StudyRankingRow) -> Self {
        Self {
            rank: row.rank as u32,
            study_id: row.study_id,
            title: row.title,
            counts: row.counts.into(),
            percent: row.percent,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlMonthlyRanking {
    pub month: String,
    pub studies: Vec<GqlStudyRankingRow>,
}

impl From<MonthlyRanking> for GqlMonthlyRanking {
    fn from(ranking: MonthlyRanking) -> Self {
        Self {
            month: ranking.month,
            studies: ranking.studies.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct MonthlyRankingQuery;

#[Object]
impl MonthlyRankingQuery {
    /// `month` is "YYYY-MM".
    async fn monthly_ranking(
        &self,
        context: &Context<'_>,
        month: String,
    ) -> GqlResult<GqlMonthlyRanking> {
        let state = context.data_unchecked::<AppState>();
        let ranking = state
            .monthly_ranking_handler
            .handle(&month)
            .await
            .map_err(gql_error)?;
        Ok(ranking.into())
    }
}
