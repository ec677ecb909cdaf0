use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, http::HeaderMap, response::Html};

use crate::modules::attendance::use_cases::event_roster::inbound::graphql::EventRosterQuery;
use crate::modules::attendance::use_cases::global_study_rank::inbound::graphql::GlobalStudyRankQuery;
use crate::modules::attendance::use_cases::host_event_view::inbound::graphql::HostEventViewQuery;
use crate::modules::attendance::use_cases::monthly_ranking::inbound::graphql::MonthlyRankingQuery;
use crate::modules::attendance::use_cases::study_summary::inbound::graphql::StudySummaryQuery;
use crate::modules::attendance::use_cases::user_summary::inbound::graphql::UserSummaryQuery;
use crate::shell::identity::Actor;

pub use crate::modules::attendance::use_cases::check_in::inbound::graphql::MutationRoot;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    UserSummaryQuery,
    StudySummaryQuery,
    MonthlyRankingQuery,
    GlobalStudyRankQuery,
    HostEventViewQuery,
    EventRosterQuery,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Some(actor) = Actor::from_headers(&headers) {
        request = request.data(actor);
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
