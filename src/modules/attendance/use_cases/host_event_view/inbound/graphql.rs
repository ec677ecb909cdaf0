use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::adapters::inbound::graphql::{GqlStatusCounts, gql_error};
use crate::modules::attendance::use_cases::host_event_view::view::{
    HostEventView, HostedEvent, PastEvent, UpcomingEvent,
};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlHostedEvent {
    pub event_id: String,
    pub study_id: String,
    pub study_title: Option<String>,
    pub title: String,
    pub location: String,
    pub starts_at: String,
    pub ends_at: String,
}

impl From<HostedEvent> for GqlHostedEvent {
    fn from(event: HostedEvent) -> Self {
        Self {
            event_id: event.event_id,
            study_id: event.study_id,
            study_title: event.study_title,
            title: event.title,
            location: event.location,
            starts_at: event.starts_at.to_string(),
            ends_at: event.ends_at.to_string(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlUpcomingEvent {
    pub event: GqlHostedEvent,
    pub can_check: bool,
    pub window: String,
}

impl From<UpcomingEvent> for GqlUpcomingEvent {
    fn from(upcoming: UpcomingEvent) -> Self {
        Self {
            event: upcoming.event.into(),
            can_check: upcoming.can_check,
            window: upcoming.window.as_str().to_string(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlPastEvent {
    pub event: GqlHostedEvent,
    pub counts: GqlStatusCounts,
    pub percent: f64,
}

impl From<PastEvent> for GqlPastEvent {
    fn from(past: PastEvent) -> Self {
        Self {
            event: past.event.into(),
            counts: past.counts.into(),
            percent: past.percent,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlHostEventView {
    pub host_id: String,
    pub upcoming: Vec<GqlUpcomingEvent>,
    pub past: Vec<GqlPastEvent>,
}

impl From<HostEventView> for GqlHostEventView {
    fn from(view: HostEventView) -> Self {
        Self {
            host_id: view.host_id,
            upcoming: view.upcoming.into_iter().map(Into::into).collect(),
            past: view.past.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct HostEventViewQuery;

#[Object]
impl HostEventViewQuery {
    async fn host_events(
        &self,
        context: &Context<'_>,
        host_id: String,
    ) -> GqlResult<GqlHostEventView> {
        let state = context.data_unchecked::<AppState>();
        let view = state
            .host_event_view_handler
            .handle(&host_id)
            .await
            .map_err(gql_error)?;
        Ok(view.into())
    }
}
