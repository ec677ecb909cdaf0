use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::adapters::inbound::graphql::gql_error;
use crate::modules::attendance::use_cases::event_roster::view::{EventRoster, RosterEntry};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlRosterEntry {
    pub user_id: String,
    pub display_name: String,
    pub status: Option<String>,
}

impl From<RosterEntry> for GqlRosterEntry {
    fn from(entry: RosterEntry) -> Self {
        Self {
            user_id: entry.user_id,
            display_name: entry.display_name,
            status: entry.status.map(|status| status.to_string()),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlEventRoster {
    pub event_id: String,
    pub study_id: String,
    pub title: String,
    pub location: String,
    pub host_id: String,
    pub capacity: u32,
    pub can_check: bool,
    pub window: String,
    pub participants: Vec<GqlRosterEntry>,
}

impl From<EventRoster> for GqlEventRoster {
    fn from(roster: EventRoster) -> Self {
        Self {
            event_id: roster.event.event_id,
            study_id: roster.event.study_id,
            title: roster.event.title,
            location: roster.event.location,
            host_id: roster.event.created_by,
            capacity: roster.event.capacity,
            can_check: roster.can_check,
            window: roster.window.as_str().to_string(),
            participants: roster.participants.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct EventRosterQuery;

#[Object]
impl EventRosterQuery {
    async fn event_roster(
        &self,
        context: &Context<'_>,
        event_id: String,
    ) -> GqlResult<GqlEventRoster> {
        let state = context.data_unchecked::<AppState>();
        let roster = state
            .event_roster_handler
            .handle(&event_id)
            .await
            .map_err(gql_error)?;
        Ok(roster.into())
    }
}
