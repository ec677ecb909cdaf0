use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::attendance::adapters::inbound::graphql::{GqlAttendanceRecord, gql_error};
use crate::modules::attendance::use_cases::check_in::command::CheckInRequest;
use crate::shell::identity::Actor;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Records one participant's status. Only the event host may call this, and only
    /// inside the event's check-in window.
    async fn check_in(
        &self,
        context: &Context<'_>,
        event_id: String,
        user_id: String,
        status: String,
        checker_id: Option<String>,
    ) -> GqlResult<GqlAttendanceRecord> {
        let state = context.data_unchecked::<AppState>();

        let actor = context.data_opt::<Actor>().map(|actor| actor.0.clone());

        let request = CheckInRequest {
            event_id: Some(event_id),
            user_id: Some(user_id),
            status: Some(status),
            checker_id,
        };
        let command = request.into_command(actor).map_err(gql_error)?;

        let record = state
            .check_in_handler
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(record.into())
    }
}
