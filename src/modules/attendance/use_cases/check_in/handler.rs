use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::adapters::outbound::directories::EventDirectory;
use crate::modules::attendance::core::check_window::CheckWindowPolicy;
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::use_cases::check_in::command::CheckIn;
use crate::modules::attendance::use_cases::check_in::decide::decide_check_in;
use crate::modules::attendance::use_cases::check_in::decision::{DecideError, Decision};
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::shared::core::clock::Clock;
use std::sync::Arc;

pub struct CheckInHandler<TStore, TEvents>
where
    TStore: AttendanceStore + 'static,
    TEvents: EventDirectory + 'static,
{
    store: Arc<TStore>,
    events: Arc<TEvents>,
    clock: Arc<dyn Clock>,
    policy: CheckWindowPolicy,
}

impl<TStore, TEvents> CheckInHandler<TStore, TEvents>
where
    TStore: AttendanceStore + 'static,
    TEvents: EventDirectory + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        events: Arc<TEvents>,
        clock: Arc<dyn Clock>,
        policy: CheckWindowPolicy,
    ) -> Self {
        Self {
            store,
            events,
            clock,
            policy,
        }
    }

    #[tracing::instrument(
        skip(self, command),
        fields(event_id = %command.event_id, user_id = %command.user_id, actor = %command.acting_user_id)
    )]
    pub async fn handle(&self, command: CheckIn) -> Result<AttendanceRecord, ApplicationError> {
        let event = self
            .events
            .find_event(&command.event_id)
            .await
            .map_err(ApplicationError::directory)?;

        let now = self.clock.now();
        match decide_check_in(event.as_ref(), &command, now, &self.policy) {
            Decision::Accepted {
                snapshot,
                user_id,
                status,
            } => {
                let record = self
                    .store
                    .record_status(&snapshot, &user_id, status, self.clock.timestamp_millis())
                    .await?;
                tracing::info!(record_id = %record.record_id, status = %record.status, "attendance recorded");
                Ok(record)
            }
            Decision::Rejected { reason } => {
                tracing::warn!(%reason, "check-in rejected");
                Err(rejection(reason, &command))
            }
        }
    }
}

fn rejection(reason: DecideError, command: &CheckIn) -> ApplicationError {
    match reason {
        DecideError::EventNotFound => ApplicationError::NotFound(format!("event {}", command.event_id)),
        DecideError::NotHost => ApplicationError::Forbidden(format!(
            "{} is not the host of event {}",
            command.acting_user_id, command.event_id
        )),
        DecideError::OutsideWindow(position) => ApplicationError::OutOfWindow(position),
    }
}
