// Pure decision for one check-in: Requested -> Validated or Rejected.
//
// Rules, in order
// - The event must exist.
// - The actor must be the event's host.
// - `now` must fall inside the check-in window.
// - Never performs input or output.

use crate::modules::attendance::core::check_window::{CheckWindowPolicy, WindowPosition, evaluate};
use crate::modules::attendance::core::directory::ScheduledEvent;
use crate::modules::attendance::core::record::EventSnapshot;
use crate::modules::attendance::use_cases::check_in::{
    command::CheckIn,
    decision::{DecideError, Decision},
};
use chrono::NaiveDateTime;

pub fn decide_check_in(
    event: Option<&ScheduledEvent>,
    command: &CheckIn,
    now: NaiveDateTime,
    policy: &CheckWindowPolicy,
) -> Decision {
    let Some(event) = event else {
        return Decision::Rejected {
            reason: DecideError::EventNotFound,
        };
    };
    if !event.is_hosted_by(&command.acting_user_id) {
        return Decision::Rejected {
            reason: DecideError::NotHost,
        };
    }
    match evaluate(event, policy, now) {
        WindowPosition::Open => Decision::Accepted {
            snapshot: EventSnapshot::from(event),
            user_id: command.user_id.clone(),
            status: command.status,
        },
        position => Decision::Rejected {
            reason: DecideError::OutsideWindow(position),
        },
    }
}
