use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::adapters::outbound::directories::{EventDirectory, UserDirectory};
use crate::modules::attendance::core::check_window::{
    CheckWindowPolicy, WindowPosition, check_window, evaluate,
};
use crate::modules::attendance::core::status::AttendanceStatus;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::event_roster::view::{EventRoster, RosterEntry};
use crate::shared::core::clock::Clock;
use std::collections::HashMap;
use std::sync::Arc;

pub struct EventRosterHandler {
    store: Arc<dyn AttendanceStore>,
    events: Arc<dyn EventDirectory>,
    users: Arc<dyn UserDirectory>,
    clock: Arc<dyn Clock>,
    policy: CheckWindowPolicy,
}

impl EventRosterHandler {
    pub fn new(
        store: Arc<dyn AttendanceStore>,
        events: Arc<dyn EventDirectory>,
        users: Arc<dyn UserDirectory>,
        clock: Arc<dyn Clock>,
        policy: CheckWindowPolicy,
    ) -> Self {
        Self {
            store,
            events,
            users,
            clock,
            policy,
        }
    }

    /// Listed participants keep their order; users with a record who are not listed
    /// are appended.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, event_id: &str) -> Result<EventRoster, ApplicationError> {
        let event = self
            .events
            .find_event(event_id)
            .await
            .map_err(ApplicationError::directory)?
            .ok_or_else(|| ApplicationError::NotFound(format!("event {event_id}")))?;
        let records = self.store.find_by_event(event_id).await?;

        let statuses: HashMap<&str, AttendanceStatus> = records
            .iter()
            .map(|record| (record.user_id.as_str(), record.status))
            .collect();

        let mut user_ids: Vec<&str> = Vec::new();
        for user_id in event
            .participants
            .iter()
            .map(String::as_str)
            .chain(records.iter().map(|record| record.user_id.as_str()))
        {
            if !user_ids.contains(&user_id) {
                user_ids.push(user_id);
            }
        }

        let mut participants = Vec::with_capacity(user_ids.len());
        for user_id in user_ids {
            let display_name = self
                .users
                .display_name(user_id)
                .await
                .map_err(ApplicationError::directory)?;
            participants.push(RosterEntry {
                user_id: user_id.to_string(),
                display_name,
                status: statuses.get(user_id).copied(),
            });
        }

        let window = evaluate(&event, &self.policy, self.clock.now());
        Ok(EventRoster {
            can_check: window == WindowPosition::Open,
            window,
            check_window: check_window(&event, &self.policy),
            participants,
            event,
        })
    }
}

#[cfg(test)]
mod event_roster_handler_tests {
    use crate::modules::attendance::core::check_window::WindowPosition;
    use crate::modules::attendance::core::status::AttendanceStatus;
    use crate::modules::attendance::use_cases::errors::ApplicationError;
    use crate::tests::fixtures::directory::at;
    use crate::tests::fixtures::state::{make_test_app, seed_record};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_merge_participants_with_recorded_statuses() {
        let test_app = make_test_app(at(2025, 9, 20, 14, 30));
        seed_record(&test_app, "ev-algo-0920", "u-lee", AttendanceStatus::Late).await;
        seed_record(&test_app, "ev-algo-0920", "u-choi", AttendanceStatus::Present).await;

        let roster = test_app
            .state
            .event_roster_handler
            .handle("ev-algo-0920")
            .await
            .expect("handle failed");

        assert!(roster.can_check);
        assert_eq!(roster.window, WindowPosition::Open);
        assert_eq!(roster.event.title, "Dynamic programming");
        let rows: Vec<(&str, &str, Option<AttendanceStatus>)> = roster
            .participants
            .iter()
            .map(|p| (p.user_id.as_str(), p.display_name.as_str(), p.status))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("u-kim", "Kim", None),
                ("u-lee", "Lee", Some(AttendanceStatus::Late)),
                ("u-choi", "Choi", Some(AttendanceStatus::Present)),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_closed_window() {
        let test_app = make_test_app(at(2025, 9, 20, 15, 6));

        let roster = test_app
            .state
            .event_roster_handler
            .handle("ev-algo-0920")
            .await
            .expect("handle failed");

        assert!(!roster.can_check);
        assert_eq!(roster.window, WindowPosition::TooLate);
        assert!(roster.check_window.is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_for_an_unknown_event() {
        let test_app = make_test_app(at(2025, 9, 20, 14, 30));

        let result = test_app.state.event_roster_handler.handle("ev-gone").await;

        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }
}
