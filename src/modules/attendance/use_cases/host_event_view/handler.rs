// Host dashboard: the events a user hosts, split at "now".
//
// - An event is upcoming while its check window has not closed; otherwise past.
// - Events whose interval cannot be computed are left out.
// - Past events carry their attendance summary at one decimal.

use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::adapters::outbound::directories::{EventDirectory, StudyDirectory};
use crate::modules::attendance::core::check_window::{
    CheckWindowPolicy, WindowPosition, evaluate, event_interval,
};
use crate::modules::attendance::core::scoring::{Precision, ScoringWeights, summarize_records};
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::host_event_view::view::{
    HostEventView, HostedEvent, PastEvent, UpcomingEvent,
};
use crate::shared::core::clock::Clock;
use std::collections::HashMap;
use std::sync::Arc;

pub struct HostEventViewHandler {
    store: Arc<dyn AttendanceStore>,
    events: Arc<dyn EventDirectory>,
    studies: Arc<dyn StudyDirectory>,
    clock: Arc<dyn Clock>,
    policy: CheckWindowPolicy,
    weights: ScoringWeights,
}

impl HostEventViewHandler {
    pub fn new(
        store: Arc<dyn AttendanceStore>,
        events: Arc<dyn EventDirectory>,
        studies: Arc<dyn StudyDirectory>,
        clock: Arc<dyn Clock>,
        policy: CheckWindowPolicy,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            store,
            events,
            studies,
            clock,
            policy,
            weights,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, host_id: &str) -> Result<HostEventView, ApplicationError> {
        let hosted = self
            .events
            .list_hosted_by(host_id)
            .await
            .map_err(ApplicationError::directory)?;

        let now = self.clock.now();
        let mut study_titles: HashMap<String, Option<String>> = HashMap::new();
        let mut upcoming = Vec::new();
        let mut past = Vec::new();

        for event in hosted {
            let Some(interval) = event_interval(&event) else {
                tracing::debug!(event_id = %event.event_id, "skipping event without a schedule");
                continue;
            };
            let Some(check_window) = interval.check_window(&self.policy) else {
                continue;
            };

            if !study_titles.contains_key(&event.study_id) {
                let title = self
                    .studies
                    .find_study(&event.study_id)
                    .await
                    .map_err(ApplicationError::directory)?
                    .map(|study| study.title);
                study_titles.insert(event.study_id.clone(), title);
            }

            let window = evaluate(&event, &self.policy, now);
            let hosted_event = HostedEvent {
                study_title: study_titles.get(&event.study_id).cloned().flatten(),
                event_id: event.event_id,
                study_id: event.study_id,
                title: event.title,
                location: event.location,
                starts_at: interval.starts_at,
                ends_at: interval.ends_at,
            };

            if check_window.closes_at >= now {
                upcoming.push(UpcomingEvent {
                    event: hosted_event,
                    can_check: window == WindowPosition::Open,
                    window,
                    check_window,
                });
            } else {
                let records = self.store.find_by_event(&hosted_event.event_id).await?;
                let counts = summarize_records(&records);
                past.push(PastEvent {
                    event: hosted_event,
                    percent: self.weights.weighted_percent(&counts, Precision::OneDecimal),
                    counts,
                });
            }
        }

        upcoming.sort_by(|a, b| a.event.starts_at.cmp(&b.event.starts_at));
        past.sort_by(|a, b| b.event.starts_at.cmp(&a.event.starts_at));

        Ok(HostEventView {
            host_id: host_id.to_string(),
            upcoming,
            past,
        })
    }
}
