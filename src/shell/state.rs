use crate::modules::attendance::adapters::outbound::attendance_store_in_memory::InMemoryAttendanceStore;
use crate::modules::attendance::adapters::outbound::directories_in_memory::InMemoryDirectory;
use crate::modules::attendance::core::check_window::CheckWindowPolicy;
use crate::modules::attendance::core::scoring::ScoringWeights;
use crate::modules::attendance::use_cases::check_in::handler::CheckInHandler;
use crate::modules::attendance::use_cases::event_roster::handler::EventRosterHandler;
use crate::modules::attendance::use_cases::global_study_rank::handler::GlobalStudyRankHandler;
use crate::modules::attendance::use_cases::host_event_view::handler::HostEventViewHandler;
use crate::modules::attendance::use_cases::monthly_ranking::handler::MonthlyRankingHandler;
use crate::modules::attendance::use_cases::study_summary::handler::StudySummaryHandler;
use crate::modules::attendance::use_cases::user_summary::handler::UserSummaryHandler;
use crate::shared::core::clock::Clock;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub check_in_handler: Arc<CheckInHandler<InMemoryAttendanceStore, InMemoryDirectory>>,
    pub user_summary_handler: Arc<UserSummaryHandler>,
    pub study_summary_handler: Arc<StudySummaryHandler>,
    pub monthly_ranking_handler: Arc<MonthlyRankingHandler>,
    pub global_study_rank_handler: Arc<GlobalStudyRankHandler>,
    pub host_event_view_handler: Arc<HostEventViewHandler>,
    pub event_roster_handler: Arc<EventRosterHandler>,
}

impl AppState {
    pub fn in_memory(
        store: Arc<InMemoryAttendanceStore>,
        directory: Arc<InMemoryDirectory>,
        clock: Arc<dyn Clock>,
        policy: CheckWindowPolicy,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            check_in_handler: Arc::new(CheckInHandler::new(
                store.clone(),
                directory.clone(),
                clock.clone(),
                policy,
            )),
            user_summary_handler: Arc::new(UserSummaryHandler::new(
                store.clone(),
                directory.clone(),
                weights,
            )),
            study_summary_handler: Arc::new(StudySummaryHandler::new(
                store.clone(),
                directory.clone(),
                directory.clone(),
                weights,
            )),
            monthly_ranking_handler: Arc::new(MonthlyRankingHandler::new(
                store.clone(),
                directory.clone(),
                weights,
            )),
            global_study_rank_handler: Arc::new(GlobalStudyRankHandler::new(
                store.clone(),
                directory.clone(),
                clock.clone(),
                weights,
            )),
            host_event_view_handler: Arc::new(HostEventViewHandler::new(
                store.clone(),
                directory.clone(),
                directory.clone(),
                clock.clone(),
                policy,
                weights,
            )),
            event_roster_handler: Arc::new(EventRosterHandler::new(
                store,
                directory.clone(),
                directory,
                clock,
                policy,
            )),
        }
    }
}
