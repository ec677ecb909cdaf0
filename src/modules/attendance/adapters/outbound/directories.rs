// Directory ports: read-only lookups into the surrounding platform.
//
// Purpose
// - EventDirectory: scheduled events by id and by host.
// - StudyDirectory: studies with host and members; enumerates every study for ranking.
// - UserDirectory: display names used to label summaries.
//
// Collaborator failures are opaque to this core and surface as `anyhow::Error`.

use crate::modules::attendance::core::directory::{
    ScheduledEvent, Study, UNKNOWN_LABEL, UserProfile,
};
use async_trait::async_trait;

#[async_trait]
pub trait EventDirectory: Send + Sync {
    async fn find_event(&self, event_id: &str) -> anyhow::Result<Option<ScheduledEvent>>;
    async fn list_hosted_by(&self, host_id: &str) -> anyhow::Result<Vec<ScheduledEvent>>;
}

#[async_trait]
pub trait StudyDirectory: Send + Sync {
    async fn find_study(&self, study_id: &str) -> anyhow::Result<Option<Study>>;
    async fn list_studies(&self) -> anyhow::Result<Vec<Study>>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>>;

    async fn display_name(&self, user_id: &str) -> anyhow::Result<String> {
        Ok(self
            .find_user(user_id)
            .await?
            .map(|user| user.display_name)
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string()))
    }
}
