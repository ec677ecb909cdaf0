// In memory directory backing all three directory ports.
//
// Purpose
// - Run the service and its tests without the platform's schedule, study and user
//   services.
//
// Responsibilities
// - Keep entities in insertion order, which is the order studies are ranked in on ties.
// - Load an optional JSON seed document at start-up.

use crate::modules::attendance::adapters::outbound::directories::{
    EventDirectory, StudyDirectory, UserDirectory,
};
use crate::modules::attendance::core::directory::{ScheduledEvent, Study, UserProfile};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySeed {
    #[serde(default)]
    pub users: Vec<UserProfile>,
    #[serde(default)]
    pub studies: Vec<Study>,
    #[serde(default)]
    pub events: Vec<ScheduledEvent>,
}

impl DirectorySeed {
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read directory seed {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse directory seed {}", path.display()))
    }
}

#[derive(Default)]
pub struct InMemoryDirectory {
    users: RwLock<Vec<UserProfile>>,
    studies: RwLock<Vec<Study>>,
    events: RwLock<Vec<ScheduledEvent>>,
    is_offline: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: DirectorySeed) -> Self {
        Self {
            users: RwLock::new(seed.users),
            studies: RwLock::new(seed.studies),
            events: RwLock::new(seed.events),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn add_user(&self, user: UserProfile) {
        let mut guard = self.users.write().await;
        guard.retain(|existing| existing.user_id != user.user_id);
        guard.push(user);
    }

    pub async fn add_study(&self, study: Study) {
        let mut guard = self.studies.write().await;
        guard.retain(|existing| existing.study_id != study.study_id);
        guard.push(study);
    }

    pub async fn add_event(&self, event: ScheduledEvent) {
        let mut guard = self.events.write().await;
        guard.retain(|existing| existing.event_id != event.event_id);
        guard.push(event);
    }

    pub async fn remove_study(&self, study_id: &str) {
        self.studies
            .write()
            .await
            .retain(|study| study.study_id != study_id);
    }

    pub async fn remove_event(&self, event_id: &str) {
        self.events
            .write()
            .await
            .retain(|event| event.event_id != event_id);
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Directory offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventDirectory for InMemoryDirectory {
    async fn find_event(&self, event_id: &str) -> anyhow::Result<Option<ScheduledEvent>> {
        self.ensure_online()?;
        Ok(self
            .events
            .read()
            .await
            .iter()
            .find(|event| event.event_id == event_id)
            .cloned())
    }

    async fn list_hosted_by(&self, host_id: &str) -> anyhow::Result<Vec<ScheduledEvent>> {
        self.ensure_online()?;
        Ok(self
            .events
            .read()
            .await
            .iter()
            .filter(|event| event.is_hosted_by(host_id))
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl StudyDirectory for InMemoryDirectory {
    async fn find_study(&self, study_id: &str) -> anyhow::Result<Option<Study>> {
        self.ensure_online()?;
        Ok(self
            .studies
            .read()
            .await
            .iter()
            .find(|study| study.study_id == study_id)
            .cloned())
    }

    async fn list_studies(&self) -> anyhow::Result<Vec<Study>> {
        self.ensure_online()?;
        Ok(self.studies.read().await.clone())
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn find_user(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>> {
        self.ensure_online()?;
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.user_id == user_id)
            .cloned())
    }
}
