// In memory implementation of the AttendanceStore port.
//
// Purpose
// - Support use case tests and local development without a database.
//
// Responsibilities
// - Key records by (event_id, user_id) and upsert under a single write lock so the
//   pair stays unique under concurrent check-ins.

use crate::modules::attendance::adapters::outbound::attendance_store::{
    AttendanceStore, AttendanceStoreError,
};
use crate::modules::attendance::core::record::{
    AttendanceRecord, EventSnapshot, sort_newest_first,
};
use crate::modules::attendance::core::status::AttendanceStatus;
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryAttendanceStore {
    rows: RwLock<HashMap<(String, String), AttendanceRecord>>,
    is_offline: bool,
}

impl InMemoryAttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    fn ensure_online(&self) -> Result<(), AttendanceStoreError> {
        if self.is_offline {
            return Err(AttendanceStoreError::Backend(
                "Attendance store offline".into(),
            ));
        }
        Ok(())
    }

    async fn select<F>(&self, predicate: F) -> Result<Vec<AttendanceRecord>, AttendanceStoreError>
    where
        F: Fn(&AttendanceRecord) -> bool + Send,
    {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut items: Vec<AttendanceRecord> = guard
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        sort_newest_first(&mut items);
        Ok(items)
    }
}

#[async_trait::async_trait]
impl AttendanceStore for InMemoryAttendanceStore {
    async fn record_status(
        &self,
        snapshot: &EventSnapshot,
        user_id: &str,
        status: AttendanceStatus,
        recorded_at: i64,
    ) -> Result<AttendanceRecord, AttendanceStoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let record = guard
            .entry((snapshot.event_id.clone(), user_id.to_string()))
            .and_modify(|existing| existing.status = status)
            .or_insert_with(|| AttendanceRecord {
                record_id: Uuid::now_v7().to_string(),
                event_id: snapshot.event_id.clone(),
                study_id: snapshot.study_id.clone(),
                user_id: user_id.to_string(),
                status,
                event_title: snapshot.title.clone(),
                event_date: snapshot.date,
                created_at: recorded_at,
            });
        Ok(record.clone())
    }

    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<AttendanceRecord>, AttendanceStoreError> {
        self.select(|record| record.user_id == user_id).await
    }

    async fn find_by_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<AttendanceRecord>, AttendanceStoreError> {
        self.select(|record| record.event_id == event_id).await
    }

    async fn find_by_study(
        &self,
        study_id: &str,
    ) -> Result<Vec<AttendanceRecord>, AttendanceStoreError> {
        self.select(|record| record.study_id == study_id).await
    }

    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, AttendanceStoreError> {
        self.select(|record| {
            record
                .event_date
                .is_some_and(|date| date >= start && date < end)
        })
        .await
    }
}
