// Shared builder for ScheduledEvent in tests.
// Defaults describe a one hour session on 2025-09-10, 14:00 to 15:00.

use crate::modules::attendance::core::directory::ScheduledEvent;
use chrono::NaiveDate;

pub struct ScheduledEventBuilder {
    inner: ScheduledEvent,
}

impl Default for ScheduledEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ScheduledEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: ScheduledEvent {
                event_id: "ev-fixed-0001".to_string(),
                study_id: "st-fixed-0001".to_string(),
                title: "Weekly sync".to_string(),
                start_date: NaiveDate::from_ymd_opt(2025, 9, 10),
                start_time: Some("14:00".to_string()),
                end_date: None,
                end_time: Some("15:00".to_string()),
                location: "Room 101".to_string(),
                created_by: "host-fixed-0001".to_string(),
                participants: Vec::new(),
                capacity: 0,
            },
        }
    }

    pub fn event_id(mut self, v: impl Into<String>) -> Self {
        self.inner.event_id = v.into();
        self
    }

    pub fn study_id(mut self, v: impl Into<String>) -> Self {
        self.inner.study_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn start_date(mut self, v: NaiveDate) -> Self {
        self.inner.start_date = Some(v);
        self
    }

    pub fn end_date(mut self, v: NaiveDate) -> Self {
        self.inner.end_date = Some(v);
        self
    }

    pub fn start_time(mut self, v: impl Into<String>) -> Self {
        self.inner.start_time = Some(v.into());
        self
    }

    pub fn end_time(mut self, v: impl Into<String>) -> Self {
        self.inner.end_time = Some(v.into());
        self
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by = v.into();
        self
    }

    pub fn participants(mut self, v: &[&str]) -> Self {
        self.inner.participants = v.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn build(self) -> ScheduledEvent {
        self.inner
    }
}
