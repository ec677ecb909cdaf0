// GraphQL output types shared by the attendance queries and mutations.

use async_graphql::{ErrorExtensions, SimpleObject};

use crate::modules::attendance::core::ranking::RankedEntry;
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::core::scoring::StatusCounts;
use crate::modules::attendance::use_cases::errors::ApplicationError;

#[derive(SimpleObject, Clone)]
pub struct GqlStatusCounts {
    pub present: u32,
    pub late: u32,
    pub absent: u32,
    pub total: u32,
}

impl From<StatusCounts> for GqlStatusCounts {
    fn from(counts: StatusCounts) -> Self {
        Self {
            present: counts.present,
            late: counts.late,
            absent: counts.absent,
            total: counts.total(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlAttendanceRecord {
    pub record_id: String,
    pub event_id: String,
    pub study_id: String,
    pub user_id: String,
    pub status: String,
    pub event_title: String,
    pub event_date: Option<String>,
    pub created_at: i64,
}

impl From<AttendanceRecord> for GqlAttendanceRecord {
    fn from(record: AttendanceRecord) -> Self {
        Self {
            record_id: record.record_id,
            event_id: record.event_id,
            study_id: record.study_id,
            user_id: record.user_id,
            status: record.status.to_string(),
            event_title: record.event_title,
            event_date: record.event_date.map(|date| date.to_string()),
            created_at: record.created_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlRankedEntry {
    pub rank: u32,
    pub id: String,
    pub label: String,
    pub counts: GqlStatusCounts,
    pub percent: f64,
}

impl From<RankedEntry> for GqlRankedEntry {
    fn from(ranked: RankedEntry) -> Self {
        Self {
            rank: ranked.rank as u32,
            id: ranked.entry.id,
            label: ranked.entry.label,
            counts: ranked.entry.counts.into(),
            percent: ranked.entry.percent,
        }
    }
}

pub fn gql_error(error: ApplicationError) -> async_graphql::Error {
    let code = error.code();
    let reason = match &error {
        ApplicationError::OutOfWindow(position) => Some(position.as_str()),
        _ => None,
    };
    async_graphql::Error::new(error.to_string()).extend_with(|_, extensions| {
        extensions.set("code", code);
        if let Some(reason) = reason {
            extensions.set("reason", reason);
        }
    })
}
