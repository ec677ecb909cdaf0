// Time window evaluator: may attendance be recorded for an event right now?
//
// Rules
// - Date + "HH:mm" combine into a local wall-clock instant. A missing or unparseable
//   date or time makes the event unschedulable and the window closed.
// - An end instant before the start instant means the event crosses midnight; the
//   end moves forward 24 hours.
// - The window is [start - grace, end + grace], both ends inclusive.
//
// Boundaries
// - Pure. The caller passes `now`, sampled fresh for every evaluation.

use crate::modules::attendance::core::directory::ScheduledEvent;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;

pub const DEFAULT_GRACE_MINUTES: i64 = 5;
pub const MAX_GRACE_MINUTES: i64 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckWindowPolicy {
    pub grace: TimeDelta,
}

impl CheckWindowPolicy {
    /// `None` unless `0 <= minutes <= MAX_GRACE_MINUTES`.
    pub fn try_from_minutes(minutes: i64) -> Option<Self> {
        if !(0..=MAX_GRACE_MINUTES).contains(&minutes) {
            return None;
        }
        TimeDelta::try_minutes(minutes).map(|grace| Self { grace })
    }
}

impl Default for CheckWindowPolicy {
    fn default() -> Self {
        Self {
            grace: TimeDelta::minutes(DEFAULT_GRACE_MINUTES),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPosition {
    TooEarly,
    Open,
    TooLate,
    Unscheduled,
}

impl WindowPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooEarly => "too_early",
            Self::Open => "open",
            Self::TooLate => "too_late",
            Self::Unscheduled => "unscheduled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventInterval {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckWindow {
    pub opens_at: NaiveDateTime,
    pub closes_at: NaiveDateTime,
}

/// Parses "HH:mm" (trailing ":ss" is tolerated and dropped).
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let mut parts = value.trim().split(':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

fn combine(date: Option<NaiveDate>, time: Option<&str>) -> Option<NaiveDateTime> {
    Some(date?.and_time(parse_time_of_day(time?)?))
}

pub fn event_interval(event: &ScheduledEvent) -> Option<EventInterval> {
    let starts_at = combine(event.start_date, event.start_time.as_deref())?;
    let mut ends_at = combine(
        event.end_date.or(event.start_date),
        event.end_time.as_deref(),
    )?;
    if ends_at < starts_at {
        ends_at = ends_at.checked_add_signed(TimeDelta::hours(24))?;
    }
    Some(EventInterval { starts_at, ends_at })
}

impl EventInterval {
    pub fn check_window(&self, policy: &CheckWindowPolicy) -> Option<CheckWindow> {
        Some(CheckWindow {
            opens_at: self.starts_at.checked_sub_signed(policy.grace)?,
            closes_at: self.ends_at.checked_add_signed(policy.grace)?,
        })
    }
}

pub fn check_window(event: &ScheduledEvent, policy: &CheckWindowPolicy) -> Option<CheckWindow> {
    event_interval(event)?.check_window(policy)
}

pub fn evaluate(
    event: &ScheduledEvent,
    policy: &CheckWindowPolicy,
    now: NaiveDateTime,
) -> WindowPosition {
    match check_window(event, policy) {
        None => WindowPosition::Unscheduled,
        Some(window) if now < window.opens_at => WindowPosition::TooEarly,
        Some(window) if now > window.closes_at => WindowPosition::TooLate,
        Some(_) => WindowPosition::Open,
    }
}

pub fn is_within_check_window(
    event: &ScheduledEvent,
    policy: &CheckWindowPolicy,
    now: NaiveDateTime,
) -> bool {
    evaluate(event, policy, now) == WindowPosition::Open
}
