// Clock port: where "now" comes from.
//
// Purpose
// - Give use cases a freshly sampled instant on every call, never a cached one.
// - Let tests pin time without touching the system clock.
//
// Conventions
// - `now` is local wall-clock time, matching how schedules are written ("14:00").
// - `timestamp_millis` is epoch milliseconds (UTC) and is used for creation stamps.

use chrono::{Local, NaiveDateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
    fn timestamp_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }

    fn timestamp_millis(&self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }
}
