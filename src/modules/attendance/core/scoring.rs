// Scoring engine: status counts and the weighted attendance percentage.
//
// Formula
// - percent = round(score / total * 10^(d + 2)) / 10^d, with score the weighted sum
//   of counts and d the number of decimals kept. Rounding is half away from zero.
// - A zero total scores 0, never NaN.
//
// Weights default to present = 1, late = 0.5, absent = 0 and can be configured.

use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::core::status::AttendanceStatus;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub present: u32,
    pub late: u32,
    pub absent: u32,
}

impl StatusCounts {
    pub fn total(&self) -> u32 {
        self.present + self.late + self.absent
    }

    pub fn record(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Absent => self.absent += 1,
        }
    }

    /// Counts a raw status label. Unknown labels are skipped.
    pub fn tally_label(&mut self, label: &str) -> bool {
        match label.parse::<AttendanceStatus>() {
            Ok(status) => {
                self.record(status);
                true
            }
            Err(_) => false,
        }
    }
}

pub fn summarize<I, S>(labels: I) -> StatusCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .fold(StatusCounts::default(), |mut counts, label| {
            counts.tally_label(label.as_ref());
            counts
        })
}

pub fn summarize_records<'a, I>(records: I) -> StatusCounts
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    records
        .into_iter()
        .fold(StatusCounts::default(), |mut counts, record| {
            counts.record(record.status);
            counts
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Per-user and per-study display.
    OneDecimal,
    /// Cross-study rank lookup.
    TwoDecimals,
}

impl Precision {
    pub fn digits(&self) -> i32 {
        match self {
            Self::OneDecimal => 1,
            Self::TwoDecimals => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub present: f64,
    pub late: f64,
    pub absent: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            present: 1.0,
            late: 0.5,
            absent: 0.0,
        }
    }
}

impl ScoringWeights {
    pub fn weighted_percent(&self, counts: &StatusCounts, precision: Precision) -> f64 {
        let total = counts.total();
        if total == 0 {
            return 0.0;
        }
        let score = f64::from(counts.present) * self.present
            + f64::from(counts.late) * self.late
            + f64::from(counts.absent) * self.absent;
        let digits = precision.digits();
        (score / f64::from(total) * 10f64.powi(digits + 2)).round() / 10f64.powi(digits)
    }
}
