// Application errors shared by every attendance use case.
//
// The first seven variants are caller-facing outcomes. `Store` and `Directory` are
// infrastructure failures.

use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStoreError;
use crate::modules::attendance::core::check_window::WindowPosition;
use crate::shared::core::year_month::YearMonthParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized: no acting user")]
    Unauthorized,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("check-in window is not open ({})", .0.as_str())]
    OutOfWindow(WindowPosition),

    #[error("invalid attendance status `{0}`")]
    InvalidStatus(String),

    #[error("missing required field `{0}`")]
    MissingRequiredField(&'static str),

    #[error(transparent)]
    InvalidMonth(#[from] YearMonthParseError),

    #[error(transparent)]
    Store(#[from] AttendanceStoreError),

    #[error("directory error: {0}")]
    Directory(String),
}

impl ApplicationError {
    pub fn directory(error: anyhow::Error) -> Self {
        Self::Directory(format!("{error:#}"))
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::OutOfWindow(_) => "out_of_window",
            Self::InvalidStatus(_) => "invalid_status",
            Self::MissingRequiredField(_) => "missing_required_field",
            Self::InvalidMonth(_) => "invalid_month",
            Self::Store(_) | Self::Directory(_) => "internal",
        }
    }
}
