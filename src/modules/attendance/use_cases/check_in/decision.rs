use crate::modules::attendance::core::check_window::WindowPosition;
use crate::modules::attendance::core::record::EventSnapshot;
use crate::modules::attendance::core::status::AttendanceStatus;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("event not found")]
    EventNotFound,

    #[error("only the event host can record attendance")]
    NotHost,

    #[error("check-in window is {}", .0.as_str())]
    OutsideWindow(WindowPosition),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        snapshot: EventSnapshot,
        user_id: String,
        status: AttendanceStatus,
    },
    Rejected {
        reason: DecideError,
    },
}
