// Check-in command and its transport-shaped request.
//
// Validation order: required fields, then the status label, then the acting user.
// An empty string counts as missing. Nothing here touches a store.
//
// The acting user comes from the identity header when present, otherwise from a
// non-blank `checker_id` in the request.

use crate::modules::attendance::core::status::AttendanceStatus;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    pub event_id: String,
    pub user_id: String,
    pub status: AttendanceStatus,
    pub acting_user_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckInRequest {
    pub event_id: Option<String>,
    pub user_id: Option<String>,
    pub status: Option<String>,
    /// Fallback actor when the identity header is absent.
    pub checker_id: Option<String>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ApplicationError> {
    non_blank(value).ok_or(ApplicationError::MissingRequiredField(field))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl CheckInRequest {
    pub fn into_command(self, header_actor: Option<String>) -> Result<CheckIn, ApplicationError> {
        let event_id = required(self.event_id, "event_id")?;
        let user_id = required(self.user_id, "user_id")?;
        let status = required(self.status, "status")?;
        let status = status
            .parse::<AttendanceStatus>()
            .map_err(|invalid| ApplicationError::InvalidStatus(invalid.0))?;
        let acting_user_id = non_blank(header_actor)
            .or_else(|| non_blank(self.checker_id))
            .ok_or(ApplicationError::Unauthorized)?;
        Ok(CheckIn {
            event_id,
            user_id,
            status,
            acting_user_id,
        })
    }
}
