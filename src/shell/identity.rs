// Acting user resolution. Authentication happens upstream; the gateway forwards the
// authenticated user id in `x-user-id`.

use axum::http::HeaderMap;

pub const ACTOR_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor(pub String);

impl Actor {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(ACTOR_HEADER)?
            .to_str()
            .ok()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| Self(value.to_string()))
    }
}
