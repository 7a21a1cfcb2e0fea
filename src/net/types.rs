//! Wire types shared with the message API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A single posted message as returned by `GET /api/messages`.
///
/// `timestamp` is an ISO-8601 instant; the server may omit it, in which
/// case it defaults to the empty string and renders as blank. Extra fields
/// in the payload (the server includes a storage `id`) are ignored.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Request body for `POST /api/login`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /api/messages`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct NewMessage {
    pub content: String,
}
