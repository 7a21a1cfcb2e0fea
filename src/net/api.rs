//! REST API helpers for communicating with the message server.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native build: stubs returning errors, since these endpoints are only
//! meaningful in a browser tab.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with an [`ApiError`] instead of panics, so
//! a failed call degrades to a notification or a log line and the page
//! stays interactive. The two failure modes stay distinct because their
//! user-facing surfaces differ: a server rejection gets an
//! endpoint-specific message, a transport failure a generic one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use super::types::Message;
#[cfg(feature = "csr")]
use super::types::{LoginRequest, NewMessage};

/// Why an API call failed: the server answered with a non-OK status, or
/// the request never completed (transport or body-decode failure).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with this non-OK status.
    Rejected(u16),
    /// The request never produced a usable answer.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(status) => write!(f, "rejected with status {status}"),
            Self::Transport(cause) => write!(f, "transport failure: {cause}"),
        }
    }
}

/// Exchange credentials for a session via `POST /api/login`.
///
/// `Ok(true)` means the server accepted the credentials, `Ok(false)` that
/// it rejected them (non-OK status, body ignored either way).
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when the request never completes.
pub async fn login(username: &str, password: &str) -> Result<bool, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/login")
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(resp.ok())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err(ApiError::Transport(
            "not available outside the browser".to_owned(),
        ))
    }
}

/// Post a new message via `POST /api/messages`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] on a non-OK status and
/// [`ApiError::Transport`] when the request never completes.
pub async fn send_message(content: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = NewMessage {
            content: content.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/messages")
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Rejected(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = content;
        Err(ApiError::Transport(
            "not available outside the browser".to_owned(),
        ))
    }
}

/// Fetch the full message list via `GET /api/messages`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] on a non-OK status and
/// [`ApiError::Transport`] when the request never completes or the body
/// does not parse.
pub async fn fetch_messages() -> Result<Vec<Message>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/messages")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Rejected(resp.status()));
        }
        resp.json::<Vec<Message>>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Transport(
            "not available outside the browser".to_owned(),
        ))
    }
}
