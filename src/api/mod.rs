//! Activities HTTP Contract
//!
//! The backend exposes three endpoints:
//!
//! - `GET /activities` - Full catalog
//! - `POST /activities/{name}/signup?email={email}` - Register a participant
//! - `DELETE /activities/{name}/participants?email={email}` - Unregister a participant
//!
//! Failures carry a JSON body with `detail` (FastAPI style) or `message`.
//!
//! [`ActivitiesApi`] is the seam the board controller talks through. The
//! terminal front end uses the reqwest-backed [`HttpActivitiesApi`]; the
//! browser front end supplies its own gloo-net implementation.

pub mod endpoints;
#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use http::HttpActivitiesApi;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::model::ActivityCatalog;

/// Client side of the activities REST API
///
/// Futures are not required to be `Send`: both front ends drive the board
/// from a single thread.
#[async_trait(?Send)]
pub trait ActivitiesApi {
    /// Fetch the whole catalog
    async fn list_activities(&self) -> Result<ActivityCatalog, ApiError>;

    /// Register `email` for `activity`
    async fn signup(&self, activity: &str, email: &str) -> Result<ServerMessage, ApiError>;

    /// Remove `email` from the roster of `activity`
    async fn unregister(&self, activity: &str, email: &str) -> Result<ServerMessage, ApiError>;
}

/// Body returned by the mutation endpoints, on success or failure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServerMessage {
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub detail: Option<String>,
}

impl ServerMessage {
    /// Parse a response body, treating anything unexpected as empty
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// The most specific human-readable text: `detail`, then `message`
    pub fn text(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .or(self.message.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// Only plain strings count; FastAPI validation errors put an array in `detail`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Errors raised by an [`ActivitiesApi`] call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, refused, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("API error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    /// The response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            detail: ServerMessage::from_body(body).text().map(str::to_string),
        }
    }
}
