//! The `{status, data}` response envelope.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Payload for successful mutations.
pub const SUCCESS: &str = "success";
/// Payload for faults on read routes.
pub const SERVER_ERROR: &str = "Server error";
/// Payload for faults on mutation routes.
pub const MUTATION_SERVER_ERROR: &str = "server error";
/// Payload when a goal lookup misses.
pub const GOAL_NOT_FOUND: &str = "Goal could not be found";
/// Payload when a user lookup misses.
pub const USER_NOT_FOUND: &str = "User could not be found";
/// Payload when a gift lookup misses.
pub const GIFT_NOT_FOUND: &str = "could not find user or goal";
/// Plain-text body for a legacy challenge with an unknown goal.
pub const CHALLENGE_GOAL_NOT_FOUND_TEXT: &str = "No goal with that ID found.";

/// JSON wrapper used by every envelope response.
///
/// `status` is part of the body and is usually, but not always, the HTTP
/// status of the response; see [`Envelope::with_http_status`].
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// Envelope carrying `status` in its body.
    pub const fn new(status: StatusCode, data: T) -> Self {
        Self {
            status: status.as_u16(),
            data,
        }
    }

    /// `{status: 200, data}`.
    pub const fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, data)
    }

    /// Respond with this envelope under an HTTP status that may differ from
    /// the body's `status`.
    pub fn with_http_status(self, http_status: StatusCode) -> Response {
        (http_status, Json(self)).into_response()
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.with_http_status(status)
    }
}

/// A plain-text response, for the one legacy path that does not answer JSON.
pub fn plain_text(status: StatusCode, body: &'static str) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        )],
        body,
    )
        .into_response()
}
