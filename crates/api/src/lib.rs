//! Goalpost HTTP API.
//!
//! Serves goals, categories, and the current user from an in-memory
//! [`store::DataStore`] loaded from JSON snapshots at startup. Mutations live
//! for the lifetime of the process and are never written back.
//!
//! The router is built by [`app`] so tests and the binary share it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

use std::time::Duration;

use axum::{
    Router,
    http::{Method, Request, Response, Uri},
};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::error::AppError;
use crate::state::AppState;

/// Build the application router over `state`.
///
/// Sentry layers are left to the caller; they need an initialized client.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .fallback(not_found)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(|response: &Response<_>, latency: Duration, span: &Span| {
                    span.record("status", response.status().as_u16());
                    span.record(
                        "latency_ms",
                        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                    );
                    DefaultOnResponse::default().on_response(response, latency, span);
                }),
        )
        .with_state(state)
}

/// Unmatched routes answer with an envelope, not an empty 404.
async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("Cannot {method} {}", uri.path()))
}
