//! Category route handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use goalpost_core::CategoryId;

use crate::error::Result;
use crate::extract::PathParams;
use crate::response::Envelope;
use crate::state::AppState;

/// `GET /v1/categories` - every category.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Response> {
    let store = state.read_store()?;
    Ok(Envelope::ok(store.categories()).into_response())
}

/// `GET /v1/categories/{id}/goals` - goals in one category.
///
/// An id that matches nothing (or is not a number) yields an empty list.
/// Faults on this route answer with the error text as `data`.
#[instrument(skip(state))]
pub async fn goals(
    State(state): State<AppState>,
    PathParams(id): PathParams<String>,
) -> Result<Response> {
    let store = state.read_store().map_err(|err| {
        let text = err.to_string();
        err.with_fault_data(text)
    })?;

    let goals = CategoryId::parse(&id)
        .map(|category| store.goals_in_category(category))
        .unwrap_or_default();

    Ok(Envelope::ok(goals).into_response())
}
