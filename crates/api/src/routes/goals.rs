//! Goal listing handler.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use goalpost_core::{GoalSort, select_goals};

use crate::error::{AppError, Result};
use crate::response::Envelope;
use crate::state::AppState;

/// Goal listing query parameters.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GoalsQuery {
    /// Case-insensitive substring of `description`.
    pub query: Option<String>,
    /// `upVotes` or `dateCreated`; anything else leaves the order alone.
    pub sort: Option<String>,
}

impl GoalsQuery {
    /// Collect the listing parameters from raw query pairs.
    ///
    /// A repeated `sort` is treated like an unknown key and leaves the order
    /// alone. Other parameters are ignored.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if `query` is repeated.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self> {
        let mut params = Self::default();
        let mut sort_repeated = false;

        for (key, value) in pairs {
            match key.as_str() {
                "query" if params.query.is_some() => {
                    return Err(AppError::Internal(
                        "repeated `query` parameter in goal listing".to_string(),
                    ));
                }
                "query" => params.query = Some(value),
                "sort" if params.sort.is_some() => sort_repeated = true,
                "sort" => params.sort = Some(value),
                _ => {}
            }
        }

        if sort_repeated {
            tracing::debug!("Ignoring repeated sort key");
            params.sort = None;
        }
        Ok(params)
    }
}

/// `GET /v1/goals` - all goals, optionally filtered then sorted.
///
/// The sort runs on the filtered list, never on the stored goals.
#[instrument(skip(state, pairs))]
pub async fn index(
    State(state): State<AppState>,
    pairs: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response> {
    let Query(pairs) = pairs.map_err(|rejection| AppError::Internal(rejection.body_text()))?;
    let params = GoalsQuery::from_pairs(pairs)?;

    let sort = params.sort.as_deref().and_then(|key| {
        let sort = GoalSort::parse(key);
        if sort.is_none() {
            tracing::debug!(sort = key, "Ignoring unknown sort key");
        }
        sort
    });

    let goals = {
        let store = state.read_store()?;
        select_goals(store.goals(), params.query.as_deref(), sort)
    };

    tracing::debug!(
        query = params.query.as_deref(),
        sort = sort.map(GoalSort::as_str),
        count = goals.len(),
        "Listed goals"
    );

    Ok(Envelope::ok(goals).into_response())
}
