//! Current-user route handlers.
//!
//! Every `/v1/me` route acts on the current user: the first user in the
//! users snapshot. The goal mutations push onto that user's collections, or
//! onto another user's for challenge and gift.
//!
//! Status codes depend on [`ResponseMode`]; see the handler docs for where
//! the legacy behavior differs.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use goalpost_core::{GoalId, UserId};

use crate::config::ResponseMode;
use crate::error::{AppError, Result};
use crate::extract::PathParams;
use crate::response::{
    CHALLENGE_GOAL_NOT_FOUND_TEXT, Envelope, GIFT_NOT_FOUND, GOAL_NOT_FOUND, MUTATION_SERVER_ERROR,
    SUCCESS, USER_NOT_FOUND, plain_text,
};
use crate::state::AppState;
use crate::store::MutationError;

/// `GET /v1/me` - the current user.
///
/// Without a current user the body says 400; legacy mode still answers HTTP 200.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Response> {
    let store = state.read_store()?;

    let Some(user) = store.current_user() else {
        let http_status = match state.response_mode() {
            ResponseMode::Legacy => StatusCode::OK,
            ResponseMode::Corrected => StatusCode::BAD_REQUEST,
        };
        return Ok(
            Envelope::new(StatusCode::BAD_REQUEST, USER_NOT_FOUND).with_http_status(http_status)
        );
    };

    Ok(Envelope::ok(user).into_response())
}

/// `POST /v1/me/goals/{goal_id}/accept` - add a goal to the current user's accepted goals.
#[instrument(skip(state))]
pub async fn accept(
    State(state): State<AppState>,
    PathParams(goal_id): PathParams<String>,
) -> Result<Response> {
    let result = match GoalId::parse(&goal_id) {
        Ok(id) => state.write_store().map_err(mutation_fault)?.accept_goal(id),
        Err(_) => Err(MutationError::GoalNotFound),
    };

    match result {
        Ok(()) => {
            tracing::info!(goal_id = %goal_id, "Goal accepted");
            Ok(success())
        }
        Err(MutationError::GoalNotFound) => {
            tracing::debug!(goal_id = %goal_id, "Accept: goal not found");
            Ok(goal_not_found())
        }
        Err(err) => no_current_user(state.response_mode(), err),
    }
}

/// `POST /v1/me/goals/{goal_id}/achieve` - move an accepted goal into achieved goals.
///
/// The goal must be in the current user's accepted goals; it stays there.
#[instrument(skip(state))]
pub async fn achieve(
    State(state): State<AppState>,
    PathParams(goal_id): PathParams<String>,
) -> Result<Response> {
    let result = {
        let mut store = state.write_store().map_err(mutation_fault)?;
        match GoalId::parse(&goal_id) {
            Ok(id) => store.achieve_goal(id),
            Err(_) if store.current_user().is_none() => Err(MutationError::NoCurrentUser),
            Err(_) => Err(MutationError::GoalNotFound),
        }
    };

    match result {
        Ok(()) => {
            tracing::info!(goal_id = %goal_id, "Goal achieved");
            Ok(success())
        }
        Err(MutationError::GoalNotFound) => {
            tracing::debug!(goal_id = %goal_id, "Achieve: goal not accepted");
            Ok(goal_not_found())
        }
        Err(err) => no_current_user(state.response_mode(), err),
    }
}

/// `POST /v1/me/goals/{goal_id}/challenge/{user_id}` - challenge another user with a goal.
///
/// Legacy mode answers an empty 200 on success, a plain-text 400 for an
/// unknown goal, and a 500 for an unknown user.
#[instrument(skip(state))]
pub async fn challenge(
    State(state): State<AppState>,
    PathParams((goal_id, user_id)): PathParams<(String, String)>,
) -> Result<Response> {
    let mode = state.response_mode();

    let result = {
        let mut store = state.write_store()?;
        match (GoalId::parse(&goal_id), UserId::parse(&user_id)) {
            (Ok(goal), Ok(user)) => store.challenge_user(goal, user),
            (Ok(goal), Err(_)) if store.find_goal(goal).is_some() => {
                Err(MutationError::UserNotFound)
            }
            _ => Err(MutationError::GoalNotFound),
        }
    };

    match (result, mode) {
        (Ok(()), ResponseMode::Legacy) => {
            tracing::info!(goal_id = %goal_id, user_id = %user_id, "User challenged");
            Ok(StatusCode::OK.into_response())
        }
        (Ok(()), ResponseMode::Corrected) => {
            tracing::info!(goal_id = %goal_id, user_id = %user_id, "User challenged");
            Ok(success())
        }
        (Err(MutationError::GoalNotFound), ResponseMode::Legacy) => Ok(plain_text(
            StatusCode::BAD_REQUEST,
            CHALLENGE_GOAL_NOT_FOUND_TEXT,
        )),
        (Err(MutationError::GoalNotFound), ResponseMode::Corrected) => Ok(goal_not_found()),
        (Err(MutationError::UserNotFound), ResponseMode::Corrected) => {
            tracing::debug!(user_id = %user_id, "Challenge: user not found");
            Ok(Envelope::new(StatusCode::NOT_FOUND, USER_NOT_FOUND).into_response())
        }
        (Err(err), _) => Err(AppError::Internal(format!(
            "challenge of user {user_id} with goal {goal_id} failed: {err}"
        ))),
    }
}

/// `POST /v1/me/goals/{goal_id}/gift/{user_id}` - gift a goal to another user.
///
/// Legacy mode answers success with HTTP 500 and `{"status": 500, "data": "success"}`.
#[instrument(skip(state))]
pub async fn gift(
    State(state): State<AppState>,
    PathParams((goal_id, user_id)): PathParams<(String, String)>,
) -> Result<Response> {
    let result = match (GoalId::parse(&goal_id), UserId::parse(&user_id)) {
        (Ok(goal), Ok(user)) => state.write_store().map_err(mutation_fault)?.gift_goal(goal, user),
        _ => Err(MutationError::GoalNotFound),
    };

    match result {
        Ok(()) => {
            tracing::info!(goal_id = %goal_id, user_id = %user_id, "Goal gifted");
            let status = match state.response_mode() {
                ResponseMode::Legacy => StatusCode::INTERNAL_SERVER_ERROR,
                ResponseMode::Corrected => StatusCode::OK,
            };
            Ok(Envelope::new(status, SUCCESS).into_response())
        }
        Err(err) => {
            tracing::debug!(goal_id = %goal_id, user_id = %user_id, error = %err, "Gift: lookup failed");
            Ok(Envelope::new(StatusCode::NOT_FOUND, GIFT_NOT_FOUND).into_response())
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Mutation routes answer faults with a lowercase payload.
fn mutation_fault(err: AppError) -> AppError {
    err.with_fault_data(MUTATION_SERVER_ERROR)
}

fn success() -> Response {
    Envelope::ok(SUCCESS).into_response()
}

fn goal_not_found() -> Response {
    Envelope::new(StatusCode::BAD_REQUEST, GOAL_NOT_FOUND).into_response()
}

/// Accept or achieve with no current user to push onto.
fn no_current_user(mode: ResponseMode, err: MutationError) -> Result<Response> {
    match mode {
        ResponseMode::Legacy => Err(mutation_fault(AppError::Internal(err.to_string()))),
        ResponseMode::Corrected => {
            Ok(Envelope::new(StatusCode::BAD_REQUEST, USER_NOT_FOUND).into_response())
        }
    }
}
