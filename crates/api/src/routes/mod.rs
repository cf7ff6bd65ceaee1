//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                     - Liveness check
//! GET  /health/ready                               - Readiness check
//!
//! # Goals
//! GET  /v1/goals?query=&sort=                      - Goal listing (filter, then sort)
//!
//! # Categories
//! GET  /v1/categories                              - Category listing
//! GET  /v1/categories/{id}/goals                   - Goals in one category
//!
//! # Current user
//! GET  /v1/me                                      - Current user
//! POST /v1/me/goals/{goal_id}/accept               - Accept a goal
//! POST /v1/me/goals/{goal_id}/achieve              - Achieve an accepted goal
//! POST /v1/me/goals/{goal_id}/challenge/{user_id}  - Challenge another user
//! POST /v1/me/goals/{goal_id}/gift/{user_id}       - Gift a goal to another user
//! ```

pub mod categories;
pub mod goals;
pub mod health;
pub mod me;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the current-user routes router.
pub fn me_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(me::show))
        .route("/goals/{goal_id}/accept", post(me::accept))
        .route("/goals/{goal_id}/achieve", post(me::achieve))
        .route("/goals/{goal_id}/challenge/{user_id}", post(me::challenge))
        .route("/goals/{goal_id}/gift/{user_id}", post(me::gift))
}

/// Create the versioned API router.
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/goals", get(goals::index))
        .route("/categories", get(categories::index))
        .route("/categories/{id}/goals", get(categories::goals))
        .nest("/me", me_routes())
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/v1", v1_routes())
}
