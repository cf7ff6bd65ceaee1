//! Snapshot validation.
//!
//! Loads the data directory exactly as the API does at startup. A load
//! failure fails the command; dangling category references only warn, since
//! the API serves them unchanged.

use std::path::Path;

use goalpost_api::store::DataStore;
use goalpost_core::{CategoryId, GoalId};

use super::CommandError;

/// What `check` found in a loadable data directory.
#[derive(Debug)]
pub struct CheckReport {
    pub goals: usize,
    pub users: usize,
    pub categories: usize,
    pub dangling: Vec<(GoalId, CategoryId)>,
}

/// Load the snapshots in `dir` and summarize them.
///
/// # Errors
///
/// Returns `CommandError::Store` if any snapshot is missing or malformed.
pub fn inspect(dir: &Path) -> Result<CheckReport, CommandError> {
    let store = DataStore::load(dir)?;

    Ok(CheckReport {
        goals: store.goals().len(),
        users: store.users().len(),
        categories: store.categories().len(),
        dangling: store.dangling_category_refs(),
    })
}

/// Run `goalpost-cli check`.
///
/// # Errors
///
/// Returns `CommandError::Store` if any snapshot is missing or malformed.
pub fn run(dir: &Path) -> Result<(), CommandError> {
    let report = inspect(dir)?;

    for (goal, category) in &report.dangling {
        tracing::warn!(%goal, %category, "Goal references a category that does not exist");
    }

    if report.users == 0 {
        tracing::warn!("users.json is empty; /v1/me will report no current user");
    }

    tracing::info!(
        goals = report.goals,
        users = report.users,
        categories = report.categories,
        dangling = report.dangling.len(),
        "Snapshots OK"
    );
    Ok(())
}
