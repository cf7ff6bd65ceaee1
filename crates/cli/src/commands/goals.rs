//! Offline goal listing.

use std::path::Path;

use goalpost_api::{response::Envelope, store::DataStore};
use goalpost_core::{GoalSort, select_goals};

use super::CommandError;

/// Render the `/v1/goals` envelope for `query` and `sort` over the snapshots in `dir`.
///
/// Unlike the HTTP route, an unknown sort key is an error here.
///
/// # Errors
///
/// Returns an error if the snapshots fail to load or `sort` is not a known key.
pub fn render(dir: &Path, query: Option<&str>, sort: Option<&str>) -> Result<String, CommandError> {
    let sort = sort
        .map(|key| GoalSort::parse(key).ok_or_else(|| CommandError::UnknownSort(key.to_string())))
        .transpose()?;

    let store = DataStore::load(dir)?;
    let goals = select_goals(store.goals(), query, sort);

    Ok(serde_json::to_string_pretty(&Envelope::ok(goals))?)
}

/// Run `goalpost-cli goals`, writing the envelope to stdout.
///
/// # Errors
///
/// Returns an error if the snapshots fail to load or `sort` is not a known key.
#[allow(clippy::print_stdout)]
pub fn run(dir: &Path, query: Option<&str>, sort: Option<&str>) -> Result<(), CommandError> {
    println!("{}", render(dir, query, sort)?);
    Ok(())
}
