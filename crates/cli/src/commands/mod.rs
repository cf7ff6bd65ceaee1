//! CLI command implementations.

pub mod check;
pub mod goals;

use goalpost_api::store::StoreError;
use thiserror::Error;

/// Errors that end a CLI command with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Unknown sort key {0:?} (expected upVotes or dateCreated)")]
    UnknownSort(String),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
