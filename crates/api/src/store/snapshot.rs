//! Snapshot file loading.

use std::path::Path;

use serde::de::DeserializeOwned;

use super::StoreError;

/// Goals snapshot file name.
pub const GOALS_FILE: &str = "goals.json";
/// Users snapshot file name.
pub const USERS_FILE: &str = "users.json";
/// Categories snapshot file name.
pub const CATEGORIES_FILE: &str = "categories.json";

/// Read a snapshot holding a JSON array of `T`.
pub(super) fn read<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let bytes = std::fs::read(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
