//! Category records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::CategoryId;

/// A grouping label for goals.
///
/// Only `id` is interpreted; every descriptive field is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Descriptive fields (name, icon, ...), as written in the snapshot.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
