//! Goal records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::{CategoryId, GoalId};

/// A trackable task or habit.
///
/// Goals are loaded once from the goals snapshot and never created, deleted,
/// or edited afterwards. Fields this type does not model are kept in `extra`
/// and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique goal ID.
    pub id: GoalId,
    /// Free text the query filter matches against.
    #[serde(default)]
    pub description: String,
    /// Category this goal belongs to. May name a category that does not exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// Number of up-votes.
    #[serde(default)]
    pub up_votes: i64,
    /// Creation timestamp, kept exactly as written in the snapshot.
    #[serde(default)]
    pub date_created: String,
    /// Any other fields present in the snapshot.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Goal {
    /// Create a goal with no extra fields.
    #[must_use]
    pub fn new(
        id: GoalId,
        description: impl Into<String>,
        category_id: Option<CategoryId>,
        up_votes: i64,
        date_created: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            category_id,
            up_votes,
            date_created: date_created.into(),
            extra: Map::new(),
        }
    }

    /// Parsed creation time, or `None` if `date_created` is not a recognized timestamp.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date_created)
    }

    /// Whether the description contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn description_contains(&self, needle: &str) -> bool {
        self.description.to_lowercase().contains(needle)
    }
}

/// Parse a snapshot timestamp.
///
/// Recognizes RFC 3339 (`2023-06-01T12:00:00Z`), a date-time without offset
/// (`2023-06-01T12:00:00`, read as UTC), and a bare date (`2023-06-01`,
/// midnight UTC).
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_camel_case_snapshot() {
        let goal: Goal = serde_json::from_value(json!({
            "id": "3",
            "description": "Run 5k",
            "categoryId": 1,
            "upVotes": 4,
            "dateCreated": "2023-01-01",
        }))
        .unwrap();

        assert_eq!(goal.id, GoalId::new(3));
        assert_eq!(goal.category_id, Some(CategoryId::new(1)));
        assert_eq!(goal.up_votes, 4);
        assert!(goal.extra.is_empty());
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let input = json!({
            "id": 1,
            "description": "Read a book",
            "categoryId": 2,
            "upVotes": 0,
            "dateCreated": "2023-06-01",
            "level": 3,
            "tags": ["quiet"],
        });
        let goal: Goal = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(goal.extra.get("level"), Some(&json!(3)));
        assert_eq!(serde_json::to_value(&goal).unwrap(), input);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let goal: Goal = serde_json::from_value(json!({ "id": 9 })).unwrap();
        assert_eq!(goal.description, "");
        assert_eq!(goal.category_id, None);
        assert_eq!(goal.up_votes, 0);
        assert!(goal.created_at().is_none());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let midnight = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2023-06-01"), Some(midnight));
        assert_eq!(parse_timestamp("2023-06-01T00:00:00"), Some(midnight));
        assert_eq!(parse_timestamp("2023-06-01 00:00:00"), Some(midnight));
        assert_eq!(parse_timestamp("2023-06-01T00:00:00Z"), Some(midnight));
        assert_eq!(parse_timestamp("2023-06-01T02:00:00+02:00"), Some(midnight));
        assert_eq!(
            parse_timestamp("2023-06-01T00:00:00.250Z").map(|dt| dt.timestamp_millis()),
            Some(midnight.timestamp_millis() + 250)
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2023-13-45").is_none());
    }

    #[test]
    fn test_description_contains_ignores_case() {
        let goal = Goal::new(GoalId::new(1), "Run 5K", None, 0, "");
        assert!(goal.description_contains("run 5k"));
        assert!(goal.description_contains("5k"));
        assert!(!goal.description_contains("walk"));
    }
}
