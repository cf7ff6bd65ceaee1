//! Goal query engine.
//!
//! Pure functions over a goal list: a case-insensitive substring filter on
//! `description` and stable descending sorts by vote count or creation date.
//! Nothing here mutates its input list in place except [`sort_goals`].

use std::cmp::Reverse;

use crate::types::Goal;

/// Sort key accepted by the `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalSort {
    /// Most up-voted first.
    UpVotes,
    /// Newest first; goals with unparsable dates last.
    DateCreated,
}

impl GoalSort {
    /// Parse a sort key. Unknown keys return `None`, which callers treat as
    /// "leave the order alone".
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "upVotes" => Some(Self::UpVotes),
            "dateCreated" => Some(Self::DateCreated),
            _ => None,
        }
    }

    /// The query-string spelling of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpVotes => "upVotes",
            Self::DateCreated => "dateCreated",
        }
    }
}

/// Goals whose description contains `query`, ignoring case, in their original order.
#[must_use]
pub fn filter_by_query(query: &str, goals: &[Goal]) -> Vec<Goal> {
    let needle = query.to_lowercase();
    goals
        .iter()
        .filter(|goal| goal.description_contains(&needle))
        .cloned()
        .collect()
}

/// Sort goals in place, descending by `sort`.
///
/// Both sorts are stable: goals with equal keys keep their relative order.
pub fn sort_goals(goals: &mut [Goal], sort: GoalSort) {
    match sort {
        GoalSort::UpVotes => goals.sort_by_key(|goal| Reverse(goal.up_votes)),
        // `None < Some(_)`, so reversing puts unparsable dates after every valid one.
        GoalSort::DateCreated => goals.sort_by_cached_key(|goal| Reverse(goal.created_at())),
    }
}

/// Filter, then sort, a copy of `goals`.
///
/// An empty `query` does not filter. The sort runs on the filtered result.
#[must_use]
pub fn select_goals(goals: &[Goal], query: Option<&str>, sort: Option<GoalSort>) -> Vec<Goal> {
    let mut selected = match query.filter(|q| !q.is_empty()) {
        Some(q) => filter_by_query(q, goals),
        None => goals.to_vec(),
    };

    if let Some(sort) = sort {
        sort_goals(&mut selected, sort);
    }

    selected
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::{CategoryId, GoalId};

    fn goal(id: i64, description: &str, up_votes: i64, date_created: &str) -> Goal {
        Goal::new(
            GoalId::new(id),
            description,
            Some(CategoryId::new(1)),
            up_votes,
            date_created,
        )
    }

    fn ids(goals: &[Goal]) -> Vec<i64> {
        goals.iter().map(|goal| goal.id.as_i64()).collect()
    }

    /// The two-goal fixture used throughout the API docs.
    fn run_and_read() -> Vec<Goal> {
        vec![
            goal(1, "Run 5k", 3, "2023-01-01"),
            Goal::new(
                GoalId::new(2),
                "Read a book",
                Some(CategoryId::new(2)),
                7,
                "2023-06-01",
            ),
        ]
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!(GoalSort::parse("upVotes"), Some(GoalSort::UpVotes));
        assert_eq!(GoalSort::parse("dateCreated"), Some(GoalSort::DateCreated));
        assert_eq!(GoalSort::parse("upvotes"), None);
        assert_eq!(GoalSort::parse(""), None);
        assert_eq!(GoalSort::parse(GoalSort::UpVotes.as_str()), Some(GoalSort::UpVotes));
    }

    #[test]
    fn test_sort_by_up_votes_scenario() {
        let mut goals = run_and_read();
        sort_goals(&mut goals, GoalSort::UpVotes);
        assert_eq!(ids(&goals), vec![2, 1]);
    }

    #[test]
    fn test_filter_run_scenario() {
        let goals = filter_by_query("run", &run_and_read());
        assert_eq!(ids(&goals), vec![1]);
    }

    #[test]
    fn test_filter_keeps_exactly_the_matches() {
        let goals = vec![
            goal(1, "Morning RUN", 0, ""),
            goal(2, "Swim", 0, ""),
            goal(3, "brunch with friends", 0, ""),
            goal(4, "Walk", 0, ""),
        ];
        let kept = filter_by_query("Run", &goals);
        assert_eq!(ids(&kept), vec![1, 3]);

        for g in &goals {
            let matches = g.description.to_lowercase().contains("run");
            assert_eq!(matches, kept.contains(g));
        }
    }

    #[test]
    fn test_filter_handles_non_ascii_case() {
        let goals = vec![goal(1, "ÉCRIRE un poème", 0, ""), goal(2, "Lire", 0, "")];
        assert_eq!(ids(&filter_by_query("écrire", &goals)), vec![1]);
    }

    #[test]
    fn test_up_votes_sort_is_stable_and_non_increasing() {
        let mut goals = vec![
            goal(1, "a", 2, ""),
            goal(2, "b", 5, ""),
            goal(3, "c", 2, ""),
            goal(4, "d", 5, ""),
            goal(5, "e", -1, ""),
        ];
        sort_goals(&mut goals, GoalSort::UpVotes);

        assert_eq!(ids(&goals), vec![2, 4, 1, 3, 5]);
        assert!(goals.windows(2).all(|w| w[0].up_votes >= w[1].up_votes));
    }

    #[test]
    fn test_date_sort_newest_first_with_bad_dates_last() {
        let mut goals = vec![
            goal(1, "a", 0, "not a date"),
            goal(2, "b", 0, "2023-01-01"),
            goal(3, "c", 0, "2024-02-10T08:30:00Z"),
            goal(4, "d", 0, ""),
            goal(5, "e", 0, "2023-06-01"),
            goal(6, "f", 0, "2023-01-01T00:00:00"),
        ];
        sort_goals(&mut goals, GoalSort::DateCreated);

        // 2 and 6 are the same instant; 1 and 4 are both unparsable.
        assert_eq!(ids(&goals), vec![3, 5, 2, 6, 1, 4]);
        assert!(
            goals
                .windows(2)
                .all(|w| w[0].created_at() >= w[1].created_at())
        );
    }

    #[test]
    fn test_select_filters_before_sorting() {
        let goals = vec![
            goal(1, "Run 5k", 3, ""),
            goal(2, "Read a book", 7, ""),
            goal(3, "Run a marathon", 9, ""),
        ];
        let selected = select_goals(&goals, Some("run"), Some(GoalSort::UpVotes));
        assert_eq!(ids(&selected), vec![3, 1]);
    }

    #[test]
    fn test_select_without_parameters_is_identity() {
        let goals = run_and_read();
        assert_eq!(select_goals(&goals, None, None), goals);
        assert_eq!(select_goals(&goals, Some(""), None), goals);
    }

    #[test]
    fn test_select_does_not_reorder_source() {
        let goals = run_and_read();
        let _ = select_goals(&goals, None, Some(GoalSort::UpVotes));
        assert_eq!(ids(&goals), vec![1, 2]);
    }

    #[test]
    fn test_filter_with_no_matches_is_empty() {
        assert!(filter_by_query("swim", &run_and_read()).is_empty());
    }
}
