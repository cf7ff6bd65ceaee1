//! User records and their goal collections.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::goal::Goal;
use super::id::{GoalId, UserId};

/// One of the four per-user goal collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserGoalList {
    /// Goals the user has taken on.
    Accepted,
    /// Accepted goals the user has completed.
    Achieved,
    /// Goals another user challenged this user with.
    Challenged,
    /// Goals another user gifted to this user.
    Gifted,
}

impl UserGoalList {
    /// JSON field name of this collection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "acceptedGoals",
            Self::Achieved => "achievedGoals",
            Self::Challenged => "challengedGoals",
            Self::Gifted => "giftedGoals",
        }
    }
}

/// A user and the goals attached to them.
///
/// Goal collections are ordered, allow duplicates, and only ever grow.
/// Profile fields this type does not model are kept in `profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    #[serde(default)]
    pub accepted_goals: Vec<Goal>,
    #[serde(default)]
    pub achieved_goals: Vec<Goal>,
    #[serde(default)]
    pub challenged_goals: Vec<Goal>,
    #[serde(default)]
    pub gifted_goals: Vec<Goal>,
    /// Any other fields present in the snapshot (name, avatar, ...).
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl User {
    /// Create a user with empty goal collections and no profile fields.
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            accepted_goals: Vec::new(),
            achieved_goals: Vec::new(),
            challenged_goals: Vec::new(),
            gifted_goals: Vec::new(),
            profile: Map::new(),
        }
    }

    /// Borrow one of the goal collections.
    #[must_use]
    pub fn goals(&self, list: UserGoalList) -> &[Goal] {
        match list {
            UserGoalList::Accepted => &self.accepted_goals,
            UserGoalList::Achieved => &self.achieved_goals,
            UserGoalList::Challenged => &self.challenged_goals,
            UserGoalList::Gifted => &self.gifted_goals,
        }
    }

    /// Append a goal to one of the collections. Duplicates are allowed.
    pub fn push_goal(&mut self, list: UserGoalList, goal: Goal) {
        let goals = match list {
            UserGoalList::Accepted => &mut self.accepted_goals,
            UserGoalList::Achieved => &mut self.achieved_goals,
            UserGoalList::Challenged => &mut self.challenged_goals,
            UserGoalList::Gifted => &mut self.gifted_goals,
        };
        goals.push(goal);
    }

    /// First goal with `id` in one of the collections.
    #[must_use]
    pub fn find_goal(&self, list: UserGoalList, id: GoalId) -> Option<&Goal> {
        self.goals(list).iter().find(|goal| goal.id == id)
    }
}
