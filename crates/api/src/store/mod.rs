//! In-memory data store for goals, users, and categories.
//!
//! # Lifecycle
//!
//! The store is populated exactly once at startup from three JSON snapshots
//! in the data directory:
//!
//! - `goals.json` - every goal that can be accepted, challenged, or gifted
//! - `users.json` - users; the first entry is the current ("logged in") user
//! - `categories.json` - category labels
//!
//! There is no reload, and mutations are never written back: editing the
//! snapshots on disk has no effect until the process restarts.
//!
//! # Mutations
//!
//! Users' goal collections only ever grow. Every mutation looks up what it
//! needs first and returns a [`MutationError`] without touching anything if
//! a lookup misses.

mod snapshot;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use goalpost_core::{Category, CategoryId, Goal, GoalId, User, UserGoalList, UserId};

pub use snapshot::{CATEGORIES_FILE, GOALS_FILE, USERS_FILE};

/// Errors that prevent the store from loading. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A snapshot file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A snapshot file is not valid JSON or does not match the expected shape.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two goals in the goals snapshot share an ID.
    #[error("duplicate goal id {0} in goals snapshot")]
    DuplicateGoalId(GoalId),
}

/// Lookup failures reported by store mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The goal does not exist where the operation looks for it.
    #[error("goal not found")]
    GoalNotFound,

    /// The target user does not exist.
    #[error("user not found")]
    UserNotFound,

    /// The users snapshot was empty, so there is no current user.
    #[error("no current user")]
    NoCurrentUser,
}

/// The four in-memory collections plus the current-user reference.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    goals: Vec<Goal>,
    users: Vec<User>,
    categories: Vec<Category>,
}

impl DataStore {
    /// Load the store from the snapshots in `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if any snapshot is missing or malformed, or if
    /// goal IDs are not unique.
    pub fn load(dir: &Path) -> Result<Self, StoreError> {
        let goals = snapshot::read(&dir.join(GOALS_FILE))?;
        let users = snapshot::read(&dir.join(USERS_FILE))?;
        let categories = snapshot::read(&dir.join(CATEGORIES_FILE))?;

        let store = Self::from_parts(goals, users, categories)?;

        tracing::info!(
            goals = store.goals.len(),
            users = store.users.len(),
            categories = store.categories.len(),
            data_dir = %dir.display(),
            "Data store loaded"
        );

        Ok(store)
    }

    /// Build a store from already-parsed collections.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateGoalId` if two goals share an ID.
    pub fn from_parts(
        goals: Vec<Goal>,
        users: Vec<User>,
        categories: Vec<Category>,
    ) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(goals.len());
        if let Some(duplicate) = goals.iter().find(|goal| !seen.insert(goal.id)) {
            return Err(StoreError::DuplicateGoalId(duplicate.id));
        }

        Ok(Self {
            goals,
            users,
            categories,
        })
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All goals, in snapshot order.
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// All categories, in snapshot order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All users, in snapshot order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The current user: the first user in the snapshot.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.users.first()
    }

    /// Find a goal by ID.
    #[must_use]
    pub fn find_goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// Find a user by ID. The first match wins if IDs repeat.
    #[must_use]
    pub fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Goals whose `categoryId` is `id`, in snapshot order.
    #[must_use]
    pub fn goals_in_category(&self, id: CategoryId) -> Vec<Goal> {
        self.goals
            .iter()
            .filter(|goal| goal.category_id == Some(id))
            .cloned()
            .collect()
    }

    /// Goals whose `categoryId` names no loaded category.
    ///
    /// Dangling references are tolerated everywhere; this exists for reporting.
    #[must_use]
    pub fn dangling_category_refs(&self) -> Vec<(GoalId, CategoryId)> {
        let known: HashSet<CategoryId> = self.categories.iter().map(|c| c.id).collect();
        self.goals
            .iter()
            .filter_map(|goal| goal.category_id.map(|category| (goal.id, category)))
            .filter(|(_, category)| !known.contains(category))
            .collect()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a goal from the global list to the current user's accepted goals.
    ///
    /// # Errors
    ///
    /// `GoalNotFound` if no goal has `goal_id` (checked first), then
    /// `NoCurrentUser` if the users snapshot was empty.
    pub fn accept_goal(&mut self, goal_id: GoalId) -> Result<(), MutationError> {
        let goal = self
            .find_goal(goal_id)
            .cloned()
            .ok_or(MutationError::GoalNotFound)?;
        let user = self
            .users
            .first_mut()
            .ok_or(MutationError::NoCurrentUser)?;

        user.push_goal(UserGoalList::Accepted, goal);
        Ok(())
    }

    /// Append one of the current user's accepted goals to their achieved goals.
    ///
    /// The goal is looked up in the user's accepted goals, not the global list.
    ///
    /// # Errors
    ///
    /// `NoCurrentUser` if the users snapshot was empty (checked first), then
    /// `GoalNotFound` if the user has not accepted `goal_id`.
    pub fn achieve_goal(&mut self, goal_id: GoalId) -> Result<(), MutationError> {
        let user = self
            .users
            .first_mut()
            .ok_or(MutationError::NoCurrentUser)?;
        let goal = user
            .find_goal(UserGoalList::Accepted, goal_id)
            .cloned()
            .ok_or(MutationError::GoalNotFound)?;

        user.push_goal(UserGoalList::Achieved, goal);
        Ok(())
    }

    /// Append a goal to another user's challenged goals.
    ///
    /// # Errors
    ///
    /// `GoalNotFound` (checked first) or `UserNotFound`.
    pub fn challenge_user(&mut self, goal_id: GoalId, user_id: UserId) -> Result<(), MutationError> {
        self.push_to_user(goal_id, user_id, UserGoalList::Challenged)
    }

    /// Append a goal to another user's gifted goals.
    ///
    /// # Errors
    ///
    /// `GoalNotFound` (checked first) or `UserNotFound`.
    pub fn gift_goal(&mut self, goal_id: GoalId, user_id: UserId) -> Result<(), MutationError> {
        self.push_to_user(goal_id, user_id, UserGoalList::Gifted)
    }

    fn push_to_user(
        &mut self,
        goal_id: GoalId,
        user_id: UserId,
        list: UserGoalList,
    ) -> Result<(), MutationError> {
        let goal = self
            .find_goal(goal_id)
            .cloned()
            .ok_or(MutationError::GoalNotFound)?;
        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(MutationError::UserNotFound)?;

        user.push_goal(list, goal);
        Ok(())
    }
}
