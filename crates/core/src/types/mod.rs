//! Core types for Goalpost.
//!
//! This module provides type-safe wrappers for the domain records loaded
//! from the goal, user, and category snapshots.

pub mod category;
pub mod goal;
pub mod id;
pub mod user;

pub use category::Category;
pub use goal::{Goal, parse_timestamp};
pub use id::*;
pub use user::{User, UserGoalList};
