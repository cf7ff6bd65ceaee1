//! Goalpost Core - Shared types library.
//!
//! This crate provides the types shared by every Goalpost component:
//! - `api` - The HTTP service serving `/v1/*`
//! - `cli` - Command-line tools for checking and querying snapshots
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no locks,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the `Goal`, `Category`, and `User` records
//! - [`query`] - Substring filtering and vote/date sorting over goals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod query;
pub mod types;

pub use query::{GoalSort, filter_by_query, select_goals, sort_goals};
pub use types::*;
