//! Newtype IDs for type-safe entity references.
//!
//! Snapshot files mix `1` and `"1"` for the same id, and path parameters
//! always arrive as text. Every ID is normalized to an `i64` at ingestion so
//! lookups compare a single canonical form.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use serde::{Deserialize, Deserializer};

/// Errors that can occur when parsing an ID from text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input string is empty or only whitespace.
    #[error("id cannot be empty")]
    Empty,
    /// The input is not an integer.
    #[error("id must be an integer (got '{0}')")]
    NotInteger(String),
}

/// Parse the textual form of an ID.
///
/// Surrounding whitespace is ignored, and integral float spellings such as
/// `"2.0"` or `"1e1"` are accepted.
///
/// # Errors
///
/// Returns an error if the input is empty or does not denote an integer.
pub fn parse_id(s: &str) -> Result<i64, IdError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(IdError::Empty);
    }

    if let Ok(id) = trimmed.parse::<i64>() {
        return Ok(id);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .and_then(integral)
        .ok_or_else(|| IdError::NotInteger(s.to_string()))
}

/// Narrow a float to `i64` when it holds an exact integer in range.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn integral(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

/// Any JSON spelling of an ID found in a snapshot.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Deserialize an ID written either as a JSON number or as numeric text.
///
/// Used by `define_id!`; not meant to be called directly.
///
/// # Errors
///
/// Returns a deserialization error if the value is not an integer.
#[doc(hidden)]
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Int(id) => Ok(id),
        RawId::Float(value) => integral(value)
            .ok_or_else(|| serde::de::Error::custom(IdError::NotInteger(value.to_string()))),
        RawId::Text(text) => parse_id(&text).map_err(serde::de::Error::custom),
    }
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize` with `#[serde(transparent)]` (always written as a number)
/// - `Deserialize` accepting a JSON number or numeric string
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Ord`
/// - Conversion methods: `new()`, `as_i64()`, `parse()`
/// - `From<i64>`, `Into<i64>`, and `FromStr` implementations
///
/// # Example
///
/// ```rust
/// # use goalpost_core::define_id;
/// define_id!(BadgeId);
/// define_id!(TeamId);
///
/// let badge_id = BadgeId::new(1);
/// let team_id: TeamId = " 1 ".parse().unwrap();
///
/// assert_eq!(badge_id.as_i64(), team_id.as_i64());
/// // These are different types, so this won't compile:
/// // let _: BadgeId = team_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }

            /// Parse an ID from its textual form (e.g. a path parameter).
            ///
            /// # Errors
            ///
            /// Returns an error if the text does not denote an integer.
            pub fn parse(s: &str) -> ::core::result::Result<Self, $crate::types::id::IdError> {
                $crate::types::id::parse_id(s).map(Self)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::id::IdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::types::id::deserialize_id(deserializer).map(Self)
            }
        }
    };
}

// Define standard entity IDs
define_id!(GoalId);
define_id!(UserId);
define_id!(CategoryId);
