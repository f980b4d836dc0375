//! Millisecond-timestamp note identifier with serde support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::Note;

/// A unique identifier for notes.
///
/// Ids are integers derived from the creation time in milliseconds since the
/// Unix epoch. They are serialized as plain JSON numbers.
///
/// # Examples
///
/// ```
/// use jot::domain::NoteId;
///
/// let id = NoteId::generate(&[]);
/// assert!(id.as_i64() > 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wraps a raw integer id.
    pub const fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Generates a fresh id that is unique among `existing`.
    pub fn generate(existing: &[Note]) -> Self {
        Self::generate_at(Utc::now(), existing)
    }

    /// Generates a fresh id from a specific instant (useful for testing).
    ///
    /// Uses the instant's millisecond timestamp unless an existing id is equal
    /// or later, in which case the id is one past the largest existing id.
    /// If the largest id is `i64::MAX`, the closest free id at or below the
    /// timestamp is taken instead.
    pub fn generate_at(now: DateTime<Utc>, existing: &[Note]) -> Self {
        let millis = now.timestamp_millis();
        let Some(max) = existing.iter().map(|n| n.id().0).max() else {
            return Self(millis);
        };
        match max.checked_add(1) {
            Some(next) => Self(millis.max(next)),
            None => Self::first_free_below(millis, existing),
        }
    }

    fn first_free_below(start: i64, existing: &[Note]) -> Self {
        let taken: HashSet<i64> = existing.iter().map(|n| n.id().0).collect();
        // `existing` is finite, so a free value always turns up.
        let free = (i64::MIN..=start)
            .rev()
            .chain(start.saturating_add(1)..=i64::MAX)
            .find(|candidate| !taken.contains(candidate))
            .unwrap_or(start);
        Self(free)
    }

    /// Returns the creation time encoded in this id, if it is a valid instant.
    pub fn timestamp(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

/// Error returned when parsing an invalid id string.
#[derive(Debug, Clone, Error)]
#[error("invalid note id '{value}': expected an integer")]
pub struct ParseNoteIdError {
    value: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(NoteId)
            .map_err(|_| ParseNoteIdError {
                value: s.to_string(),
            })
    }
}
