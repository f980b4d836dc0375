//! Note record: the atomic persisted unit.

use crate::domain::NoteId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseNoteError {
    #[error("invalid note: title cannot be empty")]
    EmptyTitle,

    #[error("invalid note: content cannot be empty")]
    EmptyContent,
}

/// A short text note.
///
/// Both `title` and `content` are guaranteed non-empty for any value built
/// through [`Note::new`]. Text is stored verbatim; only the empty string is
/// rejected.
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, NoteId};
///
/// let note = Note::new(NoteId::from_i64(1), "Groceries", "milk, eggs").unwrap();
/// assert_eq!(note.title(), "Groceries");
/// assert!(Note::new(NoteId::from_i64(2), "", "x").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
}

impl Note {
    /// Creates a note, validating that title and content are non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError::EmptyTitle` or `ParseNoteError::EmptyContent`.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ParseNoteError> {
        let title = title.into();
        let content = content.into();

        if title.is_empty() {
            return Err(ParseNoteError::EmptyTitle);
        }
        if content.is_empty() {
            return Err(ParseNoteError::EmptyContent);
        }

        Ok(Self { id, title, content })
    }

    /// Re-checks the construction invariants.
    ///
    /// Deserialization bypasses [`Note::new`], so records read from storage
    /// are validated with this before being admitted.
    pub fn validate(&self) -> Result<(), ParseNoteError> {
        if self.title.is_empty() {
            return Err(ParseNoteError::EmptyTitle);
        }
        if self.content.is_empty() {
            return Err(ParseNoteError::EmptyContent);
        }
        Ok(())
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .finish()
    }
}
