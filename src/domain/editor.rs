//! Editor session: the add-vs-update state machine behind the note form.

use crate::domain::{Note, NoteId};

/// Which note, if any, the session is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// No target; a commit creates a new note.
    #[default]
    Idle,
    /// Editing the note with this id; a commit updates it.
    Editing(NoteId),
}

/// What a commit will do, for labelling the submit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Add,
    Update,
}

/// Outcome of committing the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    /// Title or content was empty. Nothing changed.
    Rejected,
    /// A new note with a fresh id.
    Created(Note),
    /// The edited note with its original id and the new fields.
    Updated(Note),
}

impl Commit {
    /// Returns the produced note, if any.
    pub fn note(&self) -> Option<&Note> {
        match self {
            Commit::Rejected => None,
            Commit::Created(note) | Commit::Updated(note) => Some(note),
        }
    }
}

/// Transient form state tracking which note is being edited.
///
/// Only the target's id is held. The store may replace the record object
/// between `begin_edit` and the commit; the id is what the update matches on.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    state: EditorState,
    title: String,
    content: String,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        match self.state {
            EditorState::Idle => Mode::Add,
            EditorState::Editing(_) => Mode::Update,
        }
    }

    /// Draft title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Draft content.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Targets `note` for editing and seeds the draft from it.
    ///
    /// Any unsaved draft input is overwritten.
    pub fn begin_edit(&mut self, note: &Note) {
        self.state = EditorState::Editing(note.id());
        self.title = note.title().to_string();
        self.content = note.content().to_string();
    }

    /// Returns to add mode and clears the draft.
    pub fn cancel(&mut self) {
        self.state = EditorState::Idle;
        self.title.clear();
        self.content.clear();
    }

    /// Builds a record from `title` and `content`.
    ///
    /// In add mode the record gets a fresh id unique among `existing`. In
    /// edit mode it keeps the target's id and the session returns to add
    /// mode. Empty input is rejected without changing state.
    pub fn commit_or_create(&mut self, title: &str, content: &str, existing: &[Note]) -> Commit {
        if title.is_empty() || content.is_empty() {
            return Commit::Rejected;
        }

        match self.state {
            EditorState::Idle => match Note::new(NoteId::generate(existing), title, content) {
                Ok(note) => Commit::Created(note),
                Err(_) => Commit::Rejected,
            },
            EditorState::Editing(id) => match Note::new(id, title, content) {
                Ok(note) => {
                    self.state = EditorState::Idle;
                    Commit::Updated(note)
                }
                Err(_) => Commit::Rejected,
            },
        }
    }

    /// Commits the current draft.
    ///
    /// The draft is cleared on success and kept on rejection.
    pub fn submit(&mut self, existing: &[Note]) -> Commit {
        let title = std::mem::take(&mut self.title);
        let content = std::mem::take(&mut self.content);
        let commit = self.commit_or_create(&title, &content, existing);
        if commit == Commit::Rejected {
            self.title = title;
            self.content = content;
        }
        commit
    }
}
