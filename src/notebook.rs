//! Notebook: the current note snapshot bound to its storage slot.
//!
//! Store operations are pure; the notebook holds the snapshot, rebinds it
//! after each operation, and writes the full sequence back to the slot before
//! returning.

use log::info;
use thiserror::Error;

use crate::domain::{Commit, EditorSession, Note, NoteId, store};
use crate::infra::{SlotStorage, StorageError, load, persist};

/// Errors from notebook operations.
#[derive(Debug, Error)]
pub enum NotebookError {
    #[error("note not found: {0}")]
    NotFound(NoteId),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Prompt shown before clearing every note.
pub const CLEAR_PROMPT: &str = "Are you sure you want to delete all notes?";

/// Owner of the canonical note list for one storage slot.
pub struct Notebook<S: SlotStorage> {
    storage: S,
    slot: String,
    notes: Vec<Note>,
    editor: EditorSession,
}

impl<S: SlotStorage> Notebook<S> {
    /// Opens the notebook, restoring notes from `slot`.
    pub fn open(storage: S, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let notes = load(&storage, &slot);
        Self {
            storage,
            slot,
            notes,
            editor: EditorSession::new(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        store::find(&self.notes, id)
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn editor(&self) -> &EditorSession {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorSession {
        &mut self.editor
    }

    /// Targets the note with `id` for editing and seeds the editor draft.
    pub fn begin_edit(&mut self, id: NoteId) -> Result<&Note, NotebookError> {
        let note = store::find(&self.notes, id).ok_or(NotebookError::NotFound(id))?;
        self.editor.begin_edit(note);
        Ok(note)
    }

    /// Commits `title` and `content` through the editor session.
    ///
    /// Created notes are appended and updated notes merged by id; either
    /// change is persisted. A rejected commit leaves everything untouched.
    pub fn submit(&mut self, title: &str, content: &str) -> Result<Commit, NotebookError> {
        let commit = self.editor.commit_or_create(title, content, &self.notes);
        self.apply(&commit)?;
        Ok(commit)
    }

    /// Commits the editor's current draft.
    ///
    /// The draft is cleared on success and kept on rejection.
    pub fn submit_draft(&mut self) -> Result<Commit, NotebookError> {
        let commit = self.editor.submit(&self.notes);
        self.apply(&commit)?;
        Ok(commit)
    }

    fn apply(&mut self, commit: &Commit) -> Result<(), NotebookError> {
        match commit {
            Commit::Rejected => return Ok(()),
            Commit::Created(note) => {
                info!("created note {}", note.id());
                self.notes = store::add(&self.notes, note.clone());
            }
            Commit::Updated(note) => {
                info!("updated note {}", note.id());
                self.notes = store::update(&self.notes, note.clone());
            }
        }
        self.save()
    }

    /// Deletes the note with `id`. Returns whether a note was removed.
    ///
    /// The slot is only rewritten when something was removed.
    pub fn delete(&mut self, id: NoteId) -> Result<bool, NotebookError> {
        if store::find(&self.notes, id).is_none() {
            return Ok(false);
        }
        self.notes = store::remove(&self.notes, id);
        info!("deleted note {id}");
        self.save()?;
        Ok(true)
    }

    /// Deletes every note once `confirm` agrees.
    ///
    /// Returns `false` and leaves the store untouched if declined.
    pub fn clear_all(&mut self, confirm: &impl Confirm) -> Result<bool, NotebookError> {
        if !confirm.confirm(CLEAR_PROMPT) {
            return Ok(false);
        }
        self.notes = store::clear();
        info!("cleared all notes in slot '{}'", self.slot);
        self.save()?;
        Ok(true)
    }

    fn save(&mut self) -> Result<(), NotebookError> {
        persist(&mut self.storage, &self.slot, &self.notes)?;
        Ok(())
    }
}
