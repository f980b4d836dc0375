//! Core types: Note, NoteId, store transforms, editor session

mod editor;
mod note;
mod note_id;
pub mod store;

pub use editor::{Commit, EditorSession, EditorState, Mode};
pub use note::{Note, ParseNoteError};
pub use note_id::{NoteId, ParseNoteIdError};
