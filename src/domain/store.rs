//! Pure transforms over a note snapshot.
//!
//! Every operation takes the current sequence by reference and returns a new
//! sequence. Holding and rebinding the current snapshot is the caller's job
//! (see [`crate::notebook::Notebook`]).

use crate::domain::{Note, NoteId};

/// Returns `notes` with `new_note` appended.
///
/// The caller supplies a freshly assigned id that is not already present.
pub fn add(notes: &[Note], new_note: Note) -> Vec<Note> {
    debug_assert!(find(notes, new_note.id()).is_none(), "duplicate note id");
    let mut next = Vec::with_capacity(notes.len() + 1);
    next.extend_from_slice(notes);
    next.push(new_note);
    next
}

/// Returns `notes` with the element sharing `updated`'s id replaced.
///
/// Order is preserved. If no element matches, the result equals the input.
pub fn update(notes: &[Note], updated: Note) -> Vec<Note> {
    notes
        .iter()
        .map(|n| {
            if n.id() == updated.id() {
                updated.clone()
            } else {
                n.clone()
            }
        })
        .collect()
}

/// Returns `notes` without the element whose id is `id`.
pub fn remove(notes: &[Note], id: NoteId) -> Vec<Note> {
    notes.iter().filter(|n| n.id() != id).cloned().collect()
}

/// Returns an empty sequence.
pub fn clear() -> Vec<Note> {
    Vec::new()
}

/// Finds the note with the given id.
pub fn find(notes: &[Note], id: NoteId) -> Option<&Note> {
    notes.iter().find(|n| n.id() == id)
}
