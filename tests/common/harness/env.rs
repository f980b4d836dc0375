//! Isolated test environment with temp directory.

// Not every test crate uses every helper
#![allow(dead_code)]

use super::JotCommand;
use jot::domain::{Note, NoteId};
use jot::infra::{FileSlots, load, persist};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// The directory is removed when the TestEnv is dropped.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the data directory
    data_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty data directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the file backing `slot`.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.data_dir.join(format!("{slot}.json"))
    }

    /// Writes `notes` to the default slot.
    pub fn seed(&self, notes: &[Note]) {
        self.seed_slot("notes", notes);
    }

    /// Writes `notes` to `slot`.
    pub fn seed_slot(&self, slot: &str, notes: &[Note]) {
        let mut slots = FileSlots::new(&self.data_dir);
        persist(&mut slots, slot, notes).expect("Failed to seed slot");
    }

    /// Writes raw text to the default slot file.
    pub fn write_raw(&self, contents: &str) {
        std::fs::write(self.slot_path("notes"), contents).expect("Failed to write slot");
    }

    /// Reads the notes currently stored in the default slot.
    pub fn notes(&self) -> Vec<Note> {
        self.notes_in("notes")
    }

    /// Reads the notes currently stored in `slot`.
    pub fn notes_in(&self, slot: &str) -> Vec<Note> {
        load(&FileSlots::new(&self.data_dir), slot)
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new().dir(&self.data_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a note with a fixed id.
pub fn note(id: i64, title: &str, content: &str) -> Note {
    Note::new(NoteId::from_i64(id), title, content).expect("Invalid test note")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.data_dir().is_dir(), "data directory should exist");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.data_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_seed_roundtrips() {
        let env = TestEnv::new();
        let notes = vec![note(1, "A", "x"), note(2, "B", "y")];
        env.seed(&notes);
        assert!(env.slot_path("notes").exists());
        assert_eq!(env.notes(), notes);
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.data_dir().to_string_lossy());
    }
}
