//! Named storage slots and note persistence.
//!
//! A slot is a single key holding a JSON-encoded array of notes. The file
//! backend keeps each slot as `<dir>/<slot>.json` and replaces it atomically.

use crate::domain::Note;
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::io::{self, Write as IoWrite};
use std::path::PathBuf;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Default slot name.
pub const DEFAULT_SLOT: &str = "notes";

/// Errors while reading or writing a storage slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid slot name '{name}': must be non-empty and contain no path separators")]
    InvalidSlotName { name: String },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode notes: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A key-value store of string slots.
pub trait SlotStorage {
    /// Reads the raw value of `slot`, or `None` if it has never been written.
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value of `slot`.
    fn write_slot(&mut self, slot: &str, value: &str) -> Result<(), StorageError>;
}

/// Checks that a slot name is usable as a file stem.
pub fn validate_slot_name(name: &str) -> Result<(), StorageError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.contains('\0');
    if invalid {
        return Err(StorageError::InvalidSlotName { name: name.into() });
    }
    Ok(())
}

/// Slots stored as JSON files in a directory.
#[derive(Debug, Clone)]
pub struct FileSlots {
    dir: PathBuf,
}

impl FileSlots {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the file backing `slot`.
    pub fn slot_path(&self, slot: &str) -> Result<PathBuf, StorageError> {
        validate_slot_name(slot)?;
        Ok(self.dir.join(format!("{slot}.json")))
    }
}

impl SlotStorage for FileSlots {
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(slot)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io { path, source: e }),
        }
    }

    fn write_slot(&mut self, slot: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(slot)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::Io {
            path: self.dir.clone(),
            source: e,
        })?;

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|e| StorageError::Io {
            path: path.clone(),
            source: e,
        })?;

        temp.write_all(value.as_bytes())
            .map_err(|e| StorageError::Io {
                path: path.clone(),
                source: e,
            })?;

        temp.persist(&path).map_err(|e| StorageError::AtomicWrite {
            path: path.clone(),
            source: e.error,
        })?;

        Ok(())
    }
}

/// Slots held in memory. Nothing survives the value.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    slots: HashMap<String, String>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage with `slot` pre-populated with a raw value.
    pub fn with_slot(slot: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(slot.into(), value.into());
        Self { slots }
    }
}

impl SlotStorage for MemorySlots {
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StorageError> {
        validate_slot_name(slot)?;
        Ok(self.slots.get(slot).cloned())
    }

    fn write_slot(&mut self, slot: &str, value: &str) -> Result<(), StorageError> {
        validate_slot_name(slot)?;
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}

/// Restores the note sequence from `slot`.
///
/// Never fails. A missing, unreadable or malformed slot yields an empty
/// sequence. Records with empty fields or a repeated id are dropped.
pub fn load<S: SlotStorage + ?Sized>(storage: &S, slot: &str) -> Vec<Note> {
    let raw = match storage.read_slot(slot) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("slot '{slot}' is empty; starting with no notes");
            return Vec::new();
        }
        Err(e) => {
            warn!("failed to read slot '{slot}': {e}; starting with no notes");
            return Vec::new();
        }
    };

    let parsed: Option<Vec<Note>> = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("slot '{slot}' holds malformed data ({e}); starting with no notes");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let notes: Vec<Note> = parsed
        .unwrap_or_default()
        .into_iter()
        .filter(|note| {
            if let Err(e) = note.validate() {
                warn!("dropping note {} from slot '{slot}': {e}", note.id());
                return false;
            }
            if !seen.insert(note.id()) {
                warn!("dropping note {} from slot '{slot}': duplicate id", note.id());
                return false;
            }
            true
        })
        .collect();

    debug!("loaded {} note(s) from slot '{slot}'", notes.len());
    notes
}

/// Writes the full note sequence to `slot`, replacing prior state.
pub fn persist<S: SlotStorage + ?Sized>(
    storage: &mut S,
    slot: &str,
    notes: &[Note],
) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(notes)?;
    storage.write_slot(slot, &encoded)?;
    debug!("persisted {} note(s) to slot '{slot}'", notes.len());
    Ok(())
}
