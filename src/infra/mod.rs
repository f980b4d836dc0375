//! Slot storage and note persistence

mod storage;

pub use storage::{
    DEFAULT_SLOT, FileSlots, MemorySlots, SlotStorage, StorageError, load, persist,
    validate_slot_name,
};
