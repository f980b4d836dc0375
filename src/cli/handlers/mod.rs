//! Command handlers for the CLI.
//!
//! Each handler opens the notebook for the resolved data directory and slot,
//! then delegates to a generic `*_impl` function that works on any storage
//! and writer so it can be exercised in tests.

mod add;
mod clear;
mod edit;
mod list;
mod remove;
mod shell;


use std::path::Path;

use crate::infra::{FileSlots, validate_slot_name};
use crate::notebook::Notebook;

pub use add::handle_add;
pub use clear::handle_clear;
pub use edit::handle_edit;
pub use list::{handle_list, handle_show};
pub use remove::handle_remove;
pub use shell::handle_shell;

// Re-export for tests
#[cfg(test)]
pub(crate) use add::add_impl;
#[cfg(test)]
pub(crate) use clear::{clear_impl, is_yes};
#[cfg(test)]
pub(crate) use edit::edit_impl;
#[cfg(test)]
pub(crate) use list::{list_impl, show_impl};
#[cfg(test)]
pub(crate) use remove::remove_impl;
#[cfg(test)]
pub(crate) use shell::run_shell;

// ===========================================
// Shared Utilities
// ===========================================

/// Message reported when a commit is rejected for empty input.
pub(crate) const EMPTY_FIELDS: &str = "title and content must not be empty";

/// Opens the notebook stored in `slot` under `data_dir`.
pub(crate) fn open_notebook(data_dir: &Path, slot: &str) -> anyhow::Result<Notebook<FileSlots>> {
    validate_slot_name(slot)?;
    Ok(Notebook::open(FileSlots::new(data_dir), slot))
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
