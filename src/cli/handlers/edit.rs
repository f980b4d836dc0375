//! Edit command handler.

use anyhow::{Result, bail};
use std::io::Write;
use std::path::Path;

use super::{EMPTY_FIELDS, open_notebook, truncate_str};
use crate::cli::EditArgs;
use crate::infra::SlotStorage;
use crate::notebook::Notebook;

/// Seeds the editor from the note, overrides the given fields, and commits.
pub(crate) fn edit_impl<S: SlotStorage, W: Write>(
    args: &EditArgs,
    book: &mut Notebook<S>,
    out: &mut W,
) -> Result<()> {
    book.begin_edit(args.id)?;

    let editor = book.editor_mut();
    if let Some(title) = &args.title {
        editor.set_title(title.as_str());
    }
    if let Some(content) = &args.content {
        editor.set_content(content.as_str());
    }

    let commit = book.submit_draft()?;
    let Some(note) = commit.note() else {
        bail!(EMPTY_FIELDS);
    };
    writeln!(out, "Updated: {} [{}]", truncate_str(note.title(), 50), note.id())?;
    Ok(())
}

pub fn handle_edit(args: &EditArgs, data_dir: &Path, slot: &str) -> Result<()> {
    let mut book = open_notebook(data_dir, slot)?;
    edit_impl(args, &mut book, &mut std::io::stdout().lock())
}
