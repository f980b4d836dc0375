//! Add command handler.

use anyhow::{Result, bail};
use std::io::Write;
use std::path::Path;

use super::{EMPTY_FIELDS, open_notebook, truncate_str};
use crate::cli::AddArgs;
use crate::infra::SlotStorage;
use crate::notebook::Notebook;

pub(crate) fn add_impl<S: SlotStorage, W: Write>(
    args: &AddArgs,
    book: &mut Notebook<S>,
    out: &mut W,
) -> Result<()> {
    let commit = book.submit(&args.title, &args.content)?;
    let Some(note) = commit.note() else {
        bail!(EMPTY_FIELDS);
    };
    writeln!(out, "Added: {} [{}]", truncate_str(note.title(), 50), note.id())?;
    Ok(())
}

pub fn handle_add(args: &AddArgs, data_dir: &Path, slot: &str) -> Result<()> {
    let mut book = open_notebook(data_dir, slot)?;
    add_impl(args, &mut book, &mut std::io::stdout().lock())
}
