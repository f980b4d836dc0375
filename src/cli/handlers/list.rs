//! List and Show command handlers.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use super::open_notebook;
use crate::cli::output::{OutputFormat, render_json, render_list, render_note};
use crate::cli::{ListArgs, ShowArgs};
use crate::infra::SlotStorage;
use crate::notebook::{Notebook, NotebookError};

pub(crate) fn list_impl<S: SlotStorage, W: Write>(
    args: &ListArgs,
    book: &Notebook<S>,
    out: &mut W,
) -> Result<()> {
    match args.format {
        OutputFormat::Human => render_list(out, book.notes())?,
        OutputFormat::Json => render_json(out, book.notes())?,
    }
    Ok(())
}

pub(crate) fn show_impl<S: SlotStorage, W: Write>(
    args: &ShowArgs,
    book: &Notebook<S>,
    out: &mut W,
) -> Result<()> {
    let note = book.get(args.id).ok_or(NotebookError::NotFound(args.id))?;
    match args.format {
        OutputFormat::Human => render_note(out, note)?,
        OutputFormat::Json => render_json(out, note)?,
    }
    Ok(())
}

pub fn handle_list(args: &ListArgs, data_dir: &Path, slot: &str) -> Result<()> {
    let book = open_notebook(data_dir, slot)?;
    list_impl(args, &book, &mut std::io::stdout().lock())
}

pub fn handle_show(args: &ShowArgs, data_dir: &Path, slot: &str) -> Result<()> {
    let book = open_notebook(data_dir, slot)?;
    show_impl(args, &book, &mut std::io::stdout().lock())
}
