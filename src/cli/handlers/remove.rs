//! Remove command handler.

use anyhow::{Result, bail};
use std::io::Write;
use std::path::Path;

use super::open_notebook;
use crate::cli::RemoveArgs;
use crate::infra::SlotStorage;
use crate::notebook::Notebook;

pub(crate) fn remove_impl<S: SlotStorage, W: Write>(
    args: &RemoveArgs,
    book: &mut Notebook<S>,
    out: &mut W,
) -> Result<()> {
    if !book.delete(args.id)? {
        bail!("note not found: {}", args.id);
    }
    writeln!(out, "Deleted: {}", args.id)?;
    Ok(())
}

pub fn handle_remove(args: &RemoveArgs, data_dir: &Path, slot: &str) -> Result<()> {
    let mut book = open_notebook(data_dir, slot)?;
    remove_impl(args, &mut book, &mut std::io::stdout().lock())
}
