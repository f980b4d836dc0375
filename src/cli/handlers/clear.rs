//! Clear command handler.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::open_notebook;
use crate::cli::ClearArgs;
use crate::infra::SlotStorage;
use crate::notebook::{Confirm, Notebook};

/// Returns true for an affirmative answer (`y` or `yes`, any case).
pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Asks `prompt` on stderr and reads the answer from stdin.
///
/// End of input counts as "no".
fn ask_stdin(prompt: &str) -> Result<bool> {
    eprint!("{prompt} [y/N] ");
    io::stderr().flush().context("failed to write prompt")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    Ok(is_yes(&answer))
}

pub(crate) fn clear_impl<S: SlotStorage, W: Write>(
    book: &mut Notebook<S>,
    out: &mut W,
    confirm: &impl Confirm,
) -> Result<()> {
    let count = book.notes().len();
    if count == 0 {
        writeln!(out, "No notes to clear.")?;
        return Ok(());
    }

    if book.clear_all(confirm)? {
        writeln!(out, "Cleared {count} note(s).")?;
    } else {
        writeln!(out, "Aborted.")?;
    }
    Ok(())
}

pub fn handle_clear(args: &ClearArgs, data_dir: &Path, slot: &str) -> Result<()> {
    let mut book = open_notebook(data_dir, slot)?;
    let confirm = |prompt: &str| {
        args.yes
            || ask_stdin(prompt).unwrap_or_else(|e| {
                log::warn!("{e:#}");
                false
            })
    };
    clear_impl(&mut book, &mut io::stdout().lock(), &confirm)
}
