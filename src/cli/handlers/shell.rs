//! Interactive shell: a long-lived editor session over one notebook.
//!
//! Each input line is one command. The prompt shows the editor mode so it is
//! always clear whether `save` will add or update.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::clear::is_yes;
use super::{EMPTY_FIELDS, open_notebook, truncate_str};
use crate::cli::output::{render_list, render_note};
use crate::domain::{Commit, EditorState, Mode, NoteId};
use crate::infra::SlotStorage;
use crate::notebook::{CLEAR_PROMPT, Notebook};

const HELP: &str = "\
Commands:
  ls                 list notes
  show <id>          show one note
  new                start a new note (discards the draft)
  edit <id>          edit a note; the draft is filled from it
  title <text>       set the draft title
  content <text>     set the draft content
  draft              show the draft and mode
  save               add or update from the draft
  rm <id>            delete a note
  clear              delete all notes (asks first)
  help               show this help
  quit               leave the shell";

fn prompt(mode: Mode) -> &'static str {
    match mode {
        Mode::Add => "add> ",
        Mode::Update => "edit> ",
    }
}

fn parse_id<W: Write>(arg: &str, out: &mut W) -> io::Result<Option<NoteId>> {
    match arg.parse::<NoteId>() {
        Ok(id) => Ok(Some(id)),
        Err(e) => {
            writeln!(out, "{e}")?;
            Ok(None)
        }
    }
}

/// Runs the shell until `quit` or end of input.
pub(crate) fn run_shell<S: SlotStorage, R: BufRead, W: Write>(
    book: &mut Notebook<S>,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let mut line = String::new();

    loop {
        write!(out, "{}", prompt(book.editor().mode()))?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        let (command, arg) = match trimmed.trim_start().split_once(' ') {
            Some((command, arg)) => (command, arg),
            None => (trimmed.trim(), ""),
        };

        match command {
            "" => {}
            "quit" | "exit" => return Ok(()),
            "help" => writeln!(out, "{HELP}")?,
            "ls" => render_list(out, book.notes())?,
            "show" => {
                if let Some(id) = parse_id(arg, out)? {
                    match book.get(id) {
                        Some(note) => render_note(out, note)?,
                        None => writeln!(out, "note not found: {id}")?,
                    }
                }
            }
            "new" => {
                book.editor_mut().cancel();
                writeln!(out, "New note. Set a title and content, then save.")?;
            }
            "edit" => {
                if let Some(id) = parse_id(arg, out)? {
                    match book.begin_edit(id) {
                        Ok(note) => writeln!(out, "Editing: {note}")?,
                        Err(e) => writeln!(out, "{e}")?,
                    }
                }
            }
            "title" => book.editor_mut().set_title(arg),
            "content" => book.editor_mut().set_content(arg),
            "draft" => {
                let editor = book.editor();
                match editor.state() {
                    EditorState::Idle => writeln!(out, "Mode: add")?,
                    EditorState::Editing(id) => writeln!(out, "Mode: edit {id}")?,
                }
                writeln!(out, "Title: {}", editor.title())?;
                writeln!(out, "Content: {}", editor.content())?;
            }
            "save" => match book.submit_draft()? {
                Commit::Created(note) => {
                    writeln!(out, "Added: {} [{}]", truncate_str(note.title(), 50), note.id())?
                }
                Commit::Updated(note) => {
                    writeln!(out, "Updated: {} [{}]", truncate_str(note.title(), 50), note.id())?
                }
                Commit::Rejected => writeln!(out, "{EMPTY_FIELDS}")?,
            },
            "rm" => {
                if let Some(id) = parse_id(arg, out)? {
                    if book.delete(id)? {
                        writeln!(out, "Deleted: {id}")?;
                    } else {
                        writeln!(out, "note not found: {id}")?;
                    }
                }
            }
            "clear" => {
                if book.notes().is_empty() {
                    writeln!(out, "No notes to clear.")?;
                    continue;
                }
                write!(out, "{CLEAR_PROMPT} [y/N] ")?;
                out.flush()?;
                let mut answer = String::new();
                input
                    .read_line(&mut answer)
                    .context("failed to read confirmation")?;
                if book.clear_all(&|_: &str| is_yes(&answer))? {
                    writeln!(out, "Cleared.")?;
                } else {
                    writeln!(out, "Aborted.")?;
                }
            }
            other => writeln!(out, "unknown command '{other}'; type 'help'")?,
        }
    }
}

pub fn handle_shell(data_dir: &Path, slot: &str) -> Result<()> {
    let mut book = open_notebook(data_dir, slot)?;
    let stdin = io::stdin();
    run_shell(&mut book, stdin.lock(), &mut io::stdout().lock())
}
