//! Output format types and note rendering for CLI commands.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

use crate::domain::Note;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Message shown for an empty store.
pub const NO_NOTES: &str = "No notes yet! Add something with `jot add`.";

/// Writes every note as a title line followed by indented content.
pub fn render_list<W: Write>(out: &mut W, notes: &[Note]) -> io::Result<()> {
    if notes.is_empty() {
        return writeln!(out, "{NO_NOTES}");
    }

    for note in notes {
        writeln!(out, "[{}] {}", note.id(), note.title())?;
        for line in note.content().lines() {
            writeln!(out, "    {line}")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "{} note(s)", notes.len())
}

/// Writes a single note with its creation time.
pub fn render_note<W: Write>(out: &mut W, note: &Note) -> io::Result<()> {
    writeln!(out, "# {}", note.title())?;
    writeln!(out)?;
    writeln!(out, "{}", note.content())?;
    writeln!(out)?;
    match note.id().timestamp() {
        Some(created) => writeln!(
            out,
            "ID: {}  Created: {}",
            note.id(),
            created.format("%Y-%m-%d %H:%M")
        ),
        None => writeln!(out, "ID: {}", note.id()),
    }
}

/// Writes `data` as pretty JSON wrapped in `{"data": ...}`.
pub fn render_json<W: Write, T: Serialize>(out: &mut W, data: T) -> io::Result<()> {
    let output = Output::new(data);
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)
}
