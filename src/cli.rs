//! Command-line argument parsing
//!
//! Supports:
//! - Copying a range of a table file to the clipboard
//! - Pasting clipboard (or supplied) text at a cell or into a range
//! - Copying one range onto another within a table
//! - Filling a column from one row across a span of rows

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::clipboard::PasteTarget;
use crate::grid::{CellsRange, Position};

/// Copy and paste cell ranges between table files and the clipboard
#[derive(Parser, Debug)]
#[command(name = "gridclip", version, about = "Range clipboard for table files")]
pub struct CliArgs {
    /// Config file to use instead of ~/.config/gridclip/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Column key that must not receive pasted values (repeatable)
    #[arg(long = "locked", global = true, value_name = "KEY")]
    pub locked: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Copy a range (ROW:COL-ROW:COL, zero-based) to the clipboard
    Copy {
        file: PathBuf,

        #[arg(long, value_name = "RANGE")]
        range: CellsRange,

        /// Print the text instead of writing the clipboard
        #[arg(long)]
        stdout: bool,
    },

    /// Paste text at a cell or into a selected range
    Paste {
        file: PathBuf,

        /// Anchor cell for a free paste
        #[arg(long, value_name = "ROW:COL", conflicts_with = "range", required_unless_present = "range")]
        at: Option<Position>,

        /// Range to fill, repeating the pasted block as needed
        #[arg(long, value_name = "RANGE")]
        range: Option<CellsRange>,

        /// Paste this text instead of the clipboard contents
        #[arg(long, conflicts_with = "stdin")]
        text: Option<String>,

        /// Read the text to paste from standard input
        #[arg(long)]
        stdin: bool,

        /// Write the result here instead of overwriting FILE
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Copy the cells of one range onto a range of the same size
    CopyRange {
        file: PathBuf,

        #[arg(long, value_name = "RANGE")]
        from: CellsRange,

        #[arg(long, value_name = "RANGE")]
        to: CellsRange,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Fill a column from one row across every row up to another
    Fill {
        file: PathBuf,

        #[arg(long, value_name = "KEY")]
        column: String,

        #[arg(long, value_name = "ROW")]
        from: usize,

        #[arg(long, value_name = "ROW")]
        to: usize,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Where pasted text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteSource {
    Clipboard,
    Text(String),
    Stdin,
}

impl Command {
    /// File the command reads
    pub fn file(&self) -> &Path {
        match self {
            Command::Copy { file, .. }
            | Command::Paste { file, .. }
            | Command::CopyRange { file, .. }
            | Command::Fill { file, .. } => file,
        }
    }

    /// File the command writes, if it writes one
    pub fn output_file(&self) -> Option<&Path> {
        match self {
            Command::Copy { .. } => None,
            Command::Paste { file, output, .. }
            | Command::CopyRange { file, output, .. }
            | Command::Fill { file, output, .. } => Some(output.as_deref().unwrap_or(file)),
        }
    }
}

/// Resolve `--at` / `--range` into a paste target
pub fn paste_target(at: Option<Position>, range: Option<CellsRange>) -> Result<PasteTarget, String> {
    match (at, range) {
        (Some(anchor), None) => Ok(PasteTarget::Anchor(anchor)),
        (None, Some(range)) => Ok(PasteTarget::Range(range.normalized())),
        (Some(_), Some(_)) => Err("Use either --at or --range, not both".to_string()),
        (None, None) => Err("Paste needs --at or --range".to_string()),
    }
}

/// Resolve `--text` / `--stdin` into a paste source
pub fn paste_source(text: Option<String>, stdin: bool) -> PasteSource {
    match (text, stdin) {
        (Some(text), _) => PasteSource::Text(text),
        (None, true) => PasteSource::Stdin,
        (None, false) => PasteSource::Clipboard,
    }
}
