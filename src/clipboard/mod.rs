//! Range-selection clipboard
//!
//! Copy turns a selected range into delimited text; paste turns delimited
//! text back into cells, either anchored at the focused cell or tiled
//! across a selected range. Range copy moves values between two ranges of
//! the same grid without going through text.
//!
//! # Architecture
//!
//! ```text
//! paste:  ClipboardBridge ─► PasteGuard ─► parser ─► ParsedMatrix ─► paste ─► rows
//! copy:   rows ─► serializer ─► text ─► ClipboardBridge
//! drag:   rows ─► range_copy ─► new rows
//! ```
//!
//! Every operation runs to completion synchronously and keeps no state
//! between calls, apart from the guard's last-paste timestamp.

mod bridge;
mod fill;
mod guard;
mod parser;
mod paste;
mod range_copy;
mod serializer;

pub use bridge::{ClipboardBridge, MemoryClipboard, SystemClipboard};
pub use fill::{fill_cell, fill_rows};
pub use guard::{Clock, ManualClock, PasteGuard, SystemClock, DEFAULT_PASTE_DEBOUNCE};
pub use parser::{parse, parse_with_delimiter, ParsedMatrix};
pub use paste::{distribute, paste_anchored, paste_into_range, PasteSummary, PasteTarget};
pub use range_copy::copy_range;
pub use serializer::{serialize, serialize_with_delimiter, ROW_SEPARATOR};

use std::time::Duration;

use crate::config::GridClipConfig;
use crate::grid::{CellsRange, Column, Delimiter, GridRow, Position};

/// Clipboard front end for one grid: owns the bridge and the paste guard
#[derive(Debug)]
pub struct GridClipboard<B: ClipboardBridge, C: Clock = SystemClock> {
    bridge: B,
    guard: PasteGuard<C>,
    delimiter: Delimiter,
}

impl GridClipboard<SystemClipboard, SystemClock> {
    /// System clipboard front end configured from user settings
    pub fn from_config(config: &GridClipConfig) -> Self {
        let bridge = if config.system_clipboard {
            SystemClipboard::new()
        } else {
            SystemClipboard::fallback_only()
        };
        let guard = PasteGuard::new(Duration::from_millis(config.paste_debounce_ms));
        Self::new(bridge, guard, config.delimiter)
    }
}

impl<B: ClipboardBridge, C: Clock> GridClipboard<B, C> {
    pub fn new(bridge: B, guard: PasteGuard<C>, delimiter: Delimiter) -> Self {
        Self {
            bridge,
            guard,
            delimiter,
        }
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Serialize `range` and put it on the clipboard, returning the text
    pub fn copy<R: GridRow>(
        &mut self,
        range: &CellsRange,
        columns: &[Column<R>],
        rows: &[R],
    ) -> String {
        let text = serialize_with_delimiter(range, columns, rows, self.delimiter.char());
        self.bridge.write_text(&text);
        tracing::debug!(%range, bytes = text.len(), "range copied to clipboard");
        text
    }

    /// Read and parse the clipboard.
    ///
    /// `None` when the paste was debounced or the clipboard holds nothing.
    pub fn read_matrix(&mut self) -> Option<ParsedMatrix> {
        if !self.guard.admit() {
            return None;
        }
        let text = self.bridge.read_text()?;
        Some(parse_with_delimiter(&text, self.delimiter.char()))
    }

    /// Paste the clipboard at `target`, rows in display order
    pub fn paste<R: GridRow>(
        &mut self,
        target: PasteTarget,
        rows: &mut [R],
        columns: &[Column<R>],
    ) -> Option<PasteSummary> {
        let matrix = self.read_matrix()?;
        Some(distribute(target, &matrix, rows, columns))
    }

    /// Anchored paste for grids whose display order differs from storage
    pub fn paste_at_with<R, F>(
        &mut self,
        anchor: Position,
        rows: &mut [R],
        columns: &[Column<R>],
        row_index: F,
    ) -> Option<PasteSummary>
    where
        R: GridRow,
        F: Fn(usize) -> usize,
    {
        let matrix = self.read_matrix()?;
        Some(paste_anchored(anchor, &matrix, rows, columns, row_index))
    }
}
