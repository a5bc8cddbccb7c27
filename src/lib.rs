//! gridclip - range-selection clipboard for tabular data grids
//!
//! This crate provides the clipboard engine behind a data grid: parsing
//! pasted spreadsheet text, copying selections out as text, distributing
//! pasted cells onto rows and copying ranges within a grid.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod config_paths;
pub mod grid;
pub mod table;
pub mod tracing;

// Re-export commonly used types
pub use clipboard::{GridClipboard, ParsedMatrix, PasteSummary, PasteTarget};
pub use config::GridClipConfig;
pub use grid::{CellsRange, Column, Delimiter, GridRow, Position, Record};
