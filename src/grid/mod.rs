//! Grid data model consumed by the clipboard engine
//!
//! The grid owns nothing here. Rows live in a caller-supplied slice and
//! are accessed through [`GridRow`]; columns are plain descriptors that
//! advertise a small capability set (editable, custom editor, value getter).
//!
//! ```text
//! columns: [Column { key, idx, editable, editor, value_getter }]
//! rows:    [R: GridRow]          (addressed by zero-based row index)
//! Position   { row_idx, idx }
//! CellsRange { start_row_idx, end_row_idx, start_column_idx, end_column_idx }
//! ```

mod column;
mod model;
mod row;

pub use column::{Column, ValueGetter};
pub use model::{CellsRange, Delimiter, Position};
pub use row::{value_text, GridRow, Record};
