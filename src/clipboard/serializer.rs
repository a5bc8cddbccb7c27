//! Selection to clipboard text
//!
//! Cells are joined with the delimiter and rows with a carriage return,
//! with no trailing separator. Values are written verbatim: no quoting is
//! applied, so a value holding the delimiter or a line break will not
//! survive a round trip through [`parse`](super::parser::parse).

use crate::grid::{CellsRange, Column, Delimiter, GridRow};

/// Row separator for copied text
pub const ROW_SEPARATOR: char = '\r';

/// Serialize `range` as tab-delimited text
pub fn serialize<R: GridRow>(range: &CellsRange, columns: &[Column<R>], rows: &[R]) -> String {
    serialize_with_delimiter(range, columns, rows, Delimiter::Tab.char())
}

/// Serialize the cells inside `range` (inclusive) as delimited text.
///
/// A column's value getter wins over the raw field. The range is clipped
/// to the grid, so rows or columns the model lacks contribute nothing and
/// a range entirely outside the grid yields an empty string.
pub fn serialize_with_delimiter<R: GridRow>(
    range: &CellsRange,
    columns: &[Column<R>],
    rows: &[R],
    delimiter: char,
) -> String {
    let mut text = String::new();
    let grid_columns = range.columns_within(columns.len());

    for (i, row) in rows[range.rows_within(rows.len())].iter().enumerate() {
        if i > 0 {
            text.push(ROW_SEPARATOR);
        }
        for (j, column) in columns[grid_columns.clone()].iter().enumerate() {
            if j > 0 {
                text.push(delimiter);
            }
            match &column.value_getter {
                Some(getter) => text.push_str(&getter(row)),
                None => text.push_str(&row.field_text(&column.key)),
            }
        }
    }

    text
}
