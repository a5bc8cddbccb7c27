//! Copying one selection onto another within the same grid
//!
//! The copy is positional: the cell at offset `(i, j)` from the source
//! origin lands at offset `(i, j)` from the destination origin, whatever
//! columns those offsets name. Both ranges are normalized first, so
//! selections dragged backwards copy to the rectangle they cover.

use crate::grid::{CellsRange, Column, GridRow};

/// Copy the values under `source` onto `destination`, returning the new row
/// collection.
///
/// Returns `None` and leaves the grid alone when the ranges differ in
/// shape, when either range reaches outside the grid, or when a
/// destination column does not accept paste. All source values are read
/// before any write, so overlapping ranges copy the original values.
pub fn copy_range<R>(
    source: &CellsRange,
    destination: &CellsRange,
    columns: &[Column<R>],
    rows: &[R],
) -> Option<Vec<R>>
where
    R: GridRow + Clone,
{
    if !source.same_shape(destination) {
        tracing::debug!(%source, %destination, "range copy shape mismatch, ignored");
        return None;
    }

    let source = source.normalized();
    let destination = destination.normalized();

    for range in [&source, &destination] {
        if range.end_row_idx >= rows.len() || range.end_column_idx >= columns.len() {
            tracing::debug!(%range, "range copy outside grid, ignored");
            return None;
        }
    }

    if let Some(column) = columns[destination.columns()]
        .iter()
        .find(|column| !column.accepts_paste())
    {
        tracing::debug!(column = %column.key, "range copy into protected column, ignored");
        return None;
    }

    let mut writes = Vec::with_capacity((source.row_extent() + 1) * (source.column_extent() + 1));
    for i in 0..=source.row_extent() {
        for j in 0..=source.column_extent() {
            let from = &rows[source.start_row_idx + i];
            let source_key = &columns[source.start_column_idx + j].key;
            let destination_key = &columns[destination.start_column_idx + j].key;
            writes.push((
                destination.start_row_idx + i,
                destination_key,
                from.field(source_key).cloned(),
            ));
        }
    }

    let mut new_rows = rows.to_vec();
    for (row_idx, key, value) in writes {
        let row = &mut new_rows[row_idx];
        match value {
            Some(value) => row.set_field(key, value),
            None => row.remove_field(key),
        }
    }

    tracing::debug!(%source, %destination, "range copied");
    Some(new_rows)
}
