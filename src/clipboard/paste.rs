//! Distributing parsed clipboard data onto the grid
//!
//! Two policies share one parsed matrix:
//!
//! - **Anchored** paste starts at the focused cell and may run past the
//!   grid. Cells that land outside the grid or in a column that does not
//!   accept paste are skipped; the rest are still written.
//! - **Range** paste fills every cell of a selected range, tiling the
//!   matrix when it is smaller than the range. The first column that does
//!   not accept paste stops the whole paste where it is.
//!
//! Pasted values are stored as text; any coercion belongs to the row type.

use crate::grid::{CellsRange, Column, GridRow, Position};

use super::parser::ParsedMatrix;

/// Where a paste lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteTarget {
    /// Free paste anchored at the focused cell
    Anchor(Position),
    /// Paste confined to (and tiled across) a selection
    Range(CellsRange),
}

/// What a paste did to the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasteSummary {
    /// Cells assigned a value
    pub written: usize,
    /// Cells passed over (out of bounds, protected or absent in the source)
    pub skipped: usize,
    /// The paste stopped early on a protected column
    pub aborted: bool,
}

impl PasteSummary {
    pub fn is_noop(&self) -> bool {
        self.written == 0
    }
}

/// Paste `matrix` with its top-left cell at `anchor`.
///
/// `row_index` maps a logical grid row (as the user sees it) to the index
/// of the backing row in `rows`, for grids that display rows reordered.
pub fn paste_anchored<R, F>(
    anchor: Position,
    matrix: &ParsedMatrix,
    rows: &mut [R],
    columns: &[Column<R>],
    row_index: F,
) -> PasteSummary
where
    R: GridRow,
    F: Fn(usize) -> usize,
{
    let mut summary = PasteSummary::default();

    for (offset, data_row) in matrix.rows().iter().enumerate() {
        let logical_row = anchor.row_idx.checked_add(offset);
        let target = match logical_row {
            Some(row) if row < rows.len() => rows.get_mut(row_index(row)),
            _ => None,
        };
        let Some(target) = target else {
            tracing::debug!(?logical_row, "paste row outside grid, skipped");
            summary.skipped += data_row.len();
            continue;
        };

        for (col_offset, value) in data_row.iter().enumerate() {
            let column = anchor
                .idx
                .checked_add(col_offset)
                .and_then(|col_idx| columns.get(col_idx));
            let Some(column) = column else {
                summary.skipped += 1;
                continue;
            };
            if !column.accepts_paste() {
                tracing::debug!(column = %column.key, "column not editable, cell skipped");
                summary.skipped += 1;
                continue;
            }

            target.set_text(&column.key, value.clone());
            summary.written += 1;
        }
    }

    summary
}

/// Fill every cell of `range` from `matrix`, repeating the matrix in both
/// directions when it is smaller than the range.
///
/// Wrapping is decided per step against the current source row, so rows of
/// different lengths wrap at their own width.
pub fn paste_into_range<R: GridRow>(
    range: &CellsRange,
    matrix: &ParsedMatrix,
    rows: &mut [R],
    columns: &[Column<R>],
) -> PasteSummary {
    let mut summary = PasteSummary::default();
    if matrix.is_empty() {
        return summary;
    }

    // Only cells inside the grid are visited; the rest is counted once
    let grid_rows = range.rows_within(rows.len());
    let grid_columns = range.columns_within(columns.len());
    let outside = range
        .cell_count()
        .saturating_sub(grid_rows.len() * grid_columns.len());

    let mut data_row_idx = 0;
    for row_idx in grid_rows {
        if data_row_idx >= matrix.row_count() {
            data_row_idx = 0;
        }
        let data_row = matrix.row(data_row_idx).unwrap_or_default();
        data_row_idx += 1;

        let mut data_col_idx = 0;
        for col_idx in grid_columns.clone() {
            if data_col_idx >= data_row.len() {
                data_col_idx = 0;
            }
            let value = data_row.get(data_col_idx);
            data_col_idx += 1;

            let column = &columns[col_idx];
            if !column.accepts_paste() {
                tracing::debug!(
                    column = %column.key,
                    row = row_idx,
                    written = summary.written,
                    "column not editable, range paste aborted"
                );
                summary.aborted = true;
                return summary;
            }

            match value {
                Some(value) => {
                    rows[row_idx].set_text(&column.key, value.clone());
                    summary.written += 1;
                }
                None => summary.skipped += 1,
            }
        }
    }

    if outside > 0 {
        tracing::debug!(%range, cells = outside, "range reaches past grid, cells skipped");
        summary.skipped += outside;
    }
    summary
}

/// Apply `matrix` to the grid at `target`, with rows in display order
pub fn distribute<R: GridRow>(
    target: PasteTarget,
    matrix: &ParsedMatrix,
    rows: &mut [R],
    columns: &[Column<R>],
) -> PasteSummary {
    let summary = match target {
        PasteTarget::Anchor(anchor) => paste_anchored(anchor, matrix, rows, columns, |row| row),
        PasteTarget::Range(range) => paste_into_range(&range, matrix, rows, columns),
    };
    tracing::debug!(
        ?target,
        written = summary.written,
        skipped = summary.skipped,
        aborted = summary.aborted,
        "paste distributed"
    );
    summary
}
