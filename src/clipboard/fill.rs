//! Drag-to-fill: repeat one cell's value down (or up) a column

use std::ops::RangeInclusive;

use crate::grid::{Column, GridRow};

use super::paste::PasteSummary;

/// Copy of `target_row` with `column_key` taken from `source_row`
pub fn fill_cell<R>(column_key: &str, source_row: &R, target_row: &R) -> R
where
    R: GridRow + Clone,
{
    let mut filled = target_row.clone();
    match source_row.field(column_key) {
        Some(value) => filled.set_field(column_key, value.clone()),
        None => filled.remove_field(column_key),
    }
    filled
}

/// Fill `column` in every row of `targets` from row `source_idx`.
///
/// The source row itself is left alone and rows past the end are skipped.
/// A column that does not accept paste is refused outright.
pub fn fill_rows<R>(
    column: &Column<R>,
    source_idx: usize,
    targets: RangeInclusive<usize>,
    rows: &mut [R],
) -> PasteSummary
where
    R: GridRow + Clone,
{
    let mut summary = PasteSummary::default();
    if !column.accepts_paste() {
        tracing::debug!(column = %column.key, "fill into protected column refused");
        summary.aborted = true;
        return summary;
    }
    let Some(source) = rows.get(source_idx).cloned() else {
        tracing::debug!(row = source_idx, "fill source outside grid");
        return summary;
    };

    for target_idx in targets {
        if target_idx == source_idx {
            continue;
        }
        match rows.get_mut(target_idx) {
            Some(target) => {
                *target = fill_cell(&column.key, &source, target);
                summary.written += 1;
            }
            None => summary.skipped += 1,
        }
    }

    summary
}
