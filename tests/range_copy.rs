//! Range-to-range copy and drag-to-fill tests

mod common;

use common::{project_columns, project_rows, text};
use gridclip::clipboard::{copy_range, fill_cell, fill_rows};
use gridclip::{CellsRange, Position};

#[test]
fn test_shape_mismatch_is_noop() {
    let columns = project_columns();
    let rows = project_rows(6);

    let result = copy_range(
        &CellsRange::new(0, 1, 1, 2),
        &CellsRange::new(3, 5, 1, 3),
        &columns,
        &rows,
    );
    assert!(result.is_none());
}

#[test]
fn test_copy_block_down() {
    let columns = project_columns();
    let rows = project_rows(5);

    let copied = copy_range(
        &CellsRange::new(0, 1, 1, 2),
        &CellsRange::new(2, 3, 1, 2),
        &columns,
        &rows,
    )
    .unwrap();

    assert_eq!(text(&copied, 2, "title"), "Task #1");
    assert_eq!(text(&copied, 2, "client"), "Client 0");
    assert_eq!(text(&copied, 3, "title"), "Task #2");
    assert_eq!(text(&copied, 3, "client"), "Client 1");
    // Outside the destination nothing moves
    assert_eq!(copied[4], rows[4]);
    assert_eq!(copied[2]["id"], rows[2]["id"]);
    // The input is untouched
    assert_eq!(text(&rows, 2, "title"), "Task #3");
}

#[test]
fn test_reversed_destination_is_normalized() {
    let columns = project_columns();
    let rows = project_rows(4);

    let copied = copy_range(
        &CellsRange::new(0, 1, 1, 2),
        &CellsRange::new(3, 2, 2, 1),
        &columns,
        &rows,
    )
    .unwrap();

    assert_eq!(text(&copied, 2, "title"), "Task #1");
    assert_eq!(text(&copied, 3, "client"), "Client 1");
}

#[test]
fn test_copy_is_positional_across_columns() {
    let columns = project_columns();
    let rows = project_rows(2);

    // title (col 1) lands in client (col 2) one row down
    let copied = copy_range(
        &CellsRange::single(Position::new(0, 1)),
        &CellsRange::single(Position::new(1, 2)),
        &columns,
        &rows,
    )
    .unwrap();

    assert_eq!(text(&copied, 1, "client"), "Task #1");
    assert_eq!(text(&copied, 1, "title"), "Task #2");
}

#[test]
fn test_protected_destination_is_noop() {
    let columns = project_columns();
    let rows = project_rows(4);

    // contact accepts paste but account is locked
    let result = copy_range(
        &CellsRange::new(0, 1, 2, 3),
        &CellsRange::new(2, 3, 3, 4),
        &columns,
        &rows,
    );
    assert!(result.is_none());
}

#[test]
fn test_destination_outside_grid_is_noop() {
    let columns = project_columns();
    let rows = project_rows(3);

    let result = copy_range(
        &CellsRange::new(0, 1, 1, 1),
        &CellsRange::new(2, 3, 1, 1),
        &columns,
        &rows,
    );
    assert!(result.is_none());
}

#[test]
fn test_overlapping_ranges_copy_original_values() {
    let columns = project_columns();
    let rows = project_rows(4);

    let copied = copy_range(
        &CellsRange::new(0, 2, 2, 2),
        &CellsRange::new(1, 3, 2, 2),
        &columns,
        &rows,
    )
    .unwrap();

    let clients: Vec<_> = (0..4).map(|r| text(&copied, r, "client")).collect();
    assert_eq!(clients, vec!["Client 0", "Client 0", "Client 1", "Client 2"]);
}

#[test]
fn test_fill_cell_keeps_other_fields() {
    let rows = project_rows(2);

    let filled = fill_cell("client", &rows[0], &rows[1]);
    assert_eq!(filled["client"], rows[0]["client"]);
    assert_eq!(filled["title"], rows[1]["title"]);
    assert_eq!(filled["id"], rows[1]["id"]);
}

#[test]
fn test_fill_rows_down_a_column() {
    let columns = project_columns();
    let mut rows = project_rows(5);

    let summary = fill_rows(&columns[5], 1, 1..=6, &mut rows);

    assert_eq!(summary.written, 3);
    assert_eq!(summary.skipped, 2);
    assert!((1..5).all(|r| rows[r]["progress"] == serde_json::json!(10)));
    assert_eq!(rows[0]["progress"], serde_json::json!(0));
}

#[test]
fn test_fill_rows_refuses_locked_column() {
    let columns = project_columns();
    let mut rows = project_rows(3);
    let before = rows.clone();

    let summary = fill_rows(&columns[4], 0, 0..=2, &mut rows);
    assert!(summary.aborted);
    assert_eq!(rows, before);
}
