//! Table file round trips through the clipboard operations

mod common;

use common::matrix;
use gridclip::clipboard::{distribute, serialize};
use gridclip::table::{load_table, save_table, TableFormat};
use gridclip::{CellsRange, Delimiter, GridClipConfig, GridRow, Position, PasteTarget};
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_csv_paste_and_save() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "rows.csv", "id,title,client\n1,Alpha,Acme\n2,Beta,Initech\n");

    let mut table = load_table(&path).unwrap();
    let summary = distribute(
        PasteTarget::Anchor(Position::new(0, 1)),
        &matrix(&[&["Gamma", "Hooli, Inc"]]),
        &mut table.rows,
        &table.columns,
    );
    assert_eq!(summary.written, 2);

    save_table(&table, &path).unwrap();
    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(saved, "id,title,client\n1,Gamma,\"Hooli, Inc\"\n2,Beta,Initech\n");
}

#[test]
fn test_tsv_copy_range() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "rows.tsv", "a\tb\tc\n1\t2\t3\n4\t5\t6\n");

    let table = load_table(&path).unwrap();
    let text = serialize(&CellsRange::new(0, 1, 1, 2), &table.columns, &table.rows);
    assert_eq!(text, "2\t3\r5\t6");
}

#[test]
fn test_json_keeps_values_and_key_order() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "rows.json",
        r#"[{"id": 1, "done": true, "title": "A"}, {"id": 2, "done": false, "title": "B"}]"#,
    );

    let mut table = load_table(&path).unwrap();
    assert_eq!(
        table.column_keys().collect::<Vec<_>>(),
        vec!["id", "done", "title"]
    );

    distribute(
        PasteTarget::Range(CellsRange::new(0, 1, 2, 2)),
        &matrix(&[&["Z"]]),
        &mut table.rows,
        &table.columns,
    );

    let out = dir.path().join("out.json");
    save_table(&table, &out).unwrap();
    let reloaded = load_table(&out).unwrap();
    assert_eq!(reloaded.rows[1].field_text("title"), "Z");
    assert_eq!(reloaded.rows[1]["done"], serde_json::json!(false));
    assert_eq!(reloaded.rows[0]["id"], serde_json::json!(1));
}

#[test]
fn test_locked_column_survives_paste() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "rows.csv", "id,title\n1,Alpha\n");

    let mut table = load_table(&path).unwrap();
    let config = GridClipConfig {
        locked_columns: vec!["id".to_string()],
        ..Default::default()
    };
    config.apply_locks(&mut table.columns);

    let summary = distribute(
        PasteTarget::Anchor(Position::new(0, 0)),
        &matrix(&[&["99", "Omega"]]),
        &mut table.rows,
        &table.columns,
    );
    assert_eq!(summary.skipped, 1);
    assert_eq!(table.rows[0].field_text("id"), "1");
    assert_eq!(table.rows[0].field_text("title"), "Omega");
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let err = load_table(&dir.path().join("absent.csv")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_format_detection() {
    assert_eq!(
        TableFormat::from_path(Path::new("x.psv")),
        TableFormat::Delimited(Delimiter::Pipe)
    );
    assert_eq!(
        TableFormat::from_path(Path::new("x.JSON")),
        TableFormat::Json
    );
}
