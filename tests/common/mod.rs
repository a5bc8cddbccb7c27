//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use gridclip::clipboard::ParsedMatrix;
use gridclip::{Column, GridRow, Record};
use serde_json::{json, Value};

/// Build a matrix from string literals
pub fn matrix(rows: &[&[&str]]) -> ParsedMatrix {
    ParsedMatrix::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect(),
    )
}

/// Columns modelled on a project-tracking grid:
///
/// | idx | key      | paste |
/// |-----|----------|-------|
/// | 0   | id       | no    |
/// | 1   | title    | yes   |
/// | 2   | client   | yes   |
/// | 3   | contact  | editor only |
/// | 4   | account  | no    |
/// | 5   | progress | yes   |
pub fn project_columns() -> Vec<Column<Record>> {
    vec![
        Column::new("id", 0),
        Column::new("title", 1).editable(true).with_editor("text"),
        Column::new("client", 2).editable(true),
        Column::new("contact", 3).with_editor("text"),
        Column::new("account", 4),
        Column::new("progress", 5)
            .editable(true)
            .with_value_getter(|row: &Record| format!("{}%", row.field_text("progress"))),
    ]
}

/// `count` rows with every field filled with a recognizable value
pub fn project_rows(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let value = json!({
                "id": i,
                "title": format!("Task #{}", i + 1),
                "client": format!("Client {}", i),
                "contact": format!("c{}@example.com", i),
                "account": format!("NO{:02}", i),
                "progress": i * 10,
            });
            match value {
                Value::Object(map) => map,
                _ => unreachable!(),
            }
        })
        .collect()
}

/// Text form of a cell
pub fn text(rows: &[Record], row: usize, key: &str) -> String {
    rows[row].field_text(key).into_owned()
}
