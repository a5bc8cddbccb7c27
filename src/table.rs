//! Table files: a header-keyed row collection on disk
//!
//! Delimited files (CSV/TSV/PSV) are read with the csv crate; the first
//! line names the column keys. JSON files hold an array of objects, and
//! columns follow the order in which keys first appear.

use serde_json::Value;
use std::io::Cursor;
use std::path::Path;

use crate::grid::{Column, Delimiter, GridRow, Record};

/// Error type for reading and writing table files
#[derive(Debug, Clone)]
pub struct TableError {
    pub message: String,
    pub line: Option<usize>,
}

impl TableError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
        }
    }
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Table error at line {}: {}", line, self.message),
            None => write!(f, "Table error: {}", self.message),
        }
    }
}

impl std::error::Error for TableError {}

/// On-disk layout of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Delimited(Delimiter),
    Json,
}

impl TableFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => TableFormat::Json,
            Some(ext) => TableFormat::Delimited(Delimiter::from_extension(ext)),
            None => TableFormat::Delimited(Delimiter::Comma),
        }
    }
}

/// Columns plus the rows they describe
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<Column<Record>>,
    pub rows: Vec<Record>,
}

impl Table {
    /// Table whose columns are all editable, in the given key order
    pub fn new(keys: Vec<String>, rows: Vec<Record>) -> Self {
        let columns = keys
            .into_iter()
            .enumerate()
            .map(|(idx, key)| Column::new(key, idx).editable(true))
            .collect();
        Self { columns, rows }
    }

    pub fn column_keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.key.as_str())
    }

    pub fn column(&self, key: &str) -> Option<&Column<Record>> {
        self.columns.iter().find(|c| c.key == key)
    }
}

/// Parse delimited text with a header line
pub fn parse_delimited(content: &str, delimiter: Delimiter) -> Result<Table, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.char() as u8)
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(content.as_bytes()));

    let keys: Vec<String> = reader
        .headers()
        .map_err(|e| TableError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (line_num, result) in reader.records().enumerate() {
        let record = result.map_err(|e| TableError {
            message: e.to_string(),
            line: Some(line_num + 2),
        })?;
        let mut row = Record::new();
        for (key, value) in keys.iter().zip(record.iter()) {
            row.insert(key.clone(), Value::String(value.to_string()));
        }
        rows.push(row);
    }

    Ok(Table::new(keys, rows))
}

/// Parse a JSON array of objects
pub fn parse_json(content: &str) -> Result<Table, TableError> {
    let value: Value = serde_json::from_str(content).map_err(|e| TableError {
        message: e.to_string(),
        line: Some(e.line()),
    })?;
    let Value::Array(items) = value else {
        return Err(TableError::new("Expected a JSON array of objects"));
    };

    let mut keys: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        let Value::Object(row) = item else {
            return Err(TableError::new(format!("Row {} is not an object", i)));
        };
        for key in row.keys() {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
        rows.push(row);
    }

    Ok(Table::new(keys, rows))
}

/// Render a table as delimited text with a header line
pub fn to_delimited(table: &Table, delimiter: Delimiter) -> Result<String, TableError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.char() as u8)
        .from_writer(Vec::new());

    writer
        .write_record(table.column_keys())
        .map_err(|e| TableError::new(e.to_string()))?;
    for row in &table.rows {
        let fields: Vec<_> = table.column_keys().map(|key| row.field_text(key)).collect();
        writer
            .write_record(fields.iter().map(|f| f.as_bytes()))
            .map_err(|e| TableError::new(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TableError::new(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TableError::new(e.to_string()))
}

/// Render a table as a pretty-printed JSON array
pub fn to_json(table: &Table) -> Result<String, TableError> {
    let rows: Vec<Value> = table.rows.iter().cloned().map(Value::Object).collect();
    serde_json::to_string_pretty(&rows).map_err(|e| TableError::new(e.to_string()))
}

pub fn load_table(path: &Path) -> Result<Table, TableError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| TableError::new(format!("Failed to read {}: {}", path.display(), e)))?;

    let table = match TableFormat::from_path(path) {
        TableFormat::Json => parse_json(&content)?,
        TableFormat::Delimited(delimiter) => parse_delimited(&content, delimiter)?,
    };
    tracing::info!(
        "Loaded {} rows x {} columns from {}",
        table.rows.len(),
        table.columns.len(),
        path.display()
    );
    Ok(table)
}

pub fn save_table(table: &Table, path: &Path) -> Result<(), TableError> {
    let content = match TableFormat::from_path(path) {
        TableFormat::Json => to_json(table)?,
        TableFormat::Delimited(delimiter) => to_delimited(table, delimiter)?,
    };
    std::fs::write(path, content)
        .map_err(|e| TableError::new(format!("Failed to write {}: {}", path.display(), e)))?;
    tracing::info!("Saved {} rows to {}", table.rows.len(), path.display());
    Ok(())
}
