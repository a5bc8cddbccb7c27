//! Delimited clipboard text parsing
//!
//! Spreadsheet-style clipboard text: one delimiter between cells, `\n`,
//! `\r` or `\r\n` between rows, and optional double-quoted fields with
//! `""` as an escaped quote. Parsing never fails; malformed input (such as
//! an unclosed quote) yields whatever was accumulated up to end of input.

use crate::grid::Delimiter;

/// Rows of string cells produced by parsing clipboard text.
///
/// Rows may have different lengths. A cell past the end of its row is
/// absent, which is not the same as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMatrix {
    rows: Vec<Vec<String>>,
}

impl ParsedMatrix {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Matrix holding a single empty cell, the result of an empty paste
    pub fn single_empty() -> Self {
        Self::from_rows(vec![vec![String::new()]])
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every present cell as `(row, col, value)`, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, value)| (r, c, value.as_str()))
        })
    }
}

/// Parse tab-delimited clipboard text
pub fn parse(text: &str) -> ParsedMatrix {
    parse_with_delimiter(text, Delimiter::Tab.char())
}

/// Parse clipboard text using `delimiter` between cells.
///
/// An empty string produces one row with one empty cell so that pasting
/// nothing still clears the target cell.
pub fn parse_with_delimiter(text: &str, delimiter: char) -> ParsedMatrix {
    if text.is_empty() {
        return ParsedMatrix::single_empty();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut grid = GridCursor::default();
    let mut inside_quoted_field = false;
    let mut position = 0;

    while position < chars.len() {
        let previous = position.checked_sub(1).map(|p| chars[p]);
        let current = chars[position];
        let next = chars.get(position + 1).copied();
        position += 1;

        grid.touch();

        if current == '"' {
            if inside_quoted_field {
                if next == Some('"') {
                    // Escaped quote
                    grid.push('"');
                    position += 1;
                } else {
                    inside_quoted_field = false;
                }
                continue;
            }

            let at_field_start = match previous {
                None => true,
                Some(p) => p == delimiter || is_newline(p),
            };
            if at_field_start {
                inside_quoted_field = true;
                continue;
            }
        }

        if !inside_quoted_field {
            if current == delimiter {
                grid.next_column();
                continue;
            }

            if is_newline(current) {
                grid.next_row();
                if current == '\r' && next == Some('\n') {
                    position += 1;
                }
                continue;
            }
        }

        grid.push(current);
    }

    ParsedMatrix::from_rows(grid.rows)
}

fn is_newline(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}

/// Write position while scanning. Cells are materialized on first touch,
/// so a row only grows as far as the scanner actually reached.
#[derive(Debug, Default)]
struct GridCursor {
    rows: Vec<Vec<String>>,
    row: usize,
    column: usize,
}

impl GridCursor {
    fn touch(&mut self) {
        while self.rows.len() <= self.row {
            self.rows.push(Vec::new());
        }
        let cells = &mut self.rows[self.row];
        while cells.len() <= self.column {
            cells.push(String::new());
        }
    }

    fn push(&mut self, ch: char) {
        self.rows[self.row][self.column].push(ch);
    }

    fn next_column(&mut self) {
        self.column += 1;
        self.touch();
    }

    fn next_row(&mut self) {
        self.row += 1;
        self.column = 0;
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[&str]]) -> ParsedMatrix {
        ParsedMatrix::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_empty_text_is_single_empty_cell() {
        assert_eq!(parse(""), matrix(&[&[""]]));
    }

    #[test]
    fn test_plain_text_is_single_cell() {
        assert_eq!(parse("hello world"), matrix(&[&["hello world"]]));
    }

    #[test]
    fn test_crlf_rows() {
        assert_eq!(parse("a\tb\r\nc\td"), matrix(&[&["a", "b"], &["c", "d"]]));
    }

    #[test]
    fn test_lone_cr_and_lf_rows() {
        assert_eq!(parse("a\rb\nc"), matrix(&[&["a"], &["b"], &["c"]]));
    }

    #[test]
    fn test_trailing_newline_adds_empty_row() {
        assert_eq!(parse("a\tb\n"), matrix(&[&["a", "b"], &[""]]));
    }

    #[test]
    fn test_trailing_delimiter_adds_empty_cell() {
        assert_eq!(parse("a\t"), matrix(&[&["a", ""]]));
    }

    #[test]
    fn test_quoted_field_hides_other_delimiter() {
        assert_eq!(parse("\"a,b\""), matrix(&[&["a,b"]]));
    }

    #[test]
    fn test_quoted_field_hides_tab_and_newline() {
        assert_eq!(
            parse("\"a\tb\nc\"\td"),
            matrix(&[&["a\tb\nc", "d"]])
        );
    }

    #[test]
    fn test_doubled_quote_unescapes() {
        assert_eq!(
            parse("\"he said \"\"hi\"\"\""),
            matrix(&[&["he said \"hi\""]])
        );
    }

    #[test]
    fn test_quote_mid_field_is_literal() {
        assert_eq!(parse("5\" screen"), matrix(&[&["5\" screen"]]));
    }

    #[test]
    fn test_text_after_closing_quote_is_appended() {
        assert_eq!(parse("\"ab\"cd\te"), matrix(&[&["abcd", "e"]]));
    }

    #[test]
    fn test_unbalanced_quote_runs_to_end() {
        assert_eq!(parse("\"abc\tdef\nghi"), matrix(&[&["abc\tdef\nghi"]]));
    }

    #[test]
    fn test_custom_delimiter() {
        assert_eq!(
            parse_with_delimiter("1,2;3\n4", ','),
            matrix(&[&["1", "2;3"], &["4"]])
        );
    }

    #[test]
    fn test_jagged_rows_keep_their_length() {
        let parsed = parse("a\tb\tc\nd");
        assert_eq!(parsed.row(0).map(<[String]>::len), Some(3));
        assert_eq!(parsed.row(1).map(<[String]>::len), Some(1));
        assert_eq!(parsed.get(1, 0), Some("d"));
        assert_eq!(parsed.get(1, 1), None);
        assert_eq!(parsed.column_count(), 3);
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let grid = parse("a\tb\nc");
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells, vec![(0, 0, "a"), (0, 1, "b"), (1, 0, "c")]);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(parse("größe\t日本"), matrix(&[&["größe", "日本"]]));
    }
}
