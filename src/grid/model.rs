//! Grid addressing types
//!
//! Cell positions, rectangular ranges and the delimiters used for
//! clipboard text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Range, RangeInclusive};
use std::str::FromStr;

/// Supported clipboard delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Tab,
    Comma,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Comma => ',',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// Address of a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row_idx: usize,
    /// Column display index
    pub idx: usize,
}

impl Position {
    pub fn new(row_idx: usize, idx: usize) -> Self {
        Self { row_idx, idx }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row_idx, self.idx)
    }
}

impl FromStr for Position {
    type Err = String;

    /// Parse `row:col` (zero-based)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("Expected ROW:COL, got '{}'", s))?;
        let row_idx = row
            .trim()
            .parse()
            .map_err(|_| format!("Invalid row index '{}'", row))?;
        let idx = col
            .trim()
            .parse()
            .map_err(|_| format!("Invalid column index '{}'", col))?;
        Ok(Self { row_idx, idx })
    }
}

/// Rectangle of cell addresses, inclusive on both axes.
///
/// Ranges recorded from a backward drag may have `start > end`. Only the
/// range copy normalizes them; every other operation expects `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellsRange {
    pub start_row_idx: usize,
    pub end_row_idx: usize,
    pub start_column_idx: usize,
    pub end_column_idx: usize,
}

impl CellsRange {
    pub fn new(
        start_row_idx: usize,
        end_row_idx: usize,
        start_column_idx: usize,
        end_column_idx: usize,
    ) -> Self {
        Self {
            start_row_idx,
            end_row_idx,
            start_column_idx,
            end_column_idx,
        }
    }

    /// Build a range from two corner positions
    pub fn from_corners(start: Position, end: Position) -> Self {
        Self::new(start.row_idx, end.row_idx, start.idx, end.idx)
    }

    /// 1x1 range covering a single cell
    pub fn single(position: Position) -> Self {
        Self::from_corners(position, position)
    }

    /// Distance between the start and end rows, regardless of order
    pub fn row_extent(&self) -> usize {
        self.start_row_idx.abs_diff(self.end_row_idx)
    }

    /// Distance between the start and end columns, regardless of order
    pub fn column_extent(&self) -> usize {
        self.start_column_idx.abs_diff(self.end_column_idx)
    }

    /// Same row and column extents as `other`
    pub fn same_shape(&self, other: &CellsRange) -> bool {
        self.row_extent() == other.row_extent() && self.column_extent() == other.column_extent()
    }

    /// Top-left corner after normalization
    pub fn origin(&self) -> Position {
        Position::new(
            self.start_row_idx.min(self.end_row_idx),
            self.start_column_idx.min(self.end_column_idx),
        )
    }

    /// Copy with start <= end on both axes
    pub fn normalized(&self) -> Self {
        Self::new(
            self.start_row_idx.min(self.end_row_idx),
            self.start_row_idx.max(self.end_row_idx),
            self.start_column_idx.min(self.end_column_idx),
            self.start_column_idx.max(self.end_column_idx),
        )
    }

    /// Row indices `start..=end`; empty when the range is inverted
    pub fn rows(&self) -> RangeInclusive<usize> {
        self.start_row_idx..=self.end_row_idx
    }

    /// Column indices `start..=end`; empty when the range is inverted
    pub fn columns(&self) -> RangeInclusive<usize> {
        self.start_column_idx..=self.end_column_idx
    }

    pub fn contains(&self, position: Position) -> bool {
        self.rows().contains(&position.row_idx) && self.columns().contains(&position.idx)
    }

    /// Row indices of the range that exist in a grid of `row_count` rows
    pub fn rows_within(&self, row_count: usize) -> Range<usize> {
        clip(self.start_row_idx, self.end_row_idx, row_count)
    }

    /// Column indices of the range that exist in a grid of `column_count` columns
    pub fn columns_within(&self, column_count: usize) -> Range<usize> {
        clip(self.start_column_idx, self.end_column_idx, column_count)
    }

    /// Cells named by the range, saturating at `usize::MAX`
    pub fn cell_count(&self) -> usize {
        span(self.start_row_idx, self.end_row_idx)
            .saturating_mul(span(self.start_column_idx, self.end_column_idx))
    }
}

fn clip(start: usize, end: usize, len: usize) -> Range<usize> {
    let start = start.min(len);
    start..end.saturating_add(1).min(len).max(start)
}

fn span(start: usize, end: usize) -> usize {
    match end.checked_sub(start) {
        Some(extent) => extent.saturating_add(1),
        None => 0,
    }
}

impl fmt::Display for CellsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start_row_idx, self.start_column_idx, self.end_row_idx, self.end_column_idx
        )
    }
}

impl FromStr for CellsRange {
    type Err = String;

    /// Parse `row:col-row:col`, or a single `row:col` as a 1x1 range
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((start, end)) => Ok(Self::from_corners(start.parse()?, end.parse()?)),
            None => Ok(Self::single(s.parse()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_from_extension() {
        assert_eq!(Delimiter::from_extension("csv"), Delimiter::Comma);
        assert_eq!(Delimiter::from_extension("TSV"), Delimiter::Tab);
        assert_eq!(Delimiter::from_extension("psv"), Delimiter::Pipe);
        assert_eq!(Delimiter::default().char(), '\t');
    }

    #[test]
    fn test_extents_ignore_direction() {
        let forward = CellsRange::new(2, 4, 1, 3);
        let backward = CellsRange::new(4, 2, 3, 1);

        assert_eq!(forward.row_extent(), 2);
        assert_eq!(backward.row_extent(), 2);
        assert_eq!(backward.column_extent(), 2);
        assert!(forward.same_shape(&backward));
    }

    #[test]
    fn test_normalized_and_origin() {
        let backward = CellsRange::new(5, 1, 4, 2);
        assert_eq!(backward.normalized(), CellsRange::new(1, 5, 2, 4));
        assert_eq!(backward.origin(), Position::new(1, 2));
    }

    #[test]
    fn test_inverted_range_iterates_nothing() {
        let inverted = CellsRange::new(3, 1, 0, 0);
        assert_eq!(inverted.rows().count(), 0);
    }

    #[test]
    fn test_parse_range() {
        let range: CellsRange = "1:2-3:4".parse().unwrap();
        assert_eq!(range, CellsRange::new(1, 3, 2, 4));

        let single: CellsRange = "7:0".parse().unwrap();
        assert_eq!(single, CellsRange::new(7, 7, 0, 0));

        assert!("1-2".parse::<CellsRange>().is_err());
        assert!("a:b".parse::<Position>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let range = CellsRange::new(0, 2, 1, 5);
        assert_eq!(range.to_string(), "0:1-2:5");
        assert_eq!(range.to_string().parse::<CellsRange>().unwrap(), range);
    }

    #[test]
    fn test_within_clips_to_grid() {
        let range = CellsRange::new(2, usize::MAX, 1, 9);
        assert_eq!(range.rows_within(5), 2..5);
        assert_eq!(range.columns_within(4), 1..4);

        let outside = CellsRange::new(7, 9, 0, 0);
        assert!(outside.rows_within(5).is_empty());
        assert!(CellsRange::new(3, 1, 0, 0).rows_within(5).is_empty());
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(CellsRange::new(0, 2, 1, 2).cell_count(), 6);
        assert_eq!(CellsRange::new(3, 1, 0, 0).cell_count(), 0);
        assert_eq!(CellsRange::new(0, usize::MAX, 0, 1).cell_count(), usize::MAX);
    }

    #[test]
    fn test_contains() {
        let range = CellsRange::new(1, 2, 1, 2);
        assert!(range.contains(Position::new(2, 1)));
        assert!(!range.contains(Position::new(3, 1)));
    }
}
