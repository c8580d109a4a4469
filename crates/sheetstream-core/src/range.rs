//! Merged cell ranges

use crate::cell::CellRef;
use crate::error::{Error, Result};
use crate::MAX_COLUMN_ORDINAL;
use std::fmt;

/// A horizontal merge: one logical cell spanning `span` columns of a single row
///
/// Created once per spanned cell and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeRange {
    start: CellRef,
    span: u32,
}

impl MergeRange {
    /// Create a merge starting at `(row, start_col)` covering `span` columns
    ///
    /// Fails if the span is smaller than two or runs past the last encodable column.
    pub fn new(row: u32, start_col: u32, span: u32) -> Result<Self> {
        if span < 2 {
            return Err(Error::InvalidRange(format!(
                "span of {} does not merge anything",
                span
            )));
        }
        let start = CellRef::new(row, start_col)?;
        let fits = start_col
            .checked_add(span - 1)
            .map_or(false, |end_col| end_col < MAX_COLUMN_ORDINAL);
        if !fits {
            return Err(Error::ColumnOutOfRange(start_col.saturating_add(span - 1)));
        }
        Ok(Self { start, span })
    }

    /// 1-based row of the merge
    pub fn row(&self) -> u32 {
        self.start.row()
    }

    /// First column ordinal
    pub fn start_col(&self) -> u32 {
        self.start.col()
    }

    /// Number of columns covered
    pub fn span(&self) -> u32 {
        self.span
    }

    /// Last column ordinal (inclusive)
    pub fn end_col(&self) -> u32 {
        self.start.col() + self.span - 1
    }

    /// Top-left reference
    pub fn start_ref(&self) -> CellRef {
        self.start
    }

    /// Bottom-right reference
    pub fn end_ref(&self) -> CellRef {
        // Both coordinates were validated in `new`.
        CellRef::new(self.row(), self.end_col()).unwrap_or(self.start)
    }

    /// Check if this range shares at least one cell with another
    pub fn overlaps(&self, other: &MergeRange) -> bool {
        self.row() == other.row()
            && self.start_col() <= other.end_col()
            && other.start_col() <= self.end_col()
    }

    /// Format as "A1:B1"
    pub fn to_a1_string(&self) -> String {
        format!("{}:{}", self.start_ref(), self.end_ref())
    }
}

impl fmt::Display for MergeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_ref(), self.end_ref())
    }
}
