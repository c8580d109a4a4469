//! Pending merge declarations
//!
//! Merged ranges have to be declared in one `<mergeCells>` block after all row
//! data, so they are collected while rows are written and flushed once.

use sheetstream_core::MergeRange;

use crate::error::{XlsxError, XlsxResult};

/// Append-only list of merges waiting for the final flush
#[derive(Debug, Default)]
pub struct MergeRegistry {
    ranges: Vec<MergeRange>,
}

impl MergeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a merge; order of registration is preserved
    pub fn register(&mut self, range: MergeRange) {
        self.ranges.push(range);
    }

    /// Number of pending merges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over pending merges in registration order
    pub fn iter(&self) -> impl Iterator<Item = &MergeRange> {
        self.ranges.iter()
    }

    /// Report the first pair of ranges that share a cell
    ///
    /// Ranges are grouped by row before comparing, so registration order does
    /// not matter.
    pub fn validate(&self) -> XlsxResult<()> {
        let mut sorted: Vec<&MergeRange> = self.ranges.iter().collect();
        sorted.sort_by_key(|r| (r.row(), r.start_col()));

        for pair in sorted.windows(2) {
            if pair[0].overlaps(pair[1]) {
                return Err(XlsxError::OverlappingMerges {
                    first: *pair[0],
                    second: *pair[1],
                });
            }
        }
        Ok(())
    }

    /// Hand out all pending merges, leaving the registry empty
    pub fn take(&mut self) -> Vec<MergeRange> {
        std::mem::take(&mut self.ranges)
    }
}
