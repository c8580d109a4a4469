//! Error types for sheetstream-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetstream-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Column ordinal outside the range the letter encoding can represent
    #[error("Column ordinal {0} out of range (max: {max})", max = crate::MAX_COLUMN_ORDINAL - 1)]
    ColumnOutOfRange(u32),

    /// Row numbers are 1-based
    #[error("Invalid row number {0}: rows start at 1")]
    InvalidRow(u32),

    /// Row number past the worksheet limit
    #[error("Row number {0} out of range (max: {max})", max = crate::MAX_ROWS)]
    RowOutOfRange(u32),

    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid merge range
    #[error("Invalid merge range: {0}")]
    InvalidRange(String),
}
