//! XLSX error types

use sheetstream_core::MergeRange;
use thiserror::Error;

use crate::writer::WriterState;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur during XLSX writing
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Core error (coordinates out of range and similar input errors)
    #[error("Core error: {0}")]
    Core(#[from] sheetstream_core::Error),

    /// Operation called in a state where it is not allowed
    #[error("Cannot {operation} while the writer is {state}")]
    Protocol {
        operation: &'static str,
        state: WriterState,
    },

    /// The writer gave up after an earlier fatal error
    #[error("Writer was aborted by an earlier error; the output is unusable")]
    Aborted,

    /// A cell must cover at least one column
    #[error("Invalid span: a cell must cover at least one column")]
    InvalidSpan,

    /// NaN or infinite number
    #[error("Number {0} cannot be written to a cell")]
    NonFiniteNumber(f64),

    /// Text holds a character XML 1.0 cannot represent
    #[error("Character {0:?} cannot be written to the document")]
    InvalidCharacter(char),

    /// Two registered merges cover the same cell
    #[error("Merged ranges {first} and {second} overlap")]
    OverlappingMerges { first: MergeRange, second: MergeRange },

    /// Close requested with no open element
    #[error("Element sink has no open element to close")]
    SinkUnderflow,

    /// Sink released while elements were still open
    #[error("Element sink released with {0} open element(s)")]
    UnclosedElements(usize),
}

impl XlsxError {
    /// Whether this error leaves the output structurally unusable
    ///
    /// Input errors are reported before anything is written; everything else
    /// may have left a partial element in the stream.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            XlsxError::Core(_)
                | XlsxError::InvalidSpan
                | XlsxError::NonFiniteNumber(_)
                | XlsxError::InvalidCharacter(_)
        )
    }
}
