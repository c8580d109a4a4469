//! Writer configuration

use std::borrow::Cow;

use sheetstream_core::truncate_sheet_name;
use zip::CompressionMethod;

/// Name used when none is given
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Options for [`SheetWriter`](crate::SheetWriter) and
/// [`StreamingWorkbook`](crate::StreamingWorkbook)
///
/// # Example
///
/// ```rust
/// use sheetstream_xlsx::WriterOptions;
///
/// let options = WriterOptions::new()
///     .sheet_name("Hours")
///     .validate_merges(false);
/// assert_eq!(options.effective_sheet_name(), "Hours");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WriterOptions {
    /// Sheet name as supplied; shortened on write if over the length limit
    pub sheet_name: String,
    /// Compression used for every part of the package
    pub compression: CompressionMethod,
    /// Check merged ranges for overlaps before they are written
    pub validate_merges: bool,
}

impl WriterOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sheet name
    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Set the package compression method
    pub fn compression(mut self, compression: CompressionMethod) -> Self {
        self.compression = compression;
        self
    }

    /// Enable or disable merge validation at finalization
    pub fn validate_merges(mut self, validate: bool) -> Self {
        self.validate_merges = validate;
        self
    }

    /// Sheet name as it will appear in the workbook
    pub fn effective_sheet_name(&self) -> Cow<'_, str> {
        truncate_sheet_name(&self.sheet_name)
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            compression: CompressionMethod::Deflated,
            validate_merges: true,
        }
    }
}
