//! # sheetstream
//!
//! Streaming writer for single-sheet spreadsheets (XLSX).
//!
//! Rows and cells are written in one forward pass and go straight to the
//! output; memory use does not grow with the number of rows. Cells can span
//! several columns, in which case the covered columns are merged, and each
//! cell picks one of four predefined styles.
//!
//! ## Features
//!
//! - Bijective base-26 column letters (`A`, `Z`, `AA`, ... `ZZZ`)
//! - Text, number, boolean and date-time cells
//! - Horizontal merges declared once, after all rows
//! - Fixed palette: default, header, bordered, highlighted
//! - Writes to any `Write + Seek` target or straight to a file
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use sheetstream::prelude::*;
//!
//! let mut workbook =
//!     StreamingWorkbook::create(Cursor::new(Vec::new()), WriterOptions::default()).unwrap();
//! let palette = *workbook.palette();
//! let sheet = workbook.sheet_mut();
//!
//! sheet.open_row().unwrap();
//! sheet.add_spanned_cell("Name", palette.header(), 2).unwrap();
//! sheet.add_text("Age", palette.header()).unwrap();
//! sheet.close_row().unwrap();
//!
//! sheet.open_row().unwrap();
//! sheet.add_text("Alice", palette.default_style()).unwrap();
//! sheet.add_integer(30, palette.default_style()).unwrap();
//! sheet.add_bool(true, palette.default_style()).unwrap();
//! sheet.close_row().unwrap();
//!
//! let bytes = workbook.finish().unwrap().into_inner();
//! assert!(!bytes.is_empty());
//! ```

pub mod prelude;

// Re-export core types
pub use sheetstream_core::{
    // Coordinates
    cell_reference,
    column_to_letters,
    letters_to_column,
    truncate_sheet_name,
    CellRef,
    // Cell values
    CellValue,
    // Error types
    Error,
    MergeRange,
    // Style types
    PaletteStyle,
    Result,
    StyleId,
    StylePalette,
    ValueKind,

    // Constants
    MAX_COLUMN_ORDINAL,
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export writer types
pub use sheetstream_xlsx::{
    ElementSink, MergeRegistry, PackageSheetWriter, PaletteStylesheet, SheetWriter,
    StreamingWorkbook, WriterOptions, WriterState, XlsxError, XlsxResult, XmlSink,
};
