//! # sheetstream-core
//!
//! Core data types for the sheetstream streaming spreadsheet writer.
//!
//! This crate holds everything that does not touch bytes:
//! - [`column_to_letters`] / [`letters_to_column`] - bijective base-26 column names
//! - [`CellRef`] and [`MergeRange`] - coordinates and merged spans
//! - [`CellValue`] - typed cell values (text, number, boolean)
//! - [`StylePalette`] - the fixed four-slot style palette handle
//! - [`truncate_sheet_name`] - the sheet-name length rule
//!
//! ## Example
//!
//! ```rust
//! use sheetstream_core::{cell_reference, column_to_letters, MergeRange};
//!
//! assert_eq!(column_to_letters(27).unwrap(), "AB");
//! assert_eq!(cell_reference(5, 27).unwrap(), "AB5");
//!
//! let merge = MergeRange::new(1, 0, 2).unwrap();
//! assert_eq!(merge.to_string(), "A1:B1");
//! ```

pub mod cell;
pub mod error;
pub mod range;
pub mod sheet_name;
pub mod style;

// Re-exports for convenience
pub use cell::{
    cell_reference, column_to_letters, is_xml_char, letters_to_column, CellRef, CellValue,
    ValueKind,
};
pub use error::{Error, Result};
pub use range::MergeRange;
pub use sheet_name::truncate_sheet_name;
pub use style::{PaletteStyle, StyleId, StylePalette};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Exclusive upper bound of the column ordinals the letter encoding covers
/// (one past "ZZZ").
pub const MAX_COLUMN_ORDINAL: u32 = 18_278;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Number of characters kept when a sheet name has to be shortened
pub const TRUNCATED_SHEET_NAME_LEN: usize = 28;
