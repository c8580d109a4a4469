//! Typed cell values

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime};

/// Format used when date-times are written as text cells
pub const DATETIME_TEXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used when dates are written as text cells
pub const DATE_TEXT_FORMAT: &str = "%Y-%m-%d";

/// Check if a character is allowed in XML 1.0 content
///
/// Control characters other than tab, line feed and carriage return are not,
/// and neither are U+FFFE and U+FFFF.
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// The kind of a cell value, which decides how the cell is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// Inline string content
    Text,
    /// Decimal number (the document default, no type marker)
    Number,
    /// Boolean stored as 1/0
    Boolean,
}

/// A value written into a single cell
///
/// Text borrows when it can; the writer never keeps values beyond the call
/// that writes them.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue<'a> {
    /// String value
    Text(Cow<'a, str>),
    /// Floating point number
    Number(f64),
    /// Integer, written with every digit
    Integer(i64),
    /// Boolean value
    Boolean(bool),
}

impl<'a> CellValue<'a> {
    /// Get the value kind
    pub fn kind(&self) -> ValueKind {
        match self {
            CellValue::Text(_) => ValueKind::Text,
            CellValue::Number(_) | CellValue::Integer(_) => ValueKind::Number,
            CellValue::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Get the literal written into the cell's value element
    ///
    /// Numbers use the shortest decimal form that round-trips, booleans are
    /// "1" or "0".
    pub fn to_literal(&self) -> Cow<'_, str> {
        match self {
            CellValue::Text(s) => Cow::Borrowed(s.as_ref()),
            CellValue::Number(n) => Cow::Owned(n.to_string()),
            CellValue::Integer(i) => Cow::Owned(i.to_string()),
            CellValue::Boolean(true) => Cow::Borrowed("1"),
            CellValue::Boolean(false) => Cow::Borrowed("0"),
        }
    }

    /// Check that the value can be represented in the document
    ///
    /// NaN and the infinities have no literal form.
    pub fn is_representable(&self) -> bool {
        match self {
            CellValue::Number(n) => n.is_finite(),
            _ => true,
        }
    }

    /// First character of a text value that XML cannot carry, if any
    pub fn invalid_char(&self) -> Option<char> {
        match self {
            CellValue::Text(s) => s.chars().find(|&c| !is_xml_char(c)),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for CellValue<'a> {
    fn from(s: &'a str) -> Self {
        CellValue::Text(Cow::Borrowed(s))
    }
}

impl From<String> for CellValue<'_> {
    fn from(s: String) -> Self {
        CellValue::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a String> for CellValue<'a> {
    fn from(s: &'a String) -> Self {
        CellValue::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<f64> for CellValue<'_> {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue<'_> {
    fn from(n: i32) -> Self {
        CellValue::Integer(n as i64)
    }
}

impl From<i64> for CellValue<'_> {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<u32> for CellValue<'_> {
    fn from(n: u32) -> Self {
        CellValue::Integer(n as i64)
    }
}

impl From<bool> for CellValue<'_> {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<NaiveDateTime> for CellValue<'_> {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::Text(Cow::Owned(dt.format(DATETIME_TEXT_FORMAT).to_string()))
    }
}

impl From<NaiveDate> for CellValue<'_> {
    fn from(d: NaiveDate) -> Self {
        CellValue::Text(Cow::Owned(d.format(DATE_TEXT_FORMAT).to_string()))
    }
}
