//! Column letters and A1-style cell references

use crate::error::{Error, Result};
use crate::{MAX_COLUMN_ORDINAL, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

const RADIX: u32 = 26;

fn letter(digit: u32) -> char {
    (b'A' + digit as u8) as char
}

/// Convert a 0-based column ordinal to its letter name (0 = A, 25 = Z, 26 = AA, ...)
///
/// Column names are bijective base-26: there is no zero digit, so "Z" is followed
/// by "AA". Only one- to three-letter names are produced; ordinals from
/// [`MAX_COLUMN_ORDINAL`] upwards are rejected rather than clamped.
///
/// # Examples
/// ```
/// use sheetstream_core::column_to_letters;
///
/// assert_eq!(column_to_letters(0).unwrap(), "A");
/// assert_eq!(column_to_letters(701).unwrap(), "ZZ");
/// assert_eq!(column_to_letters(702).unwrap(), "AAA");
/// assert!(column_to_letters(18_278).is_err());
/// ```
pub fn column_to_letters(ordinal: u32) -> Result<String> {
    if ordinal >= MAX_COLUMN_ORDINAL {
        return Err(Error::ColumnOutOfRange(ordinal));
    }

    let mut letters = String::with_capacity(3);

    if ordinal < RADIX {
        letters.push(letter(ordinal));
        return Ok(letters);
    }

    if ordinal < RADIX * RADIX + RADIX {
        letters.push(letter(ordinal / RADIX - 1));
        letters.push(letter(ordinal % RADIX));
        return Ok(letters);
    }

    let mut first = ordinal / (RADIX * RADIX);
    let mut second = (ordinal - first * RADIX * RADIX) / RADIX;
    // A zero middle digit does not exist: borrow one from the top digit and
    // use 26 ("Z") in the middle instead.
    if second == 0 {
        second = RADIX;
        first -= 1;
    }
    let third = ordinal - first * RADIX * RADIX - second * RADIX;

    letters.push(letter(first - 1));
    letters.push(letter(second - 1));
    letters.push(letter(third));
    Ok(letters)
}

/// Convert column letters to a 0-based ordinal (A = 0, Z = 25, AA = 26, ...)
///
/// Case insensitive. Inverse of [`column_to_letters`].
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }
    if letters.len() > 3 {
        return Err(Error::InvalidAddress(format!(
            "column '{}' has more than three letters",
            letters
        )));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        col = col * RADIX + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }

    Ok(col - 1)
}

/// Format a 1-based row number and a 0-based column ordinal as an A1 reference
///
/// ```
/// use sheetstream_core::cell_reference;
///
/// assert_eq!(cell_reference(1, 0).unwrap(), "A1");
/// assert_eq!(cell_reference(100, 701).unwrap(), "ZZ100");
/// ```
pub fn cell_reference(row: u32, col: u32) -> Result<String> {
    Ok(CellRef::new(row, col)?.to_a1_string())
}

/// A validated cell coordinate (e.g. "AB5")
///
/// Unlike most spreadsheet models the row is stored 1-based, exactly as it is
/// written into the document; the column is a 0-based ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRef {
    row: u32,
    col: u32,
}

impl CellRef {
    /// Create a reference, checking both coordinates against the encodable range
    pub fn new(row: u32, col: u32) -> Result<Self> {
        if row == 0 {
            return Err(Error::InvalidRow(row));
        }
        if row > MAX_ROWS {
            return Err(Error::RowOutOfRange(row));
        }
        if col >= MAX_COLUMN_ORDINAL {
            return Err(Error::ColumnOutOfRange(col));
        }
        Ok(Self { row, col })
    }

    /// 1-based row number
    pub fn row(&self) -> u32 {
        self.row
    }

    /// 0-based column ordinal
    pub fn col(&self) -> u32 {
        self.col
    }

    /// Parse an A1-style reference such as "B7"
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(|| Error::InvalidAddress(format!("no row number in '{}'", s)))?;
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }
        let col = letters_to_column(letters)?;
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        Self::new(row, col)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = column_letters_unchecked(self.col);
        result.push_str(&self.row.to_string());
        result
    }
}

// `CellRef` only exists with an in-range column.
fn column_letters_unchecked(col: u32) -> String {
    column_to_letters(col).unwrap_or_default()
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
