//! Sheet name length rule

use std::borrow::Cow;

use crate::{MAX_SHEET_NAME_LEN, TRUNCATED_SHEET_NAME_LEN};

/// Shorten a sheet name that is longer than the 31 characters a workbook accepts
///
/// Names over the limit keep their first 28 characters followed by "...", which
/// lands exactly on the limit. Shorter names are returned untouched. Length is
/// counted in characters, not bytes.
///
/// ```
/// use sheetstream_core::truncate_sheet_name;
///
/// assert_eq!(truncate_sheet_name("Hours"), "Hours");
/// assert_eq!(
///     truncate_sheet_name("Work time report for the whole department"),
///     "Work time report for the who..."
/// );
/// ```
pub fn truncate_sheet_name(name: &str) -> Cow<'_, str> {
    if name.chars().count() <= MAX_SHEET_NAME_LEN {
        return Cow::Borrowed(name);
    }

    let mut truncated: String = name.chars().take(TRUNCATED_SHEET_NAME_LEN).collect();
    truncated.push_str("...");
    Cow::Owned(truncated)
}
