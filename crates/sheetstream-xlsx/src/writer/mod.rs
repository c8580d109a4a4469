//! Row/cell write state machine
//!
//! [`SheetWriter`] streams a worksheet into an [`ElementSink`] in one forward
//! pass. Coordinates are never stored per cell: the row number and the next
//! free column are counters, and every reference is rebuilt from them when the
//! cell is written. The only state that grows with the document is the list of
//! pending merges, which must be written after all rows.

use std::fmt;

use chrono::NaiveDateTime;
use sheetstream_core::{
    cell_reference, CellValue, MergeRange, StyleId, ValueKind, MAX_COLUMN_ORDINAL, MAX_ROWS,
};

use crate::error::{XlsxError, XlsxResult};
use crate::options::WriterOptions;
use crate::registry::MergeRegistry;
use crate::sink::ElementSink;

const NS_SPREADSHEETML: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_MARKUP_COMPATIBILITY: &str =
    "http://schemas.openxmlformats.org/markup-compatibility/2006";
const NS_X14AC: &str = "http://schemas.microsoft.com/office/spreadsheetml/2009/9/ac";

const WORKSHEET_NAMESPACES: [(&str, &str); 4] = [
    ("", NS_SPREADSHEETML),
    ("r", NS_RELATIONSHIPS),
    ("mc", NS_MARKUP_COMPATIBILITY),
    ("x14ac", NS_X14AC),
];

/// Where the writer is in the open/close protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    /// Created, nothing written yet
    Closed,
    /// Worksheet and sheet data are open, no row is open
    DocumentOpen,
    /// A row is open and accepts cells
    RowOpen,
    /// Merges flushed and all elements closed
    Finalized,
    /// A fatal error occurred; the output is unusable
    Aborted,
}

impl fmt::Display for WriterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WriterState::Closed => "closed",
            WriterState::DocumentOpen => "between rows",
            WriterState::RowOpen => "inside a row",
            WriterState::Finalized => "finalized",
            WriterState::Aborted => "aborted",
        };
        f.write_str(s)
    }
}

/// Forward-only worksheet writer
///
/// Rows must be opened and closed strictly in turn, cells can only be added to
/// the open row, and [`finalize`](Self::finalize) must be called once all rows
/// are closed. Any call out of that order is a protocol violation: it returns
/// [`XlsxError::Protocol`] and the writer refuses all further work.
///
/// If the writer is dropped before it is finalized, it closes every element it
/// opened so the sink is left balanced; the content is incomplete regardless.
///
/// # Example
///
/// ```rust
/// use sheetstream_core::StyleId;
/// use sheetstream_xlsx::{SheetWriter, WriterOptions, XmlSink};
///
/// let sink = XmlSink::new(Vec::new()).unwrap();
/// let mut writer = SheetWriter::open(sink, WriterOptions::default()).unwrap();
///
/// writer.open_row().unwrap();
/// writer.add_spanned_cell("Total", StyleId::new(1), 3).unwrap();
/// writer.add_number(42.5, StyleId::default()).unwrap();
/// writer.close_row().unwrap();
///
/// let xml = String::from_utf8(writer.finalize().unwrap().into_inner().unwrap()).unwrap();
/// assert!(xml.contains(r#"<c s="0" r="D1"><v>42.5</v></c>"#));
/// assert!(xml.contains(r#"<mergeCell ref="A1:C1"/>"#));
/// ```
pub struct SheetWriter<S: ElementSink> {
    sink: Option<S>,
    state: WriterState,
    /// Sink depth before the worksheet element was opened
    base_depth: usize,
    row: u32,
    column: u32,
    merges: MergeRegistry,
    options: WriterOptions,
}

impl<S: ElementSink> SheetWriter<S> {
    /// Create a writer in the [`Closed`](WriterState::Closed) state
    pub fn new(sink: S, options: WriterOptions) -> Self {
        Self {
            sink: Some(sink),
            state: WriterState::Closed,
            base_depth: 0,
            row: 0,
            column: 0,
            merges: MergeRegistry::new(),
            options,
        }
    }

    /// Create a writer and open the document
    pub fn open(sink: S, options: WriterOptions) -> XlsxResult<Self> {
        let mut writer = Self::new(sink, options);
        writer.open_document()?;
        Ok(writer)
    }

    /// Open the worksheet and sheet data elements
    pub fn open_document(&mut self) -> XlsxResult<()> {
        self.expect_state("open the document", WriterState::Closed)?;

        self.base_depth = self.sink.as_ref().map_or(0, |s| s.depth());
        self.run(|sink| {
            sink.open_element(
                "worksheet",
                &[("mc:Ignorable", "x14ac")],
                &WORKSHEET_NAMESPACES,
            )?;
            sink.open_element("sheetData", &[], &[])
        })?;

        self.state = WriterState::DocumentOpen;
        log::debug!("opened worksheet '{}'", self.options.effective_sheet_name());
        Ok(())
    }

    /// Start the next row
    ///
    /// Rows are numbered from 1 without gaps; the column counter restarts at 0.
    pub fn open_row(&mut self) -> XlsxResult<()> {
        self.expect_state("open a row", WriterState::DocumentOpen)?;

        let row = self.row + 1;
        if row > MAX_ROWS {
            return Err(sheetstream_core::Error::RowOutOfRange(row).into());
        }

        let r = row.to_string();
        self.run(|sink| sink.open_element("row", &[("r", r.as_str())], &[]))?;

        self.row = row;
        self.column = 0;
        self.state = WriterState::RowOpen;
        log::trace!("opened row {}", row);
        Ok(())
    }

    /// Close the open row
    pub fn close_row(&mut self) -> XlsxResult<()> {
        self.expect_state("close a row", WriterState::RowOpen)?;
        self.run(|sink| sink.close_element())?;
        self.state = WriterState::DocumentOpen;
        log::trace!("closed row {} with {} column(s)", self.row, self.column);
        Ok(())
    }

    /// Add a cell occupying one column
    pub fn add_cell<'v>(&mut self, value: impl Into<CellValue<'v>>, style: StyleId) -> XlsxResult<()> {
        self.add_spanned_cell(value, style, 1)
    }

    /// Add a text cell
    pub fn add_text(&mut self, text: &str, style: StyleId) -> XlsxResult<()> {
        self.add_spanned_cell(text, style, 1)
    }

    /// Add a number cell
    pub fn add_number(&mut self, number: f64, style: StyleId) -> XlsxResult<()> {
        self.add_spanned_cell(number, style, 1)
    }

    /// Add an integer number cell
    pub fn add_integer(&mut self, number: i64, style: StyleId) -> XlsxResult<()> {
        self.add_spanned_cell(number, style, 1)
    }

    /// Add a boolean cell
    pub fn add_bool(&mut self, value: bool, style: StyleId) -> XlsxResult<()> {
        self.add_spanned_cell(value, style, 1)
    }

    /// Add a date-time, written as text
    pub fn add_datetime(&mut self, value: NaiveDateTime, style: StyleId) -> XlsxResult<()> {
        self.add_spanned_cell(value, style, 1)
    }

    /// Add a cell whose value covers `span` adjacent columns
    ///
    /// The value goes into the first column, the remaining `span - 1` columns
    /// get empty cells with the same style, and a merge over all of them is
    /// registered for the final merge block.
    ///
    /// A zero span, a span running past the last encodable column, non-finite
    /// numbers and text with characters XML cannot carry are rejected before
    /// anything is written. The row stays usable after such an error.
    pub fn add_spanned_cell<'v>(
        &mut self,
        value: impl Into<CellValue<'v>>,
        style: StyleId,
        span: u32,
    ) -> XlsxResult<()> {
        self.expect_state("add a cell", WriterState::RowOpen)?;

        let value = value.into();
        if span == 0 {
            return Err(XlsxError::InvalidSpan);
        }
        if !value.is_representable() {
            if let CellValue::Number(n) = &value {
                return Err(XlsxError::NonFiniteNumber(*n));
            }
        }
        if let Some(c) = value.invalid_char() {
            return Err(XlsxError::InvalidCharacter(c));
        }

        let row = self.row;
        let start = self.column;
        let last = start
            .checked_add(span - 1)
            .filter(|&col| col < MAX_COLUMN_ORDINAL)
            .ok_or(sheetstream_core::Error::ColumnOutOfRange(
                start.saturating_add(span - 1),
            ))?;
        let merge = if span > 1 {
            Some(MergeRange::new(row, start, span)?)
        } else {
            None
        };

        let style = style.index().to_string();
        self.run(|sink| {
            write_value_cell(sink, &cell_reference(row, start)?, &style, &value)?;
            for col in start + 1..=last {
                write_inline_string(sink, &cell_reference(row, col)?, &style, "")?;
            }
            Ok(())
        })?;

        self.column = last + 1;
        if let Some(merge) = merge {
            self.merges.register(merge);
        }
        Ok(())
    }

    /// Close the sheet data, write the merge block and close the worksheet
    ///
    /// Consumes the writer and hands back the sink.
    pub fn finalize(mut self) -> XlsxResult<S> {
        self.expect_state("finalize", WriterState::DocumentOpen)?;

        if self.options.validate_merges {
            if let Err(e) = self.merges.validate() {
                self.abort(&e);
                return Err(e);
            }
        }

        let merges = self.merges.take();
        self.run(|sink| {
            sink.close_element()?;
            write_merge_block(sink, &merges)?;
            sink.close_element()
        })?;

        self.state = WriterState::Finalized;
        log::debug!(
            "finalized worksheet: {} row(s), {} merged range(s)",
            self.row,
            merges.len()
        );
        self.sink.take().ok_or(XlsxError::Aborted)
    }

    /// Current protocol state
    pub fn state(&self) -> WriterState {
        self.state
    }

    /// Number of the last opened row (0 before the first row)
    pub fn current_row(&self) -> u32 {
        self.row
    }

    /// Next free column ordinal in the current row
    pub fn current_column(&self) -> u32 {
        self.column
    }

    /// Merges waiting for finalization
    pub fn pending_merges(&self) -> &MergeRegistry {
        &self.merges
    }

    /// Writer options
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    fn expect_state(&mut self, operation: &'static str, expected: WriterState) -> XlsxResult<()> {
        match self.state {
            state if state == expected => Ok(()),
            WriterState::Aborted => Err(XlsxError::Aborted),
            state => {
                let err = XlsxError::Protocol { operation, state };
                self.abort(&err);
                Err(err)
            }
        }
    }

    /// Run sink operations, aborting the writer if any of them fails
    fn run<T>(&mut self, f: impl FnOnce(&mut S) -> XlsxResult<T>) -> XlsxResult<T> {
        let result = match self.sink.as_mut() {
            Some(sink) => f(sink),
            None => Err(XlsxError::Aborted),
        };
        if let Err(e) = &result {
            self.abort(e);
        }
        result
    }

    fn abort(&mut self, reason: &XlsxError) {
        log::warn!(
            "aborting worksheet at row {}, column {}: {}",
            self.row,
            self.column,
            reason
        );
        self.state = WriterState::Aborted;
    }

    /// Close whatever is still open so the sink is balanced
    ///
    /// Pending merges are flushed unless the writer was aborted.
    fn close_out(&mut self) -> XlsxResult<()> {
        let flush_merges = self.state != WriterState::Aborted;
        let merges = self.merges.take();
        let base = self.base_depth;
        let sink = match self.sink.as_mut() {
            Some(sink) => sink,
            None => return Ok(()),
        };

        // Everything below <sheetData>: an open row, or a cell cut off mid-write
        while sink.depth() > base + 2 {
            sink.close_element()?;
        }
        if sink.depth() == base + 2 {
            sink.close_element()?;
            if flush_merges {
                write_merge_block(sink, &merges)?;
            }
        }
        while sink.depth() > base {
            sink.close_element()?;
        }
        Ok(())
    }
}

impl<S: ElementSink> Drop for SheetWriter<S> {
    fn drop(&mut self) {
        match self.state {
            WriterState::Closed | WriterState::Finalized => {}
            state => {
                log::warn!(
                    "worksheet writer dropped while {}; closing open elements, output is incomplete",
                    state
                );
                if let Err(e) = self.close_out() {
                    log::warn!("failed to close worksheet elements: {}", e);
                }
            }
        }
    }
}

fn write_value_cell<S: ElementSink>(
    sink: &mut S,
    reference: &str,
    style: &str,
    value: &CellValue<'_>,
) -> XlsxResult<()> {
    let literal = value.to_literal();
    match value.kind() {
        ValueKind::Text => write_inline_string(sink, reference, style, &literal),
        ValueKind::Boolean => {
            sink.open_element("c", &[("s", style), ("r", reference), ("t", "b")], &[])?;
            sink.write_leaf("v", &[], &literal)?;
            sink.close_element()
        }
        ValueKind::Number => {
            sink.open_element("c", &[("s", style), ("r", reference)], &[])?;
            sink.write_leaf("v", &[], &literal)?;
            sink.close_element()
        }
    }
}

fn write_inline_string<S: ElementSink>(
    sink: &mut S,
    reference: &str,
    style: &str,
    text: &str,
) -> XlsxResult<()> {
    sink.open_element(
        "c",
        &[("s", style), ("r", reference), ("t", "inlineStr")],
        &[],
    )?;
    sink.open_element("is", &[], &[])?;
    let preserve = text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace);
    let attributes: &[(&str, &str)] = if preserve {
        &[("xml:space", "preserve")]
    } else {
        &[]
    };
    sink.write_leaf("t", attributes, text)?;
    sink.close_element()?;
    sink.close_element()
}

fn write_merge_block<S: ElementSink>(sink: &mut S, merges: &[MergeRange]) -> XlsxResult<()> {
    if merges.is_empty() {
        return Ok(());
    }

    let count = merges.len().to_string();
    sink.open_element("mergeCells", &[("count", count.as_str())], &[])?;
    for merge in merges {
        let reference = merge.to_a1_string();
        sink.write_empty("mergeCell", &[("ref", reference.as_str())])?;
    }
    sink.close_element()
}
