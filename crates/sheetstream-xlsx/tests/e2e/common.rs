//! Common utilities for E2E tests.

use std::io::{Cursor, Read, Seek, Write};

use quick_xml::events::Event;
use quick_xml::Reader;
use sheetstream_xlsx::{PackageSheetWriter, StreamingWorkbook, WriterOptions};

/// Path of the worksheet part inside the package
pub const SHEET_PART: &str = "xl/worksheets/sheet1.xml";

/// Stream a workbook into memory and return the archive bytes.
///
/// The closure receives the sheet writer and the header / default style
/// indices, which is all most tests need.
pub fn build_workbook<F>(options: WriterOptions, fill: F) -> Vec<u8>
where
    F: FnOnce(&mut PackageSheetWriter<Cursor<Vec<u8>>>, Styles),
{
    let mut workbook =
        StreamingWorkbook::create(Cursor::new(Vec::new()), options).expect("create workbook");
    let palette = *workbook.palette();
    fill(
        workbook.sheet_mut(),
        Styles {
            plain: palette.default_style(),
            header: palette.header(),
            bordered: palette.bordered(),
            highlighted: palette.highlighted(),
        },
    );
    workbook.finish().expect("finish workbook").into_inner()
}

/// Palette indices handed to [`build_workbook`] closures
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub struct Styles {
    pub plain: sheetstream_core::StyleId,
    pub header: sheetstream_core::StyleId,
    pub bordered: sheetstream_core::StyleId,
    pub highlighted: sheetstream_core::StyleId,
}

/// Read one part of a package as text.
pub fn read_part<R: Read + Seek>(archive: R, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(archive).expect("valid zip archive");
    let mut part = archive
        .by_name(name)
        .unwrap_or_else(|e| panic!("missing part {name}: {e}"));
    let mut content = String::new();
    part.read_to_string(&mut content).expect("UTF-8 part");
    content
}

/// Read the worksheet part of an in-memory package.
pub fn sheet_xml(bytes: &[u8]) -> String {
    read_part(Cursor::new(bytes), SHEET_PART)
}

/// All part names of a package, sorted.
pub fn part_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip archive");
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

/// Parse a document end to end and check that every start tag is closed.
///
/// Returns the number of elements seen.
pub fn assert_well_formed(xml: &str) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut elements = 0usize;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => {
                depth += 1;
                elements += 1;
            }
            Ok(Event::Empty(_)) => elements += 1,
            Ok(Event::End(_)) => {
                assert!(depth > 0, "unbalanced end tag");
                depth -= 1;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!(
                "malformed XML at position {}: {e}",
                reader.buffer_position()
            ),
        }
    }
    assert_eq!(depth, 0, "unclosed elements at end of document");
    elements
}

/// Extract the values of attribute `name` on every `tag` element, in order.
pub fn attribute_values(xml: &str, tag: &str, name: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut values = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.name().as_ref() == tag.as_bytes() => {
                for attr in e.attributes().flatten() {
                    if attr.key.as_ref() == name.as_bytes() {
                        let value = attr.unescape_value().expect("attribute value");
                        values.push(value.into_owned());
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML: {e}"),
        }
    }
    values
}

/// Writer that fails once more than `limit` bytes have been written.
#[allow(dead_code)]
pub struct LimitedWriter {
    inner: Cursor<Vec<u8>>,
    limit: usize,
}

#[allow(dead_code)]
impl LimitedWriter {
    pub fn new(limit: usize) -> Self {
        Self {
            inner: Cursor::new(Vec::new()),
            limit,
        }
    }
}

impl Write for LimitedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.inner.get_ref().len() + buf.len() > self.limit {
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "write limit reached",
            ));
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

impl Seek for LimitedWriter {
    fn seek(&mut self, pos: std::io::SeekFrom) -> std::io::Result<u64> {
        self.inner.seek(pos)
    }
}
