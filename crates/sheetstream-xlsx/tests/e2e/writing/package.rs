//! Tests for package structure.

use std::io::Cursor;

use crate::{assert_well_formed, build_workbook, part_names, read_part, sheet_xml, LimitedWriter};
use pretty_assertions::assert_eq;
use sheetstream_xlsx::{StreamingWorkbook, WriterOptions, WriterState, XlsxError};

#[test]
fn test_package_parts() {
    let bytes = build_workbook(WriterOptions::default(), |_, _| {});

    assert_eq!(
        part_names(&bytes),
        [
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/_rels/workbook.xml.rels",
            "xl/styles.xml",
            "xl/workbook.xml",
            "xl/worksheets/sheet1.xml",
        ]
    );
    for part in part_names(&bytes) {
        assert_well_formed(&read_part(Cursor::new(&bytes), &part));
    }
}

#[test]
fn test_parts_reference_each_other() {
    let bytes = build_workbook(WriterOptions::default(), |_, _| {});

    let types = read_part(Cursor::new(&bytes), "[Content_Types].xml");
    assert!(types.contains(r#"PartName="/xl/worksheets/sheet1.xml""#));
    assert!(types.contains(r#"PartName="/xl/styles.xml""#));

    let rels = read_part(Cursor::new(&bytes), "xl/_rels/workbook.xml.rels");
    assert!(rels.contains(r#"Id="rId1""#) && rels.contains(r#"Target="worksheets/sheet1.xml""#));
    assert!(rels.contains(r#"Target="styles.xml""#));

    let workbook = read_part(Cursor::new(&bytes), "xl/workbook.xml");
    assert!(workbook.contains("<bookViews>"));
    assert!(workbook.contains(r#"<sheet name="Sheet1" sheetId="1" r:id="rId1"/>"#));
}

#[test]
fn test_stylesheet_has_palette_formats() {
    let bytes = build_workbook(WriterOptions::default(), |_, _| {});

    let styles = read_part(Cursor::new(&bytes), "xl/styles.xml");
    assert!(styles.contains(r#"<cellXfs count="4">"#));
    assert!(styles.contains(r#"<fgColor rgb="FF2B85C8"/>"#));
}

#[test]
fn test_long_sheet_name() {
    let options = WriterOptions::new().sheet_name("Working hours of the whole department");
    let bytes = build_workbook(options, |_, _| {});

    let workbook = read_part(Cursor::new(&bytes), "xl/workbook.xml");
    assert!(workbook.contains(r#"name="Working hours of the whole d...""#), "{workbook}");
}

#[test]
fn test_create_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.xlsx");

    let mut workbook = StreamingWorkbook::create_file(&path, WriterOptions::default()).unwrap();
    let header = workbook.palette().header();
    let sheet = workbook.sheet_mut();
    sheet.open_row().unwrap();
    sheet.add_text("on disk", header).unwrap();
    sheet.close_row().unwrap();
    workbook.finish().unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let xml = read_part(file, "xl/worksheets/sheet1.xml");
    assert!(xml.contains("<t>on disk</t>"));
}

#[test]
fn test_dropped_workbook_still_closes_archive() {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut workbook =
            StreamingWorkbook::create(&mut buffer, WriterOptions::default()).unwrap();
        let style = workbook.palette().default_style();
        let sheet = workbook.sheet_mut();
        sheet.open_row().unwrap();
        sheet.add_spanned_cell("unfinished", style, 2).unwrap();
        // Dropped while the row is open
    }

    let bytes = buffer.into_inner();
    let xml = sheet_xml(&bytes);
    assert_well_formed(&xml);
    assert!(xml.ends_with(
        r#"</row></sheetData><mergeCells count="1"><mergeCell ref="A1:B1"/></mergeCells></worksheet>"#
    ));
}

#[test]
fn test_write_failure_aborts_writer() {
    let options = WriterOptions::new().compression(zip::CompressionMethod::Stored);
    let mut workbook = StreamingWorkbook::create(LimitedWriter::new(64 * 1024), options).unwrap();
    let style = workbook.palette().default_style();
    let sheet = workbook.sheet_mut();

    let failure = (0..10_000).find_map(|_| {
        let result = sheet
            .open_row()
            .and_then(|_| sheet.add_text(&"x".repeat(100), style))
            .and_then(|_| sheet.close_row());
        result.err()
    });

    let err = failure.expect("the write limit is reached");
    assert!(err.is_fatal());
    assert_eq!(sheet.state(), WriterState::Aborted);
    assert!(matches!(sheet.open_row(), Err(XlsxError::Aborted)));
    assert!(matches!(workbook.finish(), Err(XlsxError::Aborted)));
}
