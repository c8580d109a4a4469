//! Tests for merged ranges.

use crate::{assert_well_formed, attribute_values, build_workbook, sheet_xml};
use pretty_assertions::assert_eq;
use sheetstream_xlsx::WriterOptions;

#[test]
fn test_span_writes_fillers_and_one_merge() {
    let bytes = build_workbook(WriterOptions::default(), |sheet, styles| {
        sheet.open_row().unwrap();
        sheet.add_spanned_cell("Quarter", styles.header, 3).unwrap();
        sheet.close_row().unwrap();
    });

    let xml = sheet_xml(&bytes);
    assert_well_formed(&xml);
    assert_eq!(attribute_values(&xml, "c", "r"), ["A1", "B1", "C1"]);
    assert_eq!(attribute_values(&xml, "c", "s"), ["1", "1", "1"]);
    assert_eq!(attribute_values(&xml, "mergeCell", "ref"), ["A1:C1"]);
    assert_eq!(attribute_values(&xml, "mergeCells", "count"), ["1"]);
}

#[test]
fn test_merge_block_follows_sheet_data() {
    let bytes = build_workbook(WriterOptions::default(), |sheet, styles| {
        for _ in 0..3 {
            sheet.open_row().unwrap();
            sheet.add_text("id", styles.plain).unwrap();
            sheet.add_spanned_cell("details", styles.plain, 2).unwrap();
            sheet.close_row().unwrap();
        }
    });

    let xml = sheet_xml(&bytes);
    let data_end = xml.find("</sheetData>").unwrap();
    let merges_start = xml.find("<mergeCells").unwrap();
    assert!(data_end < merges_start);
    assert!(xml.ends_with("</mergeCells></worksheet>"));
    assert_eq!(
        attribute_values(&xml, "mergeCell", "ref"),
        ["B1:C1", "B2:C2", "B3:C3"]
    );
}

#[test]
fn test_no_merges_no_block() {
    let bytes = build_workbook(WriterOptions::default(), |sheet, styles| {
        sheet.open_row().unwrap();
        sheet.add_spanned_cell("single", styles.plain, 1).unwrap();
        sheet.close_row().unwrap();
    });

    let xml = sheet_xml(&bytes);
    assert!(!xml.contains("mergeCell"));
    assert!(xml.ends_with("</sheetData></worksheet>"));
}

#[test]
fn test_span_across_letter_boundary() {
    let bytes = build_workbook(WriterOptions::default(), |sheet, styles| {
        sheet.open_row().unwrap();
        for _ in 0..24 {
            sheet.add_text("", styles.plain).unwrap();
        }
        sheet.add_spanned_cell("wrap", styles.highlighted, 4).unwrap();
        sheet.close_row().unwrap();
    });

    let xml = sheet_xml(&bytes);
    assert_eq!(attribute_values(&xml, "mergeCell", "ref"), ["Y1:AB1"]);
}
