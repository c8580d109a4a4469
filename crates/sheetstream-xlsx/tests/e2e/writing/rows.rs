//! Tests for row and cell output.

use crate::{assert_well_formed, attribute_values, build_workbook, sheet_xml};
use pretty_assertions::assert_eq;
use sheetstream_xlsx::WriterOptions;

#[test]
fn test_rows_are_numbered_from_one() {
    let bytes = build_workbook(WriterOptions::default(), |sheet, styles| {
        for i in 0..4 {
            sheet.open_row().unwrap();
            sheet.add_integer(i, styles.plain).unwrap();
            sheet.close_row().unwrap();
        }
    });

    let xml = sheet_xml(&bytes);
    assert_well_formed(&xml);
    assert_eq!(attribute_values(&xml, "row", "r"), ["1", "2", "3", "4"]);
    assert_eq!(attribute_values(&xml, "c", "r"), ["A1", "A2", "A3", "A4"]);
}

#[test]
fn test_cell_references_follow_columns() {
    let bytes = build_workbook(WriterOptions::default(), |sheet, styles| {
        sheet.open_row().unwrap();
        for col in 0..30 {
            sheet.add_integer(col, styles.plain).unwrap();
        }
        sheet.close_row().unwrap();
    });

    let refs = attribute_values(&sheet_xml(&bytes), "c", "r");
    assert_eq!(refs.len(), 30);
    assert_eq!(refs[0], "A1");
    assert_eq!(refs[25], "Z1");
    assert_eq!(refs[26], "AA1");
    assert_eq!(refs[29], "AD1");
}

#[test]
fn test_value_kinds() {
    let bytes = build_workbook(WriterOptions::default(), |sheet, styles| {
        sheet.open_row().unwrap();
        sheet.add_text("text", styles.plain).unwrap();
        sheet.add_number(-0.25, styles.plain).unwrap();
        sheet.add_integer(1_000_000, styles.plain).unwrap();
        sheet.add_bool(false, styles.plain).unwrap();
        sheet.add_cell(7u32, styles.plain).unwrap();
        sheet.close_row().unwrap();
    });

    let xml = sheet_xml(&bytes);
    assert!(xml.contains(r#"<c s="0" r="A1" t="inlineStr"><is><t>text</t></is></c>"#));
    assert!(xml.contains(r#"<c s="0" r="B1"><v>-0.25</v></c>"#));
    assert!(xml.contains(r#"<c s="0" r="C1"><v>1000000</v></c>"#));
    assert!(xml.contains(r#"<c s="0" r="D1" t="b"><v>0</v></c>"#));
    assert!(xml.contains(r#"<c s="0" r="E1"><v>7</v></c>"#));
}

#[test]
fn test_style_indices_reach_cells() {
    let bytes = build_workbook(WriterOptions::default(), |sheet, styles| {
        sheet.open_row().unwrap();
        sheet.add_text("plain", styles.plain).unwrap();
        sheet.add_text("header", styles.header).unwrap();
        sheet.add_text("bordered", styles.bordered).unwrap();
        sheet.add_text("highlighted", styles.highlighted).unwrap();
        sheet.close_row().unwrap();
    });

    assert_eq!(
        attribute_values(&sheet_xml(&bytes), "c", "s"),
        ["0", "1", "2", "3"]
    );
}

#[test]
fn test_empty_rows_are_kept() {
    let bytes = build_workbook(WriterOptions::default(), |sheet, styles| {
        sheet.open_row().unwrap();
        sheet.close_row().unwrap();
        sheet.open_row().unwrap();
        sheet.add_text("second", styles.plain).unwrap();
        sheet.close_row().unwrap();
    });

    let xml = sheet_xml(&bytes);
    assert!(xml.contains(r#"<row r="1"></row><row r="2">"#));
}

#[test]
fn test_many_rows_stream_through() {
    let bytes = build_workbook(WriterOptions::default(), |sheet, styles| {
        for i in 0..5_000 {
            sheet.open_row().unwrap();
            sheet.add_text("employee", styles.plain).unwrap();
            sheet.add_number(i as f64 * 0.5, styles.bordered).unwrap();
            sheet.close_row().unwrap();
        }
        assert_eq!(sheet.current_row(), 5_000);
    });

    let xml = sheet_xml(&bytes);
    // worksheet + sheetData + 5000 * (row + 2 cells + is + t + v)
    assert_eq!(assert_well_formed(&xml), 2 + 5_000 * 6);
    assert!(xml.contains(r#"<c s="2" r="B5000"><v>2499.5</v></c>"#));
}

#[test]
fn test_special_characters_survive() {
    let text = "Müller & Söhne <GmbH> \"quoted\"";
    let bytes = build_workbook(WriterOptions::default(), |sheet, styles| {
        sheet.open_row().unwrap();
        sheet.add_text(text, styles.plain).unwrap();
        sheet.add_text(" padded ", styles.plain).unwrap();
        sheet.close_row().unwrap();
    });

    let xml = sheet_xml(&bytes);
    assert_well_formed(&xml);

    let mut reader = quick_xml::Reader::from_str(&xml);
    let mut texts = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            quick_xml::events::Event::Text(t) => texts.push(t.unescape().unwrap().into_owned()),
            quick_xml::events::Event::Eof => break,
            _ => {}
        }
    }
    assert_eq!(texts, [text, " padded "]);
    assert!(xml.contains(r#"<t xml:space="preserve"> padded </t>"#));
}
