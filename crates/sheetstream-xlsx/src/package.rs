//! Single-sheet XLSX package
//!
//! The fixed parts (content types, relationships, workbook, styles) are
//! written as soon as the package is created. The worksheet part is started
//! last and stays open, so rows stream straight into the zip entry.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use sheetstream_core::{is_xml_char, StylePalette};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::{XlsxError, XlsxResult};
use crate::options::WriterOptions;
use crate::sink::XmlSink;
use crate::styles::PaletteStylesheet;
use crate::writer::SheetWriter;

const WORKSHEET_PART: &str = "xl/worksheets/sheet1.xml";

/// Sheet writer that streams into a zip entry
pub type PackageSheetWriter<W> = SheetWriter<XmlSink<ZipWriter<W>>>;

/// Single-sheet workbook written in one forward pass
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use sheetstream_xlsx::{StreamingWorkbook, WriterOptions};
///
/// let mut workbook =
///     StreamingWorkbook::create(Cursor::new(Vec::new()), WriterOptions::new().sheet_name("Team"))
///         .unwrap();
/// let header = workbook.palette().header();
///
/// let sheet = workbook.sheet_mut();
/// sheet.open_row().unwrap();
/// sheet.add_spanned_cell("Name", header, 2).unwrap();
/// sheet.close_row().unwrap();
///
/// let bytes = workbook.finish().unwrap().into_inner();
/// assert!(bytes.starts_with(b"PK"));
/// ```
pub struct StreamingWorkbook<W: Write + Seek> {
    sheet: PackageSheetWriter<W>,
    palette: StylePalette,
}

impl StreamingWorkbook<File> {
    /// Create the package in a new file
    pub fn create_file<P: AsRef<Path>>(path: P, options: WriterOptions) -> XlsxResult<Self> {
        let file = File::create(path)?;
        Self::create(file, options)
    }
}

impl<W: Write + Seek> StreamingWorkbook<W> {
    /// Write the fixed parts and open the worksheet for rows
    pub fn create(writer: W, options: WriterOptions) -> XlsxResult<Self> {
        if let Some(c) = options.sheet_name.chars().find(|&c| !is_xml_char(c)) {
            return Err(XlsxError::InvalidCharacter(c));
        }

        let mut zip = ZipWriter::new(writer);
        let file_options = SimpleFileOptions::default().compression_method(options.compression);

        let stylesheet = PaletteStylesheet::new();
        let palette = stylesheet.register();

        // Write [Content_Types].xml
        write_content_types(&mut zip, file_options)?;

        // Write _rels/.rels
        write_root_rels(&mut zip, file_options)?;

        // Write xl/workbook.xml
        write_workbook_xml(&mut zip, file_options, &options.effective_sheet_name())?;

        // Write xl/_rels/workbook.xml.rels
        write_workbook_rels(&mut zip, file_options)?;

        // Write xl/styles.xml
        zip.start_file("xl/styles.xml", file_options)?;
        zip.write_all(stylesheet.to_styles_xml().as_bytes())?;

        zip.start_file(WORKSHEET_PART, file_options)?;
        log::debug!(
            "created package for sheet '{}' ({:?})",
            options.effective_sheet_name(),
            options.compression
        );

        let sheet = SheetWriter::open(XmlSink::new(zip)?, options)?;
        Ok(Self { sheet, palette })
    }

    /// Style indices registered in `xl/styles.xml`
    pub fn palette(&self) -> &StylePalette {
        &self.palette
    }

    /// The worksheet writer
    pub fn sheet(&self) -> &PackageSheetWriter<W> {
        &self.sheet
    }

    /// The worksheet writer, for adding rows and cells
    pub fn sheet_mut(&mut self) -> &mut PackageSheetWriter<W> {
        &mut self.sheet
    }

    /// Finalize the worksheet, close the archive and hand back the writer
    pub fn finish(self) -> XlsxResult<W> {
        let sink = self.sheet.finalize()?;
        let zip = sink.into_inner()?;
        Ok(zip.finish()?)
    }
}

fn write_content_types<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: SimpleFileOptions,
) -> XlsxResult<()> {
    zip.start_file("[Content_Types].xml", options)?;

    let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
    <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

    zip.write_all(content.as_bytes())?;
    Ok(())
}

fn write_root_rels<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: SimpleFileOptions,
) -> XlsxResult<()> {
    zip.start_file("_rels/.rels", options)?;

    let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

    zip.write_all(content.as_bytes())?;
    Ok(())
}

fn write_workbook_xml<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: SimpleFileOptions,
    sheet_name: &str,
) -> XlsxResult<()> {
    zip.start_file("xl/workbook.xml", options)?;

    let content = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <bookViews>
        <workbookView/>
    </bookViews>
    <sheets>
        <sheet name="{}" sheetId="1" r:id="rId1"/>
    </sheets>
</workbook>"#,
        escape_xml(sheet_name)
    );

    zip.write_all(content.as_bytes())?;
    Ok(())
}

fn write_workbook_rels<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: SimpleFileOptions,
) -> XlsxResult<()> {
    zip.start_file("xl/_rels/workbook.xml.rels", options)?;

    let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

    zip.write_all(content.as_bytes())?;
    Ok(())
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
