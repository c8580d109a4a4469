//! Fixed stylesheet (styles.xml)
//!
//! The document carries exactly four cell formats. Component tables are
//! static; only their order matters, since the cell formats point into them
//! by position.

use sheetstream_core::{PaletteStyle, StyleId, StylePalette};

const SPREADSHEETML_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

/// Font table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FontDef {
    bold: bool,
    argb: Option<&'static str>,
}

/// Fill table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FillDef {
    None,
    Gray125,
    Solid(&'static str),
}

/// Border table entry: thin on all four edges, or nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BorderDef {
    None,
    ThinAll,
}

/// One `<xf>` of `cellXfs`, as positions in the component tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellFormatDef {
    font_id: u32,
    fill_id: u32,
    border_id: u32,
}

const FONTS: [FontDef; 2] = [
    FontDef {
        bold: false,
        argb: None,
    },
    FontDef {
        bold: true,
        argb: Some("FFFFFFFF"),
    },
];

// The first two fills are reserved by the format and must be none / gray125.
const FILLS: [FillDef; 4] = [
    FillDef::None,
    FillDef::Gray125,
    FillDef::Solid("FF2B85C8"),
    FillDef::Solid("FFFF0000"),
];

const BORDERS: [BorderDef; 2] = [BorderDef::None, BorderDef::ThinAll];

/// Stylesheet holding the four palette formats
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteStylesheet;

impl PaletteStylesheet {
    /// Create the stylesheet
    pub fn new() -> Self {
        Self
    }

    /// Register the palette and get the index of every slot
    ///
    /// Formats are registered in [`PaletteStyle::ALL`] order, so the indices are
    /// stable for every document.
    pub fn register(&self) -> StylePalette {
        let id = |style: PaletteStyle| {
            let index = PaletteStyle::ALL
                .iter()
                .position(|&s| s == style)
                .unwrap_or(0);
            StyleId::new(index as u32)
        };
        StylePalette::new(
            id(PaletteStyle::Default),
            id(PaletteStyle::Header),
            id(PaletteStyle::Bordered),
            id(PaletteStyle::Highlighted),
        )
    }

    fn format_for(style: PaletteStyle) -> CellFormatDef {
        match style {
            PaletteStyle::Default => CellFormatDef {
                font_id: 0,
                fill_id: 0,
                border_id: 0,
            },
            PaletteStyle::Header => CellFormatDef {
                font_id: 1,
                fill_id: 2,
                border_id: 0,
            },
            PaletteStyle::Bordered => CellFormatDef {
                font_id: 0,
                fill_id: 0,
                border_id: 1,
            },
            PaletteStyle::Highlighted => CellFormatDef {
                font_id: 0,
                fill_id: 3,
                border_id: 1,
            },
        }
    }

    /// Render `xl/styles.xml`
    pub fn to_styles_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(&format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="{}">"#,
            SPREADSHEETML_NS
        ));

        // Fonts
        xml.push_str(&format!("\n  <fonts count=\"{}\">", FONTS.len()));
        for font in &FONTS {
            xml.push_str("\n    ");
            xml.push_str(&write_font(font));
        }
        xml.push_str("\n  </fonts>");

        // Fills
        xml.push_str(&format!("\n  <fills count=\"{}\">", FILLS.len()));
        for fill in &FILLS {
            xml.push_str("\n    ");
            xml.push_str(&write_fill(fill));
        }
        xml.push_str("\n  </fills>");

        // Borders
        xml.push_str(&format!("\n  <borders count=\"{}\">", BORDERS.len()));
        for border in &BORDERS {
            xml.push_str("\n    ");
            xml.push_str(&write_border(border));
        }
        xml.push_str("\n  </borders>");

        // cellStyleXfs (required)
        xml.push_str(
            r#"
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        // cellXfs, in palette order
        xml.push_str(&format!(
            "\n  <cellXfs count=\"{}\">",
            PaletteStyle::ALL.len()
        ));
        for style in PaletteStyle::ALL {
            xml.push_str("\n    ");
            xml.push_str(&write_xf(Self::format_for(style)));
        }
        xml.push_str("\n  </cellXfs>");

        // cellStyles (required)
        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>"#,
        );

        xml.push_str("\n</styleSheet>");
        xml
    }
}

fn write_font(font: &FontDef) -> String {
    let mut s = String::from("<font>");
    if font.bold {
        s.push_str("<b/>");
    }
    s.push_str("<sz val=\"11\"/>");
    if let Some(argb) = font.argb {
        s.push_str(&format!("<color rgb=\"{}\"/>", argb));
    }
    s.push_str("<name val=\"Calibri\"/>");
    s.push_str("</font>");
    s
}

fn write_fill(fill: &FillDef) -> String {
    match fill {
        FillDef::None => "<fill><patternFill patternType=\"none\"/></fill>".to_string(),
        FillDef::Gray125 => "<fill><patternFill patternType=\"gray125\"/></fill>".to_string(),
        FillDef::Solid(argb) => format!(
            "<fill><patternFill patternType=\"solid\"><fgColor rgb=\"{}\"/><bgColor indexed=\"64\"/></patternFill></fill>",
            argb
        ),
    }
}

fn write_border(border: &BorderDef) -> String {
    match border {
        BorderDef::None => {
            "<border><left/><right/><top/><bottom/><diagonal/></border>".to_string()
        }
        BorderDef::ThinAll => {
            let mut s = String::from("<border>");
            for edge in ["left", "right", "top", "bottom"] {
                s.push_str(&format!(
                    "<{edge} style=\"thin\"><color indexed=\"64\"/></{edge}>"
                ));
            }
            s.push_str("<diagonal/></border>");
            s
        }
    }
}

fn write_xf(format: CellFormatDef) -> String {
    let mut s = format!(
        "<xf numFmtId=\"0\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"",
        format.font_id, format.fill_id, format.border_id
    );
    if format.font_id != 0 {
        s.push_str(" applyFont=\"1\"");
    }
    if format.fill_id != 0 {
        s.push_str(" applyFill=\"1\"");
    }
    if format.border_id != 0 {
        s.push_str(" applyBorder=\"1\"");
    }
    s.push_str("/>");
    s
}
