//! Example: stream a small team report into an xlsx file

use sheetstream::prelude::*;

struct Member {
    name: &'static str,
    role: &'static str,
    hours: f64,
    on_call: bool,
}

const TEAM: [Member; 3] = [
    Member {
        name: "Alice",
        role: "Backend",
        hours: 38.5,
        on_call: true,
    },
    Member {
        name: "Bob",
        role: "Frontend",
        hours: 40.0,
        on_call: false,
    },
    Member {
        name: "Carla",
        role: "Operations",
        hours: 52.25,
        on_call: true,
    },
];

fn main() -> XlsxResult<()> {
    let path = std::env::temp_dir().join("team_report.xlsx");
    let options = WriterOptions::new().sheet_name("Team report");
    let mut workbook = StreamingWorkbook::create_file(&path, options)?;
    let palette = *workbook.palette();
    let sheet = workbook.sheet_mut();

    // Title row spans the whole table
    sheet.open_row()?;
    sheet.add_spanned_cell("Weekly hours", palette.header(), 4)?;
    sheet.close_row()?;

    // Header row
    sheet.open_row()?;
    for title in ["Name", "Role", "Hours", "On call"] {
        sheet.add_text(title, palette.header())?;
    }
    sheet.close_row()?;

    // Data rows, overtime highlighted
    let mut total = 0.0;
    for member in &TEAM {
        let hours_style = if member.hours > 40.0 {
            palette.highlighted()
        } else {
            palette.bordered()
        };

        sheet.open_row()?;
        sheet.add_text(member.name, palette.bordered())?;
        sheet.add_text(member.role, palette.bordered())?;
        sheet.add_number(member.hours, hours_style)?;
        sheet.add_bool(member.on_call, palette.bordered())?;
        sheet.close_row()?;
        total += member.hours;
    }

    // Total row
    sheet.open_row()?;
    sheet.add_spanned_cell("Total", palette.header(), 2)?;
    sheet.add_number(total, palette.header())?;
    sheet.close_row()?;

    let rows = sheet.current_row();
    let merges = sheet.pending_merges().len();
    workbook.finish()?;

    println!(
        "Wrote {} rows with {} merged range(s) to {}",
        rows,
        merges,
        path.display()
    );
    Ok(())
}
