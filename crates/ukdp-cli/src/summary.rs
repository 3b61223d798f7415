//! Run summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    match &summary.database {
        Some(path) => println!("Database: {}", path.display()),
        None => println!("Database: (dry run, nothing written)"),
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Record"), header_cell("Count")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![Cell::new("Users loaded"), Cell::new(summary.users_loaded)]);
    table.add_row(vec![
        Cell::new("Users rejected"),
        count_cell(summary.users_rejected, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Logins loaded"),
        Cell::new(summary.logins_loaded),
    ]);
    table.add_row(vec![
        Cell::new("Logins dropped (no matching user)"),
        count_cell(summary.logins_dropped_unresolved, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Logins dropped (bad timestamp)"),
        count_cell(summary.logins_dropped_bad_timestamp, Color::Yellow),
    ]);

    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(color)
    }
}
