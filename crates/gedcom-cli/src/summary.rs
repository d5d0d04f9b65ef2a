use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gedcom_cli::commands::{CanonicalRow, CoordinateRow, TraditionRow};

pub fn print_canonical(input_label: &str, rows: &[CanonicalRow]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell(input_label), header_cell("Canonical")]);
    apply_table_style(&mut table);
    for row in rows {
        let canonical = if row.canonical == row.input {
            Cell::new(&row.canonical)
        } else {
            Cell::new(&row.canonical).fg(Color::Green)
        };
        table.add_row(vec![Cell::new(&row.input), canonical]);
    }
    println!("{table}");
}

pub fn print_values(rows: &[(String, String)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Label")]);
    apply_table_style(&mut table);
    for (code, label) in rows {
        table.add_row(vec![code, label]);
    }
    println!("{table}");
}

pub fn print_coordinates(rows: &[CoordinateRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Degrees"),
        header_cell("GEDCOM"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in rows {
        let (degrees, gedcom) = match (row.degrees, &row.gedcom) {
            (Some(degrees), Some(gedcom)) => (Cell::new(degrees), Cell::new(gedcom)),
            _ => (dim_cell("-"), dim_cell("-")),
        };
        table.add_row(vec![Cell::new(&row.input), degrees, gedcom]);
    }
    println!("{table}");
}

pub fn print_traditions(rows: &[TraditionRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Name"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.key),
            Cell::new(&row.name),
            Cell::new(&row.description),
        ]);
    }
    println!("{table}");
}

/// Derived records as GEDCOM text, one record after another.
pub fn print_names(names: &[String]) {
    for name in names {
        println!("{name}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
