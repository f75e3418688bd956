//! Terminal rendering of query results and scale evaluations.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use inhaler_query::{DisplayRow, QueryResult};
use inhaler_scoring::{Band, CatalogEntry, Scale, ScoreResult, ScoreSelection};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

/// Traffic-light colour of the result row.
fn band_color(band: Band) -> Color {
    match band {
        Band::Low => Color::Green,
        Band::Medium => Color::Yellow,
        Band::High => Color::Red,
    }
}

/// Directory table: brand in bold, dose in its own plain column.
pub fn rows_table(result: &QueryResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Nombre"),
        header_cell("Dosis"),
        header_cell("Principio activo"),
        header_cell("Dispositivo"),
        header_cell("Indicación"),
        header_cell("Laboratorio"),
    ]);
    apply_table_style(&mut table);
    for row in &result.rows {
        table.add_row(vec![
            Cell::new(&row.name.brand).add_attribute(Attribute::Bold),
            Cell::new(&row.name.dose_description),
            Cell::new(&row.active_ingredient),
            Cell::new(&row.device),
            Cell::new(&row.indications),
            Cell::new(&row.marketer),
        ]);
    }
    table
}

/// One tab-separated line per row, then the result count.
pub fn rows_plain(result: &QueryResult) -> String {
    let mut out = String::new();
    for row in &result.rows {
        out.push_str(&plain_line(row));
        out.push('\n');
    }
    out.push_str(&format!("Resultados: {}", result.total));
    out
}

fn plain_line(row: &DisplayRow) -> String {
    [
        row.name.display().as_str(),
        row.active_ingredient.as_str(),
        row.device.as_str(),
        row.indications.as_str(),
        row.marketer.as_str(),
        row.reference_url.as_deref().unwrap_or(""),
    ]
    .join("\t")
}

pub fn devices_table(devices: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Dispositivo")]);
    apply_table_style(&mut table);
    for device in devices {
        table.add_row(vec![*device]);
    }
    table
}

pub fn scales_table(entries: &[CatalogEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Escala"),
        header_cell("Nombre"),
        header_cell("Criterios"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        let criteria = match entry.builtin() {
            Some(scale) => Cell::new(scale.criteria.len()).set_alignment(CellAlignment::Right),
            None => Cell::new("--scale-file").fg(Color::DarkGrey),
        };
        table.add_row(vec![Cell::new(entry.id), Cell::new(entry.name), criteria]);
    }
    table
}

/// Criteria with their points and selection state, followed by the result.
pub fn score_table(scale: &Scale, selection: &ScoreSelection, result: &ScoreResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Criterio"),
        header_cell("Puntos"),
    ]);
    apply_table_style(&mut table);
    for criterion in scale.criteria.iter() {
        let mark = if selection.is_selected(&criterion.id) {
            "✓"
        } else {
            ""
        };
        let mut points =
            Cell::new(criterion.points_label()).set_alignment(CellAlignment::Right);
        if criterion.is_negative {
            points = points.fg(Color::Red);
        }
        table.add_row(vec![
            Cell::new(mark),
            Cell::new(format!("{} ({})", criterion.label, criterion.id)),
            points,
        ]);
    }
    let color = band_color(result.interpretation.band);
    table.add_row(vec![
        Cell::new(""),
        Cell::new(&result.interpretation.label)
            .fg(color)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} puntos", result.score))
            .fg(color)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
    ]);
    table
}

/// `"<score> puntos: <label> (<band>)"`.
pub fn score_plain(result: &ScoreResult) -> String {
    format!(
        "{} puntos: {} ({})",
        result.score, result.interpretation.label, result.interpretation.band
    )
}
