use clap::ColorChoice;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::RunSummary;

pub fn print_summary(summary: &RunSummary, color: ColorChoice) {
    let mut table = summary_table(summary);
    match color {
        ColorChoice::Always => {
            table.enforce_styling();
        }
        ColorChoice::Never => {
            table.force_no_tty();
        }
        ColorChoice::Auto => {}
    }
    println!("{table}");
    if !summary.views.skipped.is_empty() {
        println!("Skipped views: {}", summary.views.skipped.join(", "));
    }
}

/// One row per pipeline stage with its headline count.
pub fn summary_table(summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Count"),
        header_cell("Detail"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let stats = &summary.transform;
    table.add_row(vec![
        stage_cell("Extract"),
        Cell::new(summary.rows_extracted),
        Cell::new(format!("rows from {} CSV files", summary.files.len())),
    ]);
    table.add_row(vec![
        stage_cell("Dedupe"),
        count_cell(stats.duplicates_removed, Color::Yellow),
        dim_cell("duplicate rows removed"),
    ]);
    table.add_row(vec![
        stage_cell("Backfill"),
        Cell::new(stats.cells_backfilled),
        dim_cell("stat cells filled within battles"),
    ]);
    table.add_row(vec![
        stage_cell("Integrity"),
        Cell::new(summary.integrity.rows_checked),
        Cell::new("passed").fg(Color::Green),
    ]);
    table.add_row(vec![
        stage_cell("Load"),
        Cell::new(summary.rows_loaded).add_attribute(Attribute::Bold),
        Cell::new(format!("{} rows now in table", summary.fact_rows)),
    ]);
    table.add_row(vec![
        stage_cell("Views"),
        Cell::new(summary.views.created.len()),
        views_cell(summary),
    ]);
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn views_cell(summary: &RunSummary) -> Cell {
    if summary.views.created.is_empty() {
        dim_cell("cumulative view only")
    } else {
        Cell::new(summary.views.created.join(", "))
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn stage_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tourney_model::IntegrityReport;
    use tourney_store::ViewReport;
    use tourney_transform::TransformStats;

    #[test]
    fn table_lists_every_stage() {
        let summary = RunSummary {
            files: vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")],
            rows_extracted: 12,
            transform: TransformStats {
                input_rows: 12,
                duplicates_removed: 2,
                cells_backfilled: 5,
                output_rows: 10,
            },
            integrity: IntegrityReport {
                rows_checked: 10,
                violations: Vec::new(),
            },
            rows_loaded: 10,
            fact_rows: 30,
            views: ViewReport {
                created: vec!["top_used_pokemons".to_string()],
                skipped: Vec::new(),
            },
        };
        let rendered = summary_table(&summary).to_string();
        for expected in [
            "Extract",
            "rows from 2 CSV files",
            "Dedupe",
            "Backfill",
            "passed",
            "30 rows now in table",
            "top_used_pokemons",
        ] {
            assert!(rendered.contains(expected), "missing {expected}");
        }
    }
}
