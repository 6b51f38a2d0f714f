//! Slide spec construction.
//!
//! Turns pages of canonical rows into the styled cell grids the deck
//! renderer consumes: header styling from the header options, body styling
//! from the body options, alignment and width from each column spec.

use crate::constants::PREVIEW_ROW_LIMIT;
use crate::export::options::ExportOptions;
use crate::render::{SlideSpec, StyledCell, TableFrame};
use crate::session::TableSession;
use crate::types::{ColumnSpec, Row};

/// Fixed speaker-notes blurb attached when notes are enabled.
const SPEAKER_NOTES: &str = "Generated from uploaded data. Column order, inclusion, \
widths, and styles were customized in the table builder.";

/// Header row followed by one styled row per data row.
pub fn build_table_cells(
    rows: &[Row],
    active: &[&ColumnSpec],
    options: &ExportOptions,
) -> Vec<Vec<StyledCell>> {
    let header: Vec<StyledCell> = active
        .iter()
        .map(|column| StyledCell {
            text: column.name.clone(),
            bold: options.header_bold,
            italic: false,
            color: options.header_text.clone(),
            fill: options.header_fill.clone(),
            align: column.align,
            font_size: options.header_font_size,
        })
        .collect();

    let mut table = Vec::with_capacity(rows.len() + 1);
    table.push(header);
    table.extend(rows.iter().map(|row| body_row(row, active, options)));
    table
}

fn body_row(row: &Row, active: &[&ColumnSpec], options: &ExportOptions) -> Vec<StyledCell> {
    active
        .iter()
        .map(|column| StyledCell {
            text: row.get(&column.name).to_string(),
            bold: options.body_bold,
            italic: options.body_italic,
            color: options.body_text.clone(),
            fill: options.body_fill.clone(),
            align: column.align,
            font_size: options.body_font_size,
        })
        .collect()
}

/// Slides for one output file. `part` is 1-indexed; the part suffix only
/// appears when the export spans multiple files.
pub fn build_slides(
    pages: &[&[Row]],
    active: &[&ColumnSpec],
    options: &ExportOptions,
    part: usize,
    part_count: usize,
) -> Vec<SlideSpec> {
    let title = if part_count > 1 {
        format!("{} (Part {} of {})", options.title, part, part_count)
    } else {
        options.title.clone()
    };
    let column_widths: Vec<f64> = active.iter().map(|column| column.width).collect();
    let frame = TableFrame {
        border_color: options.border_color.clone(),
        row_height: options.row_height,
        cell_margin: options.cell_margin,
        valign: options.valign,
        auto_fit: options.auto_fit,
    };

    pages
        .iter()
        .enumerate()
        .map(|(index, page)| SlideSpec {
            title: title.clone(),
            counter: format!("Slide {} of {}", index + 1, pages.len()),
            table: build_table_cells(page, active, options),
            column_widths: column_widths.clone(),
            frame: frame.clone(),
            notes: options.include_notes.then(|| SPEAKER_NOTES.to_string()),
        })
        .collect()
}

/// Recompute the host preview grid from the current model and options.
///
/// Idempotent and safe to call on every option or column change. Returns
/// `None` until data is loaded and at least one column is included.
pub fn preview_table(
    session: &TableSession,
    options: &ExportOptions,
) -> Option<Vec<Vec<StyledCell>>> {
    let active = session.columns().active();
    if active.is_empty() || !session.is_loaded() {
        return None;
    }
    let limit = session.rows().len().min(PREVIEW_ROW_LIMIT);
    Some(build_table_cells(&session.rows()[..limit], &active, options))
}
