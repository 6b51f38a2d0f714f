//! CSV parsing.
//!
//! A deliberately small dialect: comma-delimited, one record per line, at
//! most one leading and one trailing double-quote stripped per cell. There
//! is no support for escaped commas or embedded newlines.

use crate::data::positional_row;
use crate::error::FormatError;
use crate::types::Table;

/// Parse CSV text into the canonical table model.
///
/// Lines are trimmed and blank lines dropped. The first remaining line is
/// the header; every later line becomes a row keyed positionally by header
/// name. Rows shorter than the header read as empty strings for the
/// missing trailing columns.
pub fn parse_csv(text: &str) -> Result<Table, FormatError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(FormatError::CsvTooShort);
    }

    let headers = split_row(lines[0]);
    let rows = lines[1..]
        .iter()
        .map(|line| positional_row(&headers, &split_row(line)))
        .collect();

    Ok(Table {
        columns: headers,
        rows,
    })
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',')
        .map(|cell| strip_quotes(cell.trim()).to_string())
        .collect()
}

/// Strip at most one leading and one trailing double-quote.
fn strip_quotes(cell: &str) -> &str {
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    cell.strip_suffix('"').unwrap_or(cell)
}
