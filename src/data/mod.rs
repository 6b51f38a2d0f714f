//! Upload format parsing.
//!
//! Parsers for the two supported upload formats. Both converge on the
//! canonical [`Table`] model, so nothing downstream ever branches on the
//! input shape again.
//!
//! ## Error Handling
//!
//! Parsers return [`FormatError`] and never produce partial tables: a
//! failed parse leaves the caller's state untouched.

mod csv_parser;
mod json_parser;

pub use csv_parser::parse_csv;
pub use json_parser::parse_json;

use std::path::Path;

use crate::error::FormatError;
use crate::types::{Row, Table};

/// Supported upload formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    /// Pick a format from a file extension. Only `.csv` (any case) selects
    /// the CSV parser; everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Format::Csv,
            _ => Format::Json,
        }
    }
}

/// Parse raw upload text with the given format hint.
pub fn parse(text: &str, format: Format) -> Result<Table, FormatError> {
    match format {
        Format::Csv => parse_csv(text),
        Format::Json => parse_json(text),
    }
}

/// Build a row by zipping header names with positional cells. Missing
/// trailing cells read as empty strings; cells beyond the header count are
/// dropped. Duplicate header names are written in order, so the last
/// occurrence wins.
pub(crate) fn positional_row(headers: &[String], cells: &[String]) -> Row {
    let mut row = Row::new();
    for (index, header) in headers.iter().enumerate() {
        row.insert(header.clone(), cells.get(index).cloned().unwrap_or_default());
    }
    row
}
