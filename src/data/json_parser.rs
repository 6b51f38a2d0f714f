//! JSON data parsing.
//!
//! Three accepted shapes, resolved once into a tagged row source before any
//! rows are built:
//!
//! 1. a top-level array whose first element is itself an array — header row
//!    plus positionally mapped data rows,
//! 2. an object with a `rows` array of arrays — same positional treatment,
//! 3. a non-empty array of objects, top-level or under `rows` — columns come
//!    from the first object's key order, rows are used verbatim as records.

use serde_json::Value;

use crate::data::positional_row;
use crate::error::FormatError;
use crate::types::{Row, Table};

/// Row source resolved from the incoming JSON shape.
enum RowSource<'a> {
    /// Header row plus positionally mapped data rows
    Positional {
        header: &'a [Value],
        data: &'a [Value],
    },
    /// Records keyed by the first object's columns
    Records(&'a [Value]),
}

/// Parse JSON text into the canonical table model.
pub fn parse_json(text: &str) -> Result<Table, FormatError> {
    let value: Value = serde_json::from_str(text)?;
    match resolve_shape(&value)? {
        RowSource::Positional { header, data } => Ok(positional_table(header, data)),
        RowSource::Records(records) => records_table(records),
    }
}

fn resolve_shape(value: &Value) -> Result<RowSource<'_>, FormatError> {
    // Shape 1 takes precedence: a top-level array of arrays is always the
    // header-row form, even when an object shape would also fit.
    if let Value::Array(items) = value {
        if let Some(Value::Array(header)) = items.first() {
            return Ok(RowSource::Positional {
                header,
                data: &items[1..],
            });
        }
    }

    // Shapes 2 and 3 share a resolved row source: the top-level array, or
    // the object's `rows` property.
    let source = match value {
        Value::Array(items) => Some(items.as_slice()),
        Value::Object(map) => map
            .get("rows")
            .and_then(Value::as_array)
            .map(|rows| rows.as_slice()),
        _ => None,
    };
    let source = source
        .filter(|items| !items.is_empty())
        .ok_or(FormatError::JsonShape)?;

    match source.first() {
        Some(Value::Array(header)) => Ok(RowSource::Positional {
            header,
            data: &source[1..],
        }),
        Some(Value::Object(_)) => Ok(RowSource::Records(source)),
        _ => Err(FormatError::JsonShape),
    }
}

fn positional_table(header: &[Value], data: &[Value]) -> Table {
    let columns: Vec<String> = header.iter().map(value_to_text).collect();
    let rows = data
        .iter()
        .map(|row| {
            let cells: Vec<String> = row
                .as_array()
                .map(|cells| cells.iter().map(value_to_text).collect())
                .unwrap_or_default();
            positional_row(&columns, &cells)
        })
        .collect();

    Table { columns, rows }
}

fn records_table(records: &[Value]) -> Result<Table, FormatError> {
    // Key order of the first record defines the column order; serde_json's
    // preserve_order feature keeps it as written in the source.
    let columns: Vec<String> = match records.first() {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        _ => return Err(FormatError::JsonShape),
    };

    let rows = records.iter().map(record_row).collect();
    Ok(Table { columns, rows })
}

/// Rows are kept verbatim: every key of the record lands in the row, and
/// non-object records become empty rows whose cells all read as "".
fn record_row(record: &Value) -> Row {
    let mut row = Row::new();
    if let Value::Object(map) = record {
        for (key, value) in map {
            row.insert(key.clone(), value_to_text(value));
        }
    }
    row
}

/// Stringify a JSON value the way cells display it: null reads as empty,
/// arrays join their elements, nested objects stay as compact JSON text.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}
