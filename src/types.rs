//! Canonical table model shared by every pipeline stage.
//!
//! Both parsers converge on [`Table`]: an ordered list of column names plus
//! rows keyed by those names. Presentation state lives in [`ColumnSet`],
//! which is rebuilt from the table on every load and edited by the host UI
//! between exports.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::TABLE_SPAN_INCHES;

// ============================================================================
// Rows
// ============================================================================

/// One data record: column name -> cell text.
///
/// Rows are immutable after parsing. Column edits change which fields get
/// read, never the row itself. Keys absent from a row read as `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell text for `column`, or the empty string when the row has no
    /// such key.
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// Format-independent parse result: ordered column names plus data rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

// ============================================================================
// Alignment
// ============================================================================

/// Horizontal cell alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical cell alignment within a table row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl VAlign {
    /// Parse a form value; anything unrecognized falls back to middle.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "top" => VAlign::Top,
            "bottom" => VAlign::Bottom,
            _ => VAlign::Middle,
        }
    }
}

// ============================================================================
// Column Model
// ============================================================================

/// Presentation state for one column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Matches a key of the loaded rows
    pub name: String,
    /// Excluded columns stay in the set but are skipped by every export
    pub included: bool,
    /// Rendered width in inches
    pub width: f64,
    pub align: Align,
}

/// Ordered, mutable list of column specs.
///
/// Mutators look columns up by name and silently ignore names not in the
/// set, mirroring how the host UI only offers edits on existing columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSet {
    specs: Vec<ColumnSpec>,
}

impl ColumnSet {
    /// Build a fresh set from parsed header names: every column included,
    /// left-aligned, widths dividing the slide span evenly.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let width = TABLE_SPAN_INCHES / names.len().max(1) as f64;
        let specs = names
            .into_iter()
            .map(|name| ColumnSpec {
                name,
                included: true,
                width,
                align: Align::Left,
            })
            .collect();
        Self { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.specs.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Included specs in current order.
    pub fn active(&self) -> Vec<&ColumnSpec> {
        self.specs.iter().filter(|spec| spec.included).collect()
    }

    /// Move `name` to the position `target` currently occupies: dragging
    /// left lands before the target, dragging right lands after it. All
    /// other columns keep their relative order. Unknown names and
    /// self-targets are no-ops.
    pub fn move_to(&mut self, name: &str, target: &str) {
        if name == target {
            return;
        }
        let (Some(from), Some(to)) = (self.index_of(name), self.index_of(target)) else {
            return;
        };
        let moved = self.specs.remove(from);
        self.specs.insert(to, moved);
    }

    pub fn set_included(&mut self, name: &str, included: bool) {
        if let Some(spec) = self.get_mut(name) {
            spec.included = included;
        }
    }

    /// Bulk include/exclude toggle (the select-all / deselect-all links).
    pub fn set_all_included(&mut self, included: bool) {
        for spec in &mut self.specs {
            spec.included = included;
        }
    }

    pub fn set_align(&mut self, name: &str, align: Align) {
        if let Some(spec) = self.get_mut(name) {
            spec.align = align;
        }
    }

    /// Width edits arrive as raw text from the host UI. Input that does
    /// not parse to a positive finite number keeps the previous width.
    pub fn set_width_input(&mut self, name: &str, raw: &str) {
        if let Some(spec) = self.get_mut(name) {
            if let Some(width) = parse_width(raw) {
                spec.width = width;
            }
        }
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut ColumnSpec> {
        self.specs.iter_mut().find(|spec| spec.name == name)
    }
}

fn parse_width(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|width| width.is_finite() && *width > 0.0)
}
