//! Upload session state.
//!
//! The current rows and column set live in an explicit session object:
//! created on load, replaced wholesale by the next load, and borrowed
//! read-only for the duration of an export. A failed load clears the
//! session instead of leaving partial state behind.

use std::path::Path;

use tracing::info;

use crate::data::{self, Format};
use crate::error::{DeckError, DeckResult};
use crate::types::{ColumnSet, Row};

/// Counts reported after a successful load, for the host's status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows: usize,
    pub columns: usize,
}

/// Currently loaded table plus its column presentation state.
#[derive(Clone, Debug, Default)]
pub struct TableSession {
    rows: Vec<Row>,
    columns: ColumnSet,
}

impl TableSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and replace the session contents. The column set is
    /// rebuilt from the parsed headers with every column included.
    pub fn load_str(&mut self, text: &str, format: Format) -> DeckResult<LoadSummary> {
        match data::parse(text, format) {
            Ok(table) => {
                self.rows = table.rows;
                self.columns = ColumnSet::from_names(table.columns);
                let summary = LoadSummary {
                    rows: self.rows.len(),
                    columns: self.columns.len(),
                };
                info!(rows = summary.rows, columns = summary.columns, "loaded table");
                Ok(summary)
            }
            Err(err) => {
                self.clear();
                Err(err.into())
            }
        }
    }

    /// Read a file and load it, picking the parser from the extension:
    /// `.csv` selects CSV, anything else JSON.
    pub fn load_path(&mut self, path: &Path) -> DeckResult<LoadSummary> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(source) => {
                self.clear();
                return Err(DeckError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        self.load_str(&text, Format::from_path(path))
    }

    pub fn is_loaded(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Mutable access for column edits between exports.
    pub fn columns_mut(&mut self) -> &mut ColumnSet {
        &mut self.columns
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.columns = ColumnSet::default();
    }
}
