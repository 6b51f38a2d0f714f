//! Error types for the export pipeline.
//!
//! Three families: [`FormatError`] for malformed input structure,
//! [`ValidationError`] for semantically empty or invalid user-controllable
//! state, and the opaque renderer passthrough carried by
//! [`DeckError::Render`]. Parsing and pre-export validation fail fast and
//! leave no partial state; nothing in this crate retries.

use std::path::PathBuf;
use thiserror::Error;

/// Malformed or structurally unsupported input.
#[derive(Error, Debug)]
pub enum FormatError {
    /// CSV with no header, or a header and zero data rows
    #[error("CSV must include a header row and at least one data row")]
    CsvTooShort,

    /// Unparseable JSON text
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed JSON whose resolved row source is not a non-empty array
    #[error("JSON must be an array of rows or include a non-empty rows array")]
    JsonShape,
}

/// Semantically empty or invalid state under the user's control.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Export requested with no loaded rows
    #[error("no rows to export")]
    NoRows,

    /// Export requested with every column excluded
    #[error("no columns selected")]
    NoColumnsSelected,

    /// Preview requested with a page count that is not a positive integer
    #[error("preview page count must be a positive whole number")]
    InvalidPreviewCount,
}

/// Any failure surfaced by loading or exporting.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// External renderer failure, passed through opaquely. Partitions
    /// rendered before the failure are not rolled back.
    #[error("deck renderer failed for {file_name}: {source}")]
    Render {
        file_name: String,
        #[source]
        source: anyhow::Error,
    },

    /// Upload file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for pipeline operations
pub type DeckResult<T> = Result<T, DeckError>;
