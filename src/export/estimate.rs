//! Output size estimation.
//!
//! A deliberately coarse linear byte model: cells dominate, each page adds
//! fixed slide overhead, and the deck itself has a fixed floor. It only
//! has to be good enough to decide whether a split is warranted, and it
//! must stay monotonic in every input so that decision is reproducible.

use crate::constants::{
    BYTES_PER_MB, EST_BYTES_PER_CELL, EST_BYTES_PER_PAGE, EST_DECK_OVERHEAD_BYTES,
};

/// Predicted output size in megabytes.
pub fn estimate_deck_size_mb(total_rows: usize, active_columns: usize, page_count: usize) -> f64 {
    let bytes = total_rows as f64 * active_columns as f64 * EST_BYTES_PER_CELL
        + page_count as f64 * EST_BYTES_PER_PAGE
        + EST_DECK_OVERHEAD_BYTES;
    bytes / BYTES_PER_MB
}
