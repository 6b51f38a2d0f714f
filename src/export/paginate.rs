//! Row pagination.

use crate::error::ValidationError;
use crate::types::Row;

/// Split rows into contiguous pages of at most `rows_per_page` rows; the
/// final page may be shorter. Pages borrow from the caller's row storage,
/// so no row is copied.
pub fn paginate(rows: &[Row], rows_per_page: u32) -> Result<Vec<&[Row]>, ValidationError> {
    if rows.is_empty() {
        return Err(ValidationError::NoRows);
    }
    // Options normalization already floors to >= 1; clamp again so a bad
    // caller cannot panic chunks().
    let size = rows_per_page.max(1) as usize;
    Ok(rows.chunks(size).collect())
}
