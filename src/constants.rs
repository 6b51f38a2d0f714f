//! Application-wide constants.
//!
//! Centralizes export defaults and the size-model coefficients so the
//! pipeline code stays self-documenting.

// ============================================================================
// Slide Layout
// ============================================================================

/// Horizontal span available to a table on a wide slide, in inches.
/// Fresh column sets divide this evenly across all columns.
pub const TABLE_SPAN_INCHES: f64 = 13.0;

/// Rows shown in the host UI's live preview grid
pub const PREVIEW_ROW_LIMIT: usize = 10;

// ============================================================================
// Export Defaults
// ============================================================================

/// Default slide title when the form field is blank
pub const DEFAULT_TITLE: &str = "Uploaded Data Table";

/// Default output file prefix when the form field is blank
pub const DEFAULT_FILE_PREFIX: &str = "tabledeck-export";

/// Default rows per slide
pub const DEFAULT_ROWS_PER_PAGE: u32 = 20;

/// Default number of pages kept in a preview export
pub const DEFAULT_PREVIEW_PAGE_COUNT: u32 = 2;

/// Default header font size in points
pub const DEFAULT_HEADER_FONT_SIZE: f64 = 13.0;

/// Default body font size in points
pub const DEFAULT_BODY_FONT_SIZE: f64 = 12.0;

/// Default table row height in inches
pub const DEFAULT_ROW_HEIGHT: f64 = 0.45;

/// Default cell margin in inches
pub const DEFAULT_CELL_MARGIN: f64 = 0.04;

/// Default per-file size budget for split exports, in megabytes
pub const DEFAULT_MAX_MB_PER_FILE: f64 = 8.0;

/// Color used when a form color field sanitizes down to nothing
pub const FALLBACK_COLOR: &str = "000000";

// ============================================================================
// Size Estimation Model
// ============================================================================

/// Estimated bytes contributed per rendered table cell
pub const EST_BYTES_PER_CELL: f64 = 35.0;

/// Estimated per-slide overhead in bytes
pub const EST_BYTES_PER_PAGE: f64 = 18_000.0;

/// Estimated fixed deck overhead in bytes
pub const EST_DECK_OVERHEAD_BYTES: f64 = 75_000.0;

/// Bytes per megabyte
pub const BYTES_PER_MB: f64 = 1_048_576.0;
