//! Export configuration.
//!
//! The host UI hands over raw form strings; [`ExportForm::normalize`]
//! coerces them into an immutable [`ExportOptions`] snapshot taken once per
//! export. Later form edits never affect an in-flight export.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{
    DEFAULT_BODY_FONT_SIZE, DEFAULT_CELL_MARGIN, DEFAULT_FILE_PREFIX, DEFAULT_HEADER_FONT_SIZE,
    DEFAULT_MAX_MB_PER_FILE, DEFAULT_PREVIEW_PAGE_COUNT, DEFAULT_ROWS_PER_PAGE,
    DEFAULT_ROW_HEIGHT, DEFAULT_TITLE, FALLBACK_COLOR,
};
use crate::types::VAlign;

/// Immutable per-export configuration snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub title: String,
    /// Output file prefix; any trailing `.pptx` has already been stripped
    pub file_prefix: String,
    /// Floored to >= 1 by normalization
    pub rows_per_page: u32,
    /// `None` when the configured form value is not a positive whole
    /// number; preview exports reject that instead of silently coercing
    pub preview_page_count: Option<u32>,
    pub header_fill: String,
    pub header_text: String,
    pub body_fill: String,
    pub body_text: String,
    pub border_color: String,
    pub header_font_size: f64,
    pub body_font_size: f64,
    pub header_bold: bool,
    pub body_bold: bool,
    pub body_italic: bool,
    /// Table row height in inches
    pub row_height: f64,
    /// Cell margin in inches
    pub cell_margin: f64,
    pub valign: VAlign,
    pub auto_fit: bool,
    pub include_notes: bool,
    pub split_export: bool,
    /// Clamped to >= 1.0 by normalization
    pub max_mb_per_file: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            preview_page_count: Some(DEFAULT_PREVIEW_PAGE_COUNT),
            header_fill: "334155".to_string(),
            header_text: "FFFFFF".to_string(),
            body_fill: "FFFFFF".to_string(),
            body_text: "111827".to_string(),
            border_color: "CBD5E1".to_string(),
            header_font_size: DEFAULT_HEADER_FONT_SIZE,
            body_font_size: DEFAULT_BODY_FONT_SIZE,
            header_bold: true,
            body_bold: false,
            body_italic: false,
            row_height: DEFAULT_ROW_HEIGHT,
            cell_margin: DEFAULT_CELL_MARGIN,
            valign: VAlign::Middle,
            auto_fit: false,
            include_notes: false,
            split_export: false,
            max_mb_per_file: DEFAULT_MAX_MB_PER_FILE,
        }
    }
}

/// Raw option input as captured from a host form. Every field is text,
/// exactly as a UI would hand it over; [`normalize`](Self::normalize) owns
/// all coercion rules and never fails.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportForm {
    pub title: String,
    pub file_prefix: String,
    pub rows_per_page: String,
    pub preview_page_count: String,
    pub header_fill: String,
    pub header_text: String,
    pub body_fill: String,
    pub body_text: String,
    pub border_color: String,
    pub header_font_size: String,
    pub body_font_size: String,
    /// `"bold"` or `"normal"`
    pub header_weight: String,
    /// `"bold"` or `"normal"`
    pub body_weight: String,
    /// `"true"` or `"false"`
    pub body_italic: String,
    pub row_height: String,
    pub cell_margin: String,
    /// `"top"`, `"middle"` or `"bottom"`
    pub valign: String,
    /// `"true"` or `"false"`
    pub auto_fit: String,
    /// `"true"` or `"false"`
    pub include_notes: String,
    /// `"true"` or `"false"`
    pub split_export: String,
    pub max_mb_per_file: String,
}

impl ExportForm {
    /// Coerce every field, falling back per-field on malformed input.
    /// Idempotent: normalizing the same form twice yields equal options.
    pub fn normalize(&self) -> ExportOptions {
        ExportOptions {
            title: non_empty(self.title.trim(), DEFAULT_TITLE),
            file_prefix: strip_deck_extension(&non_empty(
                self.file_prefix.trim(),
                DEFAULT_FILE_PREFIX,
            )),
            rows_per_page: to_number(&self.rows_per_page, f64::from(DEFAULT_ROWS_PER_PAGE))
                .floor()
                .max(1.0) as u32,
            preview_page_count: to_positive_whole(&self.preview_page_count),
            header_fill: sanitize_hex(&self.header_fill),
            header_text: sanitize_hex(&self.header_text),
            body_fill: sanitize_hex(&self.body_fill),
            body_text: sanitize_hex(&self.body_text),
            border_color: sanitize_hex(&self.border_color),
            header_font_size: to_number(&self.header_font_size, DEFAULT_HEADER_FONT_SIZE),
            body_font_size: to_number(&self.body_font_size, DEFAULT_BODY_FONT_SIZE),
            header_bold: self.header_weight.trim() == "bold",
            body_bold: self.body_weight.trim() == "bold",
            body_italic: self.body_italic.trim() == "true",
            row_height: to_number(&self.row_height, DEFAULT_ROW_HEIGHT),
            cell_margin: to_number(&self.cell_margin, DEFAULT_CELL_MARGIN),
            valign: VAlign::parse(&self.valign),
            auto_fit: self.auto_fit.trim() == "true",
            include_notes: self.include_notes.trim() == "true",
            split_export: self.split_export.trim() == "true",
            max_mb_per_file: to_number(&self.max_mb_per_file, DEFAULT_MAX_MB_PER_FILE).max(1.0),
        }
    }
}

/// Keep only hex digits, truncate to six, uppercase. Input that sanitizes
/// down to nothing coerces to solid black.
pub fn sanitize_hex(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(char::is_ascii_hexdigit)
        .take(6)
        .collect();
    if cleaned.is_empty() {
        if !value.is_empty() {
            warn!(input = %value, "malformed color input, using fallback");
        }
        FALLBACK_COLOR.to_string()
    } else {
        cleaned.to_ascii_uppercase()
    }
}

/// Numeric form coercion: parse as a finite float or fall back.
pub fn to_number(value: &str, fallback: f64) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .unwrap_or(fallback)
}

/// Positive-whole-number coercion: the trimmed value must be all ASCII
/// digits and parse to at least 1.
pub fn to_positive_whole(value: &str) -> Option<u32> {
    let normalized = value.trim();
    if normalized.is_empty() || !normalized.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    normalized.parse::<u32>().ok().filter(|number| *number > 0)
}

fn non_empty(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn strip_deck_extension(prefix: &str) -> String {
    prefix.strip_suffix(".pptx").unwrap_or(prefix).to_string()
}
