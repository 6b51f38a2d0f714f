//! Deck renderer contract and progress surface.
//!
//! The core never encodes the output file format itself. It hands fully
//! styled slide specs to an external renderer, one file per call, and
//! awaits each call before starting the next: the renderer is a serialized,
//! non-reentrant resource, which is why [`DeckRenderer::render`] takes
//! `&mut self`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::{Align, VAlign};

/// Content and styling for one table cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyledCell {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    /// 6-hex-digit text color
    pub color: String,
    /// 6-hex-digit fill color
    pub fill: String,
    pub align: Align,
    pub font_size: f64,
}

/// Table frame styling shared by every slide of an export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableFrame {
    /// 6-hex-digit border color
    pub border_color: String,
    /// Row height in inches
    pub row_height: f64,
    /// Cell margin in inches
    pub cell_margin: f64,
    pub valign: VAlign,
    pub auto_fit: bool,
}

/// One slide: a titled, styled table plus optional speaker notes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideSpec {
    pub title: String,
    /// Corner label, e.g. "Slide 2 of 5"
    pub counter: String,
    /// Header row first, then one row per data row
    pub table: Vec<Vec<StyledCell>>,
    /// Width hints in inches, one per active column
    pub column_widths: Vec<f64>,
    pub frame: TableFrame,
    pub notes: Option<String>,
}

/// One output file handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckRequest {
    pub file_name: String,
    pub slides: Vec<SlideSpec>,
}

/// External collaborator that encodes one binary deck artifact per call.
///
/// Failures are opaque to the core; it wraps them in
/// [`DeckError::Render`](crate::error::DeckError::Render) and aborts the
/// remaining partitions without retrying.
#[async_trait]
pub trait DeckRenderer {
    async fn render(&mut self, request: DeckRequest) -> anyhow::Result<()>;
}

/// Progress reporting surface: a 0..=100 percentage plus a label.
pub trait ProgressSink {
    fn update(&mut self, percent: u32, label: &str);
}

/// Discards all progress updates.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn update(&mut self, _percent: u32, _label: &str) {}
}
