//! Export orchestration.
//!
//! Sequences the pipeline: validate -> paginate -> (preview-truncate) ->
//! estimate -> partition -> render, one partition at a time. There is no
//! retry and no rollback: a render failure aborts the remaining partitions
//! and files already produced stay on disk.
//!
//! The session is borrowed immutably for the whole run and the options
//! struct is the caller's snapshot, so mid-export edits cannot leak into a
//! running export.

pub mod estimate;
pub mod options;
pub mod paginate;
pub mod partition;
pub mod slides;

use tracing::{debug, info};

use crate::error::{DeckError, DeckResult, ValidationError};
use crate::export::options::ExportOptions;
use crate::export::partition::SplitPolicy;
use crate::render::{DeckRenderer, DeckRequest, ProgressSink};
use crate::session::TableSession;
use crate::types::Row;

/// Preview exports truncate the page sequence and never split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportMode {
    Preview,
    Full,
}

/// What an export produced.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportSummary {
    /// Output file names, in render order
    pub file_names: Vec<String>,
    /// Pages actually exported (after any preview truncation)
    pub page_count: usize,
    pub estimated_mb: f64,
    pub preview: bool,
}

impl ExportSummary {
    pub fn file_count(&self) -> usize {
        self.file_names.len()
    }
}

/// Run one export end to end.
///
/// Partitions render strictly in order; each renderer call is awaited
/// before the next starts. Progress moves from 5% through a per-file step
/// to 100% on completion.
pub async fn export_deck<R, P>(
    session: &TableSession,
    options: &ExportOptions,
    mode: ExportMode,
    renderer: &mut R,
    progress: &mut P,
) -> DeckResult<ExportSummary>
where
    R: DeckRenderer,
    P: ProgressSink,
{
    let preview = mode == ExportMode::Preview;

    let active = session.columns().active();
    if active.is_empty() {
        return Err(ValidationError::NoColumnsSelected.into());
    }
    let preview_limit = if preview {
        let count = options
            .preview_page_count
            .ok_or(ValidationError::InvalidPreviewCount)?;
        Some(count as usize)
    } else {
        None
    };

    let pages = paginate::paginate(session.rows(), options.rows_per_page)?;
    let limited: &[&[Row]] = match preview_limit {
        Some(limit) => &pages[..pages.len().min(limit)],
        None => &pages,
    };

    // The estimate intentionally uses the full row count even when preview
    // truncation shortens the page sequence; only the page term shrinks.
    let estimated_mb =
        estimate::estimate_deck_size_mb(session.rows().len(), active.len(), limited.len());
    let policy = SplitPolicy {
        enabled: options.split_export,
        max_mb_per_file: options.max_mb_per_file,
        preview,
    };
    let per_file = partition::pages_per_file(limited.len(), estimated_mb, policy);
    let partitions = partition::partition(limited, per_file);
    debug!(
        pages = limited.len(),
        estimated_mb,
        files = partitions.len(),
        preview,
        "export planned"
    );

    progress.update(5, "Preparing export...");

    let part_count = partitions.len();
    let mut file_names = Vec::with_capacity(part_count);
    for (index, part_pages) in partitions.iter().enumerate() {
        let part = index + 1;
        let file_name = deck_file_name(&options.file_prefix, part, part_count);
        let percent = 10 + (80.0 * part as f64 / part_count as f64).round() as u32;
        progress.update(
            percent,
            &format!("Generating file {part} of {part_count}..."),
        );

        let slides = slides::build_slides(part_pages, &active, options, part, part_count);
        let request = DeckRequest {
            file_name: file_name.clone(),
            slides,
        };
        if let Err(source) = renderer.render(request).await {
            return Err(DeckError::Render { file_name, source });
        }
        file_names.push(file_name);
    }

    progress.update(100, "Export complete.");
    info!(
        files = part_count,
        pages = limited.len(),
        preview,
        "export complete"
    );

    Ok(ExportSummary {
        file_names,
        page_count: limited.len(),
        estimated_mb,
        preview,
    })
}

/// `<prefix>.pptx` for a single file, `<prefix>-part-<i>.pptx` when the
/// export is split (1-indexed).
pub fn deck_file_name(prefix: &str, part: usize, part_count: usize) -> String {
    if part_count > 1 {
        format!("{prefix}-part-{part}.pptx")
    } else {
        format!("{prefix}.pptx")
    }
}
