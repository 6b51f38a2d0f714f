//! Page partitioning across output files.
//!
//! Splitting is even-as-possible by page count, not size-exact: per-page
//! byte sizes are not independently known, so the partitioner spreads the
//! page sequence across `ceil(estimate / budget)` files and lets the last
//! file run short.

use tracing::debug;

/// Split policy for one export run.
#[derive(Clone, Copy, Debug)]
pub struct SplitPolicy {
    pub enabled: bool,
    /// Per-file size budget in megabytes, >= 1
    pub max_mb_per_file: f64,
    /// Preview exports always stay in a single file
    pub preview: bool,
}

/// Number of pages per output file.
///
/// Returns `page_count` (a single partition) unless splitting is enabled,
/// this is a full export, and the estimate exceeds the per-file budget.
pub fn pages_per_file(page_count: usize, estimated_mb: f64, policy: SplitPolicy) -> usize {
    if !policy.enabled || policy.preview || estimated_mb <= policy.max_mb_per_file {
        return page_count.max(1);
    }
    let target_files = (estimated_mb / policy.max_mb_per_file).ceil() as usize;
    let per_file = page_count.div_ceil(target_files.max(1)).max(1);
    debug!(
        page_count,
        estimated_mb, target_files, per_file, "splitting export across files"
    );
    per_file
}

/// Group pages into consecutive partitions of `per_file` pages; the last
/// partition may be shorter. Order is preserved and every page lands in
/// exactly one partition.
pub fn partition<T>(pages: &[T], per_file: usize) -> Vec<&[T]> {
    pages.chunks(per_file.max(1)).collect()
}
