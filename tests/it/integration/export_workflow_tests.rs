//! Full export workflows: pagination, splitting, preview, progress.

use tabledeck::{export_deck, ExportMode};

use crate::helpers::{
    form, init_tracing, sample_session, session_from_csv, CollectingProgress, RecordingRenderer,
};

#[tokio::test]
async fn full_export_produces_a_single_file() {
    init_tracing();
    let session = sample_session(45, 3);
    let options = form().normalize();
    let mut renderer = RecordingRenderer::default();
    let mut progress = CollectingProgress::default();

    let summary = export_deck(
        &session,
        &options,
        ExportMode::Full,
        &mut renderer,
        &mut progress,
    )
    .await
    .unwrap();

    assert_eq!(summary.file_count(), 1);
    assert_eq!(summary.file_names, ["quarterly.pptx"]);
    assert_eq!(summary.page_count, 3);
    assert!(!summary.preview);

    assert_eq!(renderer.requests.len(), 1);
    let request = &renderer.requests[0];
    assert_eq!(request.file_name, "quarterly.pptx");
    assert_eq!(request.slides.len(), 3);
    // 20 + 20 + 5 data rows, each slide carrying its header row on top.
    assert_eq!(request.slides[0].table.len(), 21);
    assert_eq!(request.slides[2].table.len(), 6);
    assert_eq!(request.slides[2].counter, "Slide 3 of 3");
    assert_eq!(request.slides[0].title, "Quarterly Numbers");

    assert_eq!(progress.percents(), [5, 90, 100]);
    assert_eq!(progress.updates[0].1, "Preparing export...");
    assert_eq!(progress.updates[1].1, "Generating file 1 of 1...");
    assert_eq!(progress.updates.last().unwrap().1, "Export complete.");
}

#[tokio::test]
async fn split_export_partitions_pages_across_files() {
    // 2000 rows x 5 columns at 50 rows per page is 40 pages and estimates
    // just over 1 MB, so a 1 MB budget splits into two files of 20 pages.
    let session = sample_session(2000, 5);
    let mut form = form();
    form.rows_per_page = "50".into();
    form.split_export = "true".into();
    form.max_mb_per_file = "1".into();
    let options = form.normalize();

    let mut renderer = RecordingRenderer::default();
    let mut progress = CollectingProgress::default();
    let summary = export_deck(
        &session,
        &options,
        ExportMode::Full,
        &mut renderer,
        &mut progress,
    )
    .await
    .unwrap();

    assert_eq!(
        summary.file_names,
        ["quarterly-part-1.pptx", "quarterly-part-2.pptx"]
    );
    assert_eq!(renderer.requests[0].slides.len(), 20);
    assert_eq!(renderer.requests[1].slides.len(), 20);
    assert!(renderer.requests[0].slides[0]
        .title
        .ends_with("(Part 1 of 2)"));
    assert!(renderer.requests[1].slides[0]
        .title
        .ends_with("(Part 2 of 2)"));
    // Slide counters restart per file.
    assert_eq!(renderer.requests[1].slides[0].counter, "Slide 1 of 20");

    // Partition completeness: every data row lands in exactly one slide.
    let body_rows: usize = renderer
        .requests
        .iter()
        .flat_map(|request| request.slides.iter())
        .map(|slide| slide.table.len() - 1)
        .sum();
    assert_eq!(body_rows, 2000);
    let first_cell = &renderer.requests[0].slides[0].table[1][0];
    assert_eq!(first_cell.text, "r0c0");

    assert_eq!(progress.percents(), [5, 50, 90, 100]);
}

#[tokio::test]
async fn preview_truncates_pages_and_never_splits() {
    let session = sample_session(2000, 5);
    let mut form = form();
    form.rows_per_page = "50".into();
    form.split_export = "true".into();
    form.max_mb_per_file = "1".into();
    let options = form.normalize();

    let mut renderer = RecordingRenderer::default();
    let mut progress = CollectingProgress::default();
    let summary = export_deck(
        &session,
        &options,
        ExportMode::Preview,
        &mut renderer,
        &mut progress,
    )
    .await
    .unwrap();

    assert!(summary.preview);
    assert_eq!(summary.page_count, 2);
    // Split stays off in preview even though the options ask for it.
    assert_eq!(summary.file_names, ["quarterly.pptx"]);
    assert_eq!(renderer.requests.len(), 1);
    assert_eq!(renderer.requests[0].slides.len(), 2);
    assert_eq!(renderer.requests[0].slides[0].title, "Quarterly Numbers");
}

#[tokio::test]
async fn preview_larger_than_page_count_exports_everything() {
    let session = sample_session(15, 2);
    let mut form = form();
    form.preview_page_count = "99".into();
    let options = form.normalize();

    let mut renderer = RecordingRenderer::default();
    let mut progress = CollectingProgress::default();
    let summary = export_deck(
        &session,
        &options,
        ExportMode::Preview,
        &mut renderer,
        &mut progress,
    )
    .await
    .unwrap();

    assert_eq!(summary.page_count, 1);
    assert_eq!(renderer.requests[0].slides.len(), 1);
}

#[tokio::test]
async fn column_edits_shape_exported_cells() {
    let mut session =
        session_from_csv("name,score,notes\nAda,95,fast\nGrace,90,careful");
    session.columns_mut().set_included("notes", false);
    session.columns_mut().move_to("score", "name");
    session.columns_mut().set_width_input("score", "3.5");
    let options = form().normalize();

    let mut renderer = RecordingRenderer::default();
    let mut progress = CollectingProgress::default();
    export_deck(
        &session,
        &options,
        ExportMode::Full,
        &mut renderer,
        &mut progress,
    )
    .await
    .unwrap();

    let slide = &renderer.requests[0].slides[0];
    let header: Vec<&str> = slide.table[0].iter().map(|cell| cell.text.as_str()).collect();
    assert_eq!(header, ["score", "name"]);
    assert_eq!(slide.column_widths, [3.5, 13.0 / 3.0]);
    assert_eq!(slide.table[1][0].text, "95");
    assert_eq!(slide.table[1][1].text, "Ada");
}

#[tokio::test]
async fn progress_is_monotonic_across_many_partitions() {
    let session = sample_session(2000, 5);
    let mut form = form();
    form.split_export = "true".into();
    form.max_mb_per_file = "1".into();
    let options = form.normalize();

    let mut renderer = RecordingRenderer::default();
    let mut progress = CollectingProgress::default();
    let summary = export_deck(
        &session,
        &options,
        ExportMode::Full,
        &mut renderer,
        &mut progress,
    )
    .await
    .unwrap();

    assert!(summary.file_count() > 2);
    let percents = progress.percents();
    assert_eq!(percents.first(), Some(&5));
    assert_eq!(percents.last(), Some(&100));
    assert!(percents.windows(2).all(|pair| pair[0] <= pair[1]));
}
