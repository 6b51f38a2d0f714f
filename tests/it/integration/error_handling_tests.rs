//! Failure-path behavior: validation ordering, renderer failures, and the
//! clear-on-failed-load lifecycle.

use std::error::Error as _;

use tabledeck::{export_deck, DeckError, ExportMode, Format, TableSession, ValidationError};

use crate::helpers::{form, sample_session, CollectingProgress, RecordingRenderer};

#[tokio::test]
async fn no_included_columns_fails_before_rendering() {
    let mut session = sample_session(5, 2);
    session.columns_mut().set_all_included(false);
    let options = form().normalize();

    let mut renderer = RecordingRenderer::default();
    let mut progress = CollectingProgress::default();
    let err = export_deck(
        &session,
        &options,
        ExportMode::Full,
        &mut renderer,
        &mut progress,
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        DeckError::Validation(ValidationError::NoColumnsSelected)
    ));
    assert!(renderer.requests.is_empty());
    assert!(progress.updates.is_empty());
}

#[tokio::test]
async fn header_only_json_fails_with_no_rows() {
    // An array-of-arrays upload with only a header row loads two columns
    // and zero rows; the export, not the load, rejects it.
    let mut session = TableSession::new();
    let summary = session.load_str(r#"[["h1","h2"]]"#, Format::Json).unwrap();
    assert_eq!(summary.rows, 0);
    assert_eq!(summary.columns, 2);

    let options = form().normalize();
    let mut renderer = RecordingRenderer::default();
    let mut progress = CollectingProgress::default();
    let err = export_deck(
        &session,
        &options,
        ExportMode::Full,
        &mut renderer,
        &mut progress,
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        DeckError::Validation(ValidationError::NoRows)
    ));
    assert!(renderer.requests.is_empty());
}

#[tokio::test]
async fn invalid_preview_count_only_blocks_previews() {
    let session = sample_session(5, 2);
    let mut form = form();
    form.preview_page_count = "2.5".into();
    let options = form.normalize();

    let mut renderer = RecordingRenderer::default();
    let mut progress = CollectingProgress::default();
    let err = export_deck(
        &session,
        &options,
        ExportMode::Preview,
        &mut renderer,
        &mut progress,
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        DeckError::Validation(ValidationError::InvalidPreviewCount)
    ));
    assert!(renderer.requests.is_empty());

    // The same options still drive a full export.
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
}

#[tokio::test]
async fn renderer_failure_aborts_remaining_partitions() {
    // Three partitions; the renderer dies on the second call.
    let session = sample_session(2000, 5);
    let mut form = form();
    form.split_export = "true".into();
    form.max_mb_per_file = "1".into();
    let options = form.normalize();

    let mut renderer = RecordingRenderer {
        fail_on_call: Some(2),
        ..Default::default()
    };
    let mut progress = CollectingProgress::default();
    let err = export_deck(
        &session,
        &options,
        ExportMode::Full,
        &mut renderer,
        &mut progress,
    )
    .await
    .unwrap_err();

    match &err {
        DeckError::Render { file_name, .. } => {
            assert_eq!(file_name, "quarterly-part-2.pptx");
        }
        other => panic!("unexpected error: {other}"),
    }
    // The first partition rendered and is not rolled back.
    assert_eq!(renderer.requests.len(), 1);
    assert_eq!(renderer.requests[0].file_name, "quarterly-part-1.pptx");
    // The opaque renderer error stays reachable through the source chain.
    assert!(err.source().is_some());
    assert!(err.to_string().contains("quarterly-part-2.pptx"));
}

#[tokio::test]
async fn failed_load_clears_session_for_later_exports() {
    let mut session = sample_session(5, 2);
    assert!(session.load_str("{oops", Format::Json).is_err());

    let options = form().normalize();
    let mut renderer = RecordingRenderer::default();
    let mut progress = CollectingProgress::default();
    let err = export_deck(
        &session,
        &options,
        ExportMode::Full,
        &mut renderer,
        &mut progress,
    )
    .await
    .unwrap_err();

    // Nothing is loaded anymore, so the column check fires first.
    assert!(matches!(
        err,
        DeckError::Validation(ValidationError::NoColumnsSelected)
    ));
    assert!(renderer.requests.is_empty());
}
