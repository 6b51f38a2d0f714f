//! Error and progress message surfaces shown to the host UI.

use insta::assert_snapshot;
use tabledeck::{deck_file_name, DeckError, FormatError, ValidationError};

#[test]
fn validation_messages() {
    assert_snapshot!(ValidationError::NoRows.to_string(), @"no rows to export");
    assert_snapshot!(ValidationError::NoColumnsSelected.to_string(), @"no columns selected");
    assert_snapshot!(
        ValidationError::InvalidPreviewCount.to_string(),
        @"preview page count must be a positive whole number"
    );
}

#[test]
fn format_messages() {
    assert_snapshot!(
        FormatError::CsvTooShort.to_string(),
        @"CSV must include a header row and at least one data row"
    );
    assert_snapshot!(
        FormatError::JsonShape.to_string(),
        @"JSON must be an array of rows or include a non-empty rows array"
    );
}

#[test]
fn render_error_names_the_failed_file() {
    let err = DeckError::Render {
        file_name: "report-part-2.pptx".to_string(),
        source: anyhow::anyhow!("disk full"),
    };
    assert_snapshot!(err.to_string(), @"deck renderer failed for report-part-2.pptx: disk full");
}

#[test]
fn file_names_follow_the_part_scheme() {
    assert_snapshot!(deck_file_name("report", 1, 1), @"report.pptx");
    assert_snapshot!(deck_file_name("report", 2, 3), @"report-part-2.pptx");
}
