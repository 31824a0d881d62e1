//! Error handling integration tests

use super::{IZMIR_SHEET, write_document};
use crate::config::ExtractionConfig;
use crate::error::SwimError;
use crate::processor::DocumentProcessor;
use tempfile::TempDir;

#[tokio::test]
async fn test_nonexistent_input() {
    let temp_dir = TempDir::new().unwrap();
    let nonexistent = temp_dir.path().join("nonexistent.txt");

    let result = DocumentProcessor::new(vec![nonexistent.clone()])
        .with_config(ExtractionConfig::default().without_progress())
        .process()
        .await;

    match result.unwrap_err() {
        SwimError::DocumentNotFound { path } => assert_eq!(path, nonexistent),
        other => panic!("Expected DocumentNotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_directory_without_documents() {
    let temp_dir = TempDir::new().unwrap();
    write_document(&temp_dir, "meet/notes.md", "not a result sheet");

    let result = DocumentProcessor::new(vec![temp_dir.path().join("meet")])
        .with_config(ExtractionConfig::default().without_progress())
        .process()
        .await;

    assert!(matches!(result, Err(SwimError::NoDocuments { .. })));
}

#[tokio::test]
async fn test_unreadable_document_does_not_abort_run() {
    let temp_dir = TempDir::new().unwrap();
    let izmir = write_document(&temp_dir, "meet/izmir.txt", IZMIR_SHEET);
    let binary = temp_dir.path().join("meet/scan.txt");
    std::fs::write(&binary, [0xff, 0xfe, 0x00, 0x41]).unwrap();

    let output = DocumentProcessor::new(vec![binary, izmir])
        .with_config(ExtractionConfig::default().without_progress())
        .process()
        .await
        .unwrap();

    assert_eq!(output.summary.documents_failed, 1);
    assert_eq!(output.summary.documents_processed, 1);
    assert_eq!(output.summary.total_records, 3);
}

#[tokio::test]
async fn test_invalid_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let izmir = write_document(&temp_dir, "meet/izmir.txt", IZMIR_SHEET);

    let config = ExtractionConfig::default()
        .without_progress()
        .with_max_concurrent_documents(0);
    let result = DocumentProcessor::new(vec![izmir])
        .with_config(config)
        .process()
        .await;

    assert!(matches!(result, Err(SwimError::Configuration { .. })));
}
