//! Document processing engine.
//!
//! Resolves result sheets from the command line, scans each one on tokio's
//! blocking pool with bounded concurrency, and merges the records in input
//! order. A document that cannot be read is counted as failed and the run
//! carries on with the rest.

pub mod discovery;

#[cfg(test)]
pub mod tests;

use self::discovery::DocumentDiscovery;

use crate::config::ExtractionConfig;
use crate::error::{Result, SwimError};
use crate::models::{AthleteRecord, ProcessingSummary};
use crate::parser::{DocumentExtraction, DocumentScanner, NormalizationSummary, ScanStats};

use colored::*;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;
use tokio::task;
use tracing::{debug, error, warn};

/// Merged result of a processing run
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Records of all documents, in input document order
    pub records: Vec<AthleteRecord>,
    pub summary: ProcessingSummary,
    /// Line classification counters summed over all documents
    pub stats: ScanStats,
}

impl ProcessOutput {
    /// Print the colored run summary
    pub fn print_summary(&self) {
        let summary = &self.summary;

        println!("\n{}", "Processing Summary".bright_green().bold());
        println!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            summary.processing_time_ms.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Documents processed:".bright_cyan(),
            summary.documents_processed.to_string().bright_white()
        );
        if summary.documents_empty > 0 {
            println!(
                "  {} {}",
                "Documents without records:".bright_yellow(),
                summary.documents_empty.to_string().bright_yellow()
            );
        }
        if summary.documents_failed > 0 {
            println!(
                "  {} {}",
                "Documents failed:".bright_red(),
                summary.documents_failed.to_string().bright_red().bold()
            );
        }
        println!(
            "  {} {} ({:.1}% of non-blank lines)",
            "Records extracted:".bright_cyan(),
            summary.total_records.to_string().bright_white().bold(),
            self.stats.yield_rate()
        );
        println!(
            "  {} {} race titles -> {} categories",
            "Normalization:".bright_cyan(),
            summary.raw_race_titles.to_string().bright_white(),
            summary.categories.to_string().bright_white().bold()
        );
        if summary.normalization_collapsed() {
            println!(
                "  {}",
                "Differently worded race titles were merged".bright_green()
            );
        }
    }
}

/// Processor for a set of result sheet inputs
#[derive(Debug)]
pub struct DocumentProcessor {
    inputs: Vec<PathBuf>,
    config: ExtractionConfig,
}

impl DocumentProcessor {
    /// Create a processor over files, directories or glob patterns
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            config: ExtractionConfig::default(),
        }
    }

    /// Configure the processor
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Main processing entry point
    pub async fn process(&self) -> Result<ProcessOutput> {
        let start_time = Instant::now();
        self.config.validate()?;

        let documents = DocumentDiscovery::new(self.inputs.clone(), self.config.clone()).discover()?;
        debug!("Processing {} documents", documents.len());

        let progress = self.create_progress_bar();
        let scanner = DocumentScanner::new().with_progress_interval(self.config.progress_interval);
        let concurrent_limit = self.config.max_concurrent_documents.min(documents.len()).max(1);

        // `buffered` keeps results in input order however the scans interleave
        let results: Vec<(PathBuf, Result<DocumentExtraction>)> = stream::iter(documents)
            .map(|path| {
                let scanner = scanner.clone();
                let progress = progress.clone();
                async move {
                    let result = scan_document(&path, scanner, progress).await;
                    (path, result)
                }
            })
            .buffered(concurrent_limit)
            .collect()
            .await;

        progress.finish_and_clear();

        let mut records = Vec::new();
        let mut stats = ScanStats::new();
        let mut summary = ProcessingSummary::default();

        for (path, result) in results {
            match result {
                Ok(extraction) => {
                    summary.documents_processed += 1;
                    if extraction.is_empty() {
                        summary.documents_empty += 1;
                        warn!("No records found in {}", path.display());
                    } else {
                        debug!(
                            "Extracted {} records from {}",
                            extraction.records.len(),
                            extraction.document_id
                        );
                    }
                    stats.merge(&extraction.stats);
                    records.extend(extraction.records);
                }
                Err(e) => {
                    summary.documents_failed += 1;
                    error!("Failed to process {}: {:#}", path.display(), e);
                }
            }
        }

        let normalization = NormalizationSummary::from_records(&records);
        summary.total_records = records.len();
        summary.raw_race_titles = normalization.raw_race_titles;
        summary.categories = normalization.categories;
        summary.processing_time_ms = start_time.elapsed().as_millis();

        Ok(ProcessOutput {
            records,
            summary,
            stats,
        })
    }

    fn create_progress_bar(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb.set_message("Scanning result sheets");
        pb
    }
}

/// Label attached to a document's records: the file stem, uppercased
pub fn document_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}

/// Read one document and scan it on a blocking worker
async fn scan_document(
    path: &Path,
    scanner: DocumentScanner,
    progress: ProgressBar,
) -> Result<DocumentExtraction> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| SwimError::document_failed(path, e.to_string()))?;

    let document_id = document_label(path);
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    progress.inc_length(lines.len() as u64);

    task::spawn_blocking(move || {
        let mut reported = 0;
        scanner.scan_with_progress(&document_id, &lines, |update| {
            progress.inc((update.lines_done - reported) as u64);
            reported = update.lines_done;
        })
    })
    .await
    .map_err(|e| SwimError::document_failed(path, e.to_string()))
}
