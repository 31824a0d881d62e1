//! Scan statistics and result structures
//!
//! Counts how every line of a document was classified, and summarizes how
//! far category normalization collapsed differently worded race titles.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::scanner::LineOutcome;
use crate::models::AthleteRecord;

/// Records extracted from one document, with its scan statistics
#[derive(Debug, Clone)]
pub struct DocumentExtraction {
    /// Label attached to every record of this document
    pub document_id: String,

    /// Records in the order their lines were scanned
    pub records: Vec<AthleteRecord>,

    pub stats: ScanStats,
}

impl DocumentExtraction {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Per-line classification counters.
///
/// Every non-blank line lands in exactly one of `lines_skipped`,
/// `race_headers`, `age_headers`, `records_emitted`, `invalid_times`,
/// `unparsed_lines` or `lines_without_context`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub lines_total: usize,
    pub lines_blank: usize,
    pub lines_skipped: usize,
    pub race_headers: usize,
    pub age_headers: usize,

    /// Lines that matched an athlete grammar, valid time or not
    pub athlete_lines: usize,
    pub records_emitted: usize,
    pub invalid_times: usize,
    pub unparsed_lines: usize,
    pub lines_without_context: usize,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified line
    pub fn record(&mut self, outcome: &LineOutcome) {
        self.lines_total += 1;
        match outcome {
            LineOutcome::Blank => self.lines_blank += 1,
            LineOutcome::Skipped => self.lines_skipped += 1,
            LineOutcome::RaceHeader => self.race_headers += 1,
            LineOutcome::AgeHeader => self.age_headers += 1,
            LineOutcome::Record(_) => {
                self.athlete_lines += 1;
                self.records_emitted += 1;
            }
            LineOutcome::InvalidTime => {
                self.athlete_lines += 1;
                self.invalid_times += 1;
            }
            LineOutcome::Unparsed => self.unparsed_lines += 1,
            LineOutcome::OutOfContext => self.lines_without_context += 1,
        }
    }

    /// Add another document's counters to these
    pub fn merge(&mut self, other: &ScanStats) {
        self.lines_total += other.lines_total;
        self.lines_blank += other.lines_blank;
        self.lines_skipped += other.lines_skipped;
        self.race_headers += other.race_headers;
        self.age_headers += other.age_headers;
        self.athlete_lines += other.athlete_lines;
        self.records_emitted += other.records_emitted;
        self.invalid_times += other.invalid_times;
        self.unparsed_lines += other.unparsed_lines;
        self.lines_without_context += other.lines_without_context;
    }

    pub fn non_blank_lines(&self) -> usize {
        self.lines_total - self.lines_blank
    }

    /// Share of non-blank lines that became records, as a percentage
    pub fn yield_rate(&self) -> f64 {
        let non_blank = self.non_blank_lines();
        if non_blank == 0 {
            0.0
        } else {
            (self.records_emitted as f64 / non_blank as f64) * 100.0
        }
    }
}

/// How many raw race titles normalization folded into how many categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationSummary {
    pub raw_race_titles: usize,
    pub categories: usize,
}

impl NormalizationSummary {
    pub fn from_records(records: &[AthleteRecord]) -> Self {
        let raw_race_titles: HashSet<&str> = records
            .iter()
            .map(|record| record.race_title_raw.as_str())
            .collect();
        let categories: HashSet<&str> = records
            .iter()
            .map(|record| record.category_key.as_str())
            .collect();

        Self {
            raw_race_titles: raw_race_titles.len(),
            categories: categories.len(),
        }
    }

    pub fn collapsed(&self) -> bool {
        self.categories < self.raw_race_titles
    }
}
