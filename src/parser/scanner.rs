//! Race context state machine
//!
//! Scans a document's lines in order, keeping track of which race, age group
//! and field the current block of results belongs to. Each line is classified
//! as blank, denylisted, race header, age header or athlete line; athlete
//! lines only produce records once the race context is complete.
//!
//! The scan is forward-only. [`advance`] is the single step: it takes the
//! context by value and hands back the next one together with what the line
//! turned out to be, so a document scan is a fold over its lines.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::athlete::parse_athlete_line;
use super::category::normalize_category;
use super::stats::{DocumentExtraction, ScanStats};
use super::time::parse_time;
use crate::constants::{
    AGE_SUFFIX, DEFAULT_PROGRESS_INTERVAL, RACE_MARKERS, RELAY_MARKERS, denylist,
};
use crate::models::{AthleteRecord, Gender, ParsedAthlete, RaceContext, ScanState};

static RACE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let markers = RACE_MARKERS.join("|");
    Regex::new(&format!(r"^(?:{markers})\b")).expect("race header pattern is valid")
});
static SPLIT_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+m:").expect("split time pattern is valid"));
static SINGLE_AGE_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?:^|[\s,])([0-9]{{1,2}})\s*{AGE_SUFFIX}$"))
        .expect("single age pattern is valid")
});
static AGE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\s*[0-9]{{1,2}}\s*-\s*[0-9]{{1,2}}\s*{AGE_SUFFIX}(?:ları)?(?:\s*arası)?"
    ))
    .expect("age range pattern is valid")
});
static STRAY_AGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\s*[0-9]{{1,2}}\s*{AGE_SUFFIX}(?:ları)?(?:\s*arası)?"
    ))
    .expect("stray age pattern is valid")
});
static AGES_BETWEEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\s*{AGE_SUFFIX}ları\s*arası")).expect("age span pattern is valid")
});
static COMMA_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,(?:\s*,)+").expect("comma run pattern is valid"));
static AGE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^([0-9]{{1,2}})\s*{AGE_SUFFIX}$")).expect("age header pattern is valid")
});

/// What a single line turned out to be
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Empty after trimming
    Blank,
    /// Matched the denylist of non-data lines
    Skipped,
    /// Opened a new race
    RaceHeader,
    /// Set the age group of the current race
    AgeHeader,
    /// Parsed into a record
    Record(AthleteRecord),
    /// Parsed as an athlete line but the time was zero or unreadable
    InvalidTime,
    /// Race context complete, but no athlete grammar matched
    Unparsed,
    /// Not a header, and the race context is not complete enough for athletes
    OutOfContext,
}

/// Progress report handed to the scan callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    pub lines_done: usize,
    pub lines_total: usize,
}

impl ScanProgress {
    pub fn fraction(&self) -> f64 {
        if self.lines_total == 0 {
            1.0
        } else {
            self.lines_done as f64 / self.lines_total as f64
        }
    }
}

/// Whether a line matches the denylist of non-data lines.
///
/// Checked before header detection: a split time such as `50m: 30.00` or a
/// relay heading would otherwise read as a header.
pub fn is_denylisted(line: &str) -> bool {
    denylist::PREFIXES.iter().any(|prefix| line.starts_with(prefix))
        || denylist::SUBSTRINGS.iter().any(|needle| line.contains(needle))
        || RELAY_MARKERS.iter().any(|marker| line.contains(marker))
        || SPLIT_TIME_RE.is_match(line)
}

/// Whether a line opens a new (individual) race
pub fn is_race_header(line: &str) -> bool {
    RACE_HEADER_RE.is_match(line) && !RELAY_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Age from a standalone `N yaş` line
pub fn parse_age_header(line: &str) -> Option<u8> {
    AGE_HEADER_RE
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
}

/// Build the context a race header line opens.
///
/// A trailing single age (`..., 10 yaş`) sets the age directly. Otherwise
/// age ranges and stray age tokens are stripped and the age is left unset
/// until a standalone age header arrives.
pub fn context_from_header(line: &str) -> RaceContext {
    let gender = Gender::from_header(line);

    if let Some((suffix_start, age)) = single_age_suffix(line) {
        return RaceContext {
            race_base: tidy_title(&line[..suffix_start]),
            age: Some(age),
            gender,
        };
    }

    let base = AGE_RANGE_RE.replace_all(line, "");
    let base = STRAY_AGE_RE.replace_all(&base, "");
    let base = AGES_BETWEEN_RE.replace_all(&base, "");

    RaceContext {
        race_base: tidy_title(&base),
        age: None,
        gender,
    }
}

/// Start offset and value of a trailing `N yaş` that is not the end of an age range
fn single_age_suffix(line: &str) -> Option<(usize, u8)> {
    let caps = SINGLE_AGE_SUFFIX_RE.captures(line)?;
    let age = caps[1].parse().ok()?;
    Some((caps.get(0)?.start(), age))
}

/// Trim whitespace and leftover separators from a stripped header
fn tidy_title(title: &str) -> String {
    COMMA_RUN_RE
        .replace_all(title, ",")
        .trim()
        .trim_end_matches(',')
        .trim_end()
        .to_string()
}

/// Advance the race context by one line.
///
/// Rules, in order: blank lines and denylisted lines change nothing; a race
/// header replaces the whole context; an age header updates the age of an
/// active race; anything else is tried as an athlete line, but only when
/// race, age and gender are all known.
pub fn advance(context: RaceContext, line: &str, document_id: &str) -> (RaceContext, LineOutcome) {
    let line = line.trim();

    if line.is_empty() {
        return (context, LineOutcome::Blank);
    }

    if is_denylisted(line) {
        trace!("Skipping denylisted line: {}", line);
        return (context, LineOutcome::Skipped);
    }

    if is_race_header(line) {
        let next = context_from_header(line);
        debug!(
            "Race header in {}: '{}' (gender: {}, age: {:?})",
            document_id, next.race_base, next.gender, next.age
        );
        return (next, LineOutcome::RaceHeader);
    }

    if context.state() != ScanState::NoContext {
        if let Some(age) = parse_age_header(line) {
            trace!("Age group {} for '{}'", age, context.race_base);
            let next = RaceContext {
                age: Some(age),
                ..context
            };
            return (next, LineOutcome::AgeHeader);
        }
    }

    if !context.accepts_athletes() {
        trace!("No race context for line: {}", line);
        return (context, LineOutcome::OutOfContext);
    }

    let Some(athlete) = parse_athlete_line(line) else {
        trace!("Unparsed line: {}", line);
        return (context, LineOutcome::Unparsed);
    };

    let Some(time_seconds) = parse_time(&athlete.time_raw) else {
        trace!("Rejected time '{}' in line: {}", athlete.time_raw, line);
        return (context, LineOutcome::InvalidTime);
    };

    let outcome = LineOutcome::Record(build_record(&context, athlete, time_seconds, document_id));
    (context, outcome)
}

fn build_record(
    context: &RaceContext,
    athlete: ParsedAthlete,
    time_seconds: f64,
    document_id: &str,
) -> AthleteRecord {
    let age = context.age.map(|age| age.to_string()).unwrap_or_default();
    let race_title_raw = context.race_title();
    let category_key = normalize_category(&race_title_raw, context.gender.as_str(), &age);

    AthleteRecord {
        document_id: document_id.to_string(),
        race_title_raw,
        category_key,
        gender: context.gender,
        age,
        bib_code: athlete.bib_code,
        name: athlete.name,
        club: athlete.club,
        time_raw: athlete.time_raw,
        time_seconds,
        score: athlete.score,
    }
}

/// Scans whole documents, reporting progress every `progress_interval` lines
#[derive(Debug, Clone)]
pub struct DocumentScanner {
    progress_interval: usize,
}

impl Default for DocumentScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentScanner {
    pub fn new() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Set the number of lines between progress reports (minimum 1)
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Scan a document without progress reporting
    pub fn scan<S: AsRef<str>>(&self, document_id: &str, lines: &[S]) -> DocumentExtraction {
        self.scan_with_progress(document_id, lines, |_| {})
    }

    /// Scan a document, calling `on_progress` periodically and once at the end
    pub fn scan_with_progress<S, F>(
        &self,
        document_id: &str,
        lines: &[S],
        mut on_progress: F,
    ) -> DocumentExtraction
    where
        S: AsRef<str>,
        F: FnMut(ScanProgress),
    {
        let lines_total = lines.len();
        let mut context = RaceContext::new();
        let mut records = Vec::new();
        let mut stats = ScanStats::new();

        for (index, line) in lines.iter().enumerate() {
            let (next, outcome) = advance(context, line.as_ref(), document_id);
            context = next;
            stats.record(&outcome);
            if let LineOutcome::Record(record) = outcome {
                records.push(record);
            }

            let lines_done = index + 1;
            if lines_done % self.progress_interval == 0 && lines_done < lines_total {
                on_progress(ScanProgress {
                    lines_done,
                    lines_total,
                });
            }
        }

        on_progress(ScanProgress {
            lines_done: lines_total,
            lines_total,
        });

        debug!(
            "Scanned {}: {} lines, {} race headers, {} records",
            document_id, stats.lines_total, stats.race_headers, stats.records_emitted
        );

        DocumentExtraction {
            document_id: document_id.to_string(),
            records,
            stats,
        }
    }
}

/// Extract the athlete records of one document, in line order
pub fn extract_records<S: AsRef<str>>(document_id: &str, lines: &[S]) -> Vec<AthleteRecord> {
    DocumentScanner::new().scan(document_id, lines).records
}
