//! Athlete line parsing
//!
//! An athlete line reads `Name BibCode Club Time Score`, e.g.
//! `Ayşe Yılmaz 12 CITY SC 1:05.32 450`. Text extracted from scanned sheets
//! often breaks that shape, so parsing is an ordered cascade of grammars:
//! a strict full-line grammar first, then an OCR-tolerant one that anchors on
//! the trailing time/score pair and cleans up the club name.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ParsedAthlete;

static PRIMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\p{Lu}[\p{L}\s'\-]+?)\s+([0-9]{2})\s+(.+?)\s+((?:[0-9]+:)?[0-9]{1,2}[.,][0-9]{2})\s+([0-9]+)$",
    )
    .expect("primary athlete pattern is valid")
});
static LOOSE_TIME_SCORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?:[0-9]{1,2}:)?[0-9]{1,2}[:.,][0-9]{2})\s+([0-9]+)$")
        .expect("loose time/score pattern is valid")
});
static NAME_BIB_CLUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\p{Lu}[\p{L}\s'\-]+?)\s+([0-9]{2})\s+(.+)$")
        .expect("name/bib pattern is valid")
});
static CLUB_GLYPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"1ü:?$").expect("club glyph pattern is valid"));
static TRAILING_COLONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":+$").expect("trailing colon pattern is valid"));
static TRAILING_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+$").expect("trailing digit pattern is valid"));

type Grammar = fn(&str) -> Option<ParsedAthlete>;

/// Grammars in priority order; the first one that matches wins.
const GRAMMARS: &[Grammar] = &[parse_primary, parse_ocr_tolerant];

/// Extract one athlete's fields from a line.
///
/// Returns `None` when no grammar matches. Callers treat that the same as any
/// other non-athlete line.
pub fn parse_athlete_line(line: &str) -> Option<ParsedAthlete> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    GRAMMARS.iter().find_map(|grammar| grammar(line))
}

/// Strict grammar: the whole line must read `Name BibCode Club Time Score`
fn parse_primary(line: &str) -> Option<ParsedAthlete> {
    let caps = PRIMARY_RE.captures(line)?;

    Some(ParsedAthlete {
        name: caps[1].trim().to_string(),
        bib_code: caps[2].parse().ok()?,
        club: caps[3].trim().to_string(),
        time_raw: caps[4].replace(',', "."),
        score: caps[5].parse().ok()?,
    })
}

/// OCR-tolerant grammar: locate the trailing time/score pair, then recover
/// name, bib code and club from what precedes it
fn parse_ocr_tolerant(line: &str) -> Option<ParsedAthlete> {
    let suffix = LOOSE_TIME_SCORE_RE.captures(line)?;
    let time_raw = normalize_loose_time(&suffix[1]);
    let score = suffix[2].parse().ok()?;

    let suffix_start = suffix.get(0)?.start();
    let remainder = line[..suffix_start].trim();
    let caps = NAME_BIB_CLUB_RE.captures(remainder)?;

    Some(ParsedAthlete {
        name: caps[1].trim().to_string(),
        bib_code: caps[2].parse().ok()?,
        club: clean_club(&caps[3]),
        time_raw,
        score,
    })
}

/// Rewrite a loosely matched time so its last separator is the decimal point.
///
/// `31:45` (a misread `31.45`) becomes `31.45`; `1:05.32` keeps its minutes.
fn normalize_loose_time(raw: &str) -> String {
    let raw = raw.replace(',', ".");
    match raw.rfind([':', '.']) {
        Some(split) => format!("{}.{}", &raw[..split], &raw[split + 1..]),
        None => raw,
    }
}

/// Undo the club-name artifacts the text extractor is known to leave behind
fn clean_club(raw: &str) -> String {
    let club = raw.trim();
    let club = CLUB_GLYPH_RE.replace(club, "ü");
    let club = TRAILING_COLONS_RE.replace(&club, "");
    let club = TRAILING_DIGITS_RE.replace(&club, "");
    club.trim().to_string()
}
