//! Race category normalization
//!
//! Different result sheets word the same race differently:
//! `Race 10 Boys, 200m Backstroke, 11 yaş` vs `Race 10, Boys, 200m Backstroke, 11 yaş`,
//! or `Kız` vs `Kızlar`. The category key collapses those variants into one
//! canonical string so results can be compared across documents.
//!
//! The key is all-or-nothing: if race number, gender, distance, stroke or age
//! cannot be recovered, the cleaned title is returned unmerged. Merging on a
//! partial key would silently pool unrelated races.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{
    AGE_SUFFIX, CANONICAL_RACE_MARKER, DEFAULT_RACE_NUMBER, RACE_MARKERS, STROKE_KEYWORDS,
};
use super::text::FoldedText;
use crate::models::Gender;

static RACE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let markers = RACE_MARKERS.join("|");
    Regex::new(&format!(r"(?:{markers})\s+([0-9]+)")).expect("race number pattern is valid")
});
static DISTANCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)m").expect("distance pattern is valid"));

/// Build the canonical category key for a race.
///
/// `gender` may be a formal or informal term; unknown terms are used as
/// given. The result is idempotent: feeding a key back in reproduces it.
pub fn normalize_category(race_title: &str, gender: &str, age: &str) -> String {
    let cleaned_title = race_title.trim();

    let race_number = extract_race_number(cleaned_title);
    let distance = extract_distance(cleaned_title).unwrap_or_default();
    let stroke = extract_stroke(cleaned_title).unwrap_or_default();
    let gender = standardize_gender(gender);
    let age = age.trim();

    let parts = [race_number, gender, distance, stroke, age];
    if parts.iter().all(|part| !part.is_empty()) {
        format!(
            "{CANONICAL_RACE_MARKER} {race_number}, {gender}, {distance} {stroke}, {age} {AGE_SUFFIX}"
        )
    } else {
        cleaned_title.to_string()
    }
}

/// Race number from the first `<marker> <digits>` token, `"1"` when absent
pub fn extract_race_number(title: &str) -> &str {
    RACE_NUMBER_RE
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map_or(DEFAULT_RACE_NUMBER, |m| m.as_str())
}

/// Distance token such as `100m`
pub fn extract_distance(title: &str) -> Option<&str> {
    DISTANCE_RE.find(title).map(|m| m.as_str())
}

/// Canonical stroke from the priority-ordered keyword table.
///
/// Matching is case-insensitive under both the default and the Turkish
/// lowercase mapping, so `SIRTÜSTÜ` and `IM` both resolve.
pub fn extract_stroke(title: &str) -> Option<&'static str> {
    let folded = FoldedText::new(title);
    STROKE_KEYWORDS
        .iter()
        .find(|(keyword, _)| folded.contains(keyword))
        .map(|&(_, stroke)| stroke)
}

/// Map formal or informal gender terms onto the canonical token; anything
/// else passes through untouched
pub fn standardize_gender(gender: &str) -> &str {
    match Gender::from_term(gender) {
        Gender::Unknown => gender.trim(),
        known => known.as_str(),
    }
}
