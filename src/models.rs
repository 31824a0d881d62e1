//! Core data structures for swim result extraction.
//!
//! Defines the race context carried across a document scan, the athlete
//! records the scan emits, and the processing summary reported by the
//! document processor.

use crate::constants::{AGE_SUFFIX, gender_terms};
use crate::parser::text::FoldedText;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field a race is contested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    Girls,
    Boys,
    #[default]
    Unknown,
}

impl Gender {
    /// Detect the gender of a race header by case-insensitive substring match.
    ///
    /// Formal spellings win over informal ones; either way the result is the
    /// formal field.
    pub fn from_header(line: &str) -> Self {
        let folded = FoldedText::new(line);
        let contains_any = |terms: &[&str]| {
            terms
                .iter()
                .any(|term| folded.contains(&term.to_lowercase()))
        };

        if contains_any(gender_terms::GIRLS_FORMAL) {
            Gender::Girls
        } else if contains_any(gender_terms::BOYS_FORMAL) {
            Gender::Boys
        } else if contains_any(gender_terms::GIRLS_INFORMAL) {
            Gender::Girls
        } else if contains_any(gender_terms::BOYS_INFORMAL) {
            Gender::Boys
        } else {
            Gender::Unknown
        }
    }

    /// Map a standalone gender term (formal or informal) onto a field
    pub fn from_term(term: &str) -> Self {
        let folded = FoldedText::new(term.trim());
        let is_any = |terms: &[&str]| terms.iter().any(|known| folded.equals(&known.to_lowercase()));

        if is_any(gender_terms::GIRLS_FORMAL) || is_any(gender_terms::GIRLS_INFORMAL) {
            Gender::Girls
        } else if is_any(gender_terms::BOYS_FORMAL) || is_any(gender_terms::BOYS_INFORMAL) {
            Gender::Boys
        } else {
            Gender::Unknown
        }
    }

    /// Canonical token, empty for an unknown field
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Girls => gender_terms::GIRLS,
            Gender::Boys => gender_terms::BOYS,
            Gender::Unknown => "",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Gender::Unknown
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Unknown => write!(f, "Unknown"),
            known => write!(f, "{}", known.as_str()),
        }
    }
}

/// Race information in effect while scanning one document.
///
/// Threaded through the scan as an explicit accumulator; see
/// [`crate::parser::scanner::advance`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RaceContext {
    /// Race header with its age suffix removed
    pub race_base: String,
    pub age: Option<u8>,
    pub gender: Gender,
}

/// Coarse scan state derived from a [`RaceContext`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    NoContext,
    HasRaceNoAge,
    HasRaceAndAge,
}

impl RaceContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScanState {
        match (self.race_base.is_empty(), self.age) {
            (true, _) => ScanState::NoContext,
            (false, None) => ScanState::HasRaceNoAge,
            (false, Some(_)) => ScanState::HasRaceAndAge,
        }
    }

    /// Whether athlete lines may be attributed to this context
    pub fn accepts_athletes(&self) -> bool {
        self.state() == ScanState::HasRaceAndAge && self.gender.is_known()
    }

    /// Race title as recorded on each athlete record: base plus age suffix
    pub fn race_title(&self) -> String {
        match self.age {
            Some(age) => format!("{}, {} {}", self.race_base, age, AGE_SUFFIX),
            None => self.race_base.clone(),
        }
    }
}

/// Fields recovered from a single athlete line, before any context is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAthlete {
    pub name: String,
    pub bib_code: u32,
    pub club: String,
    pub time_raw: String,
    pub score: u32,
}

/// One athlete's result in one race of one document.
///
/// Field names are serialized in camelCase; exporters depend on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteRecord {
    pub document_id: String,
    pub race_title_raw: String,
    pub category_key: String,
    pub gender: Gender,
    pub age: String,
    pub bib_code: u32,
    pub name: String,
    pub club: String,
    pub time_raw: String,
    pub time_seconds: f64,
    pub score: u32,
}

/// Summary of a processing run over many documents
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingSummary {
    pub documents_processed: usize,
    pub documents_failed: usize,
    /// Documents read successfully that produced no records
    pub documents_empty: usize,
    pub total_records: usize,
    /// Distinct raw race titles seen across all records
    pub raw_race_titles: usize,
    /// Distinct category keys after normalization
    pub categories: usize,
    pub processing_time_ms: u128,
}

impl ProcessingSummary {
    /// Whether normalization merged differently worded race titles
    pub fn normalization_collapsed(&self) -> bool {
        self.categories < self.raw_race_titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_formal_preferred_over_informal() {
        assert_eq!(Gender::from_header("Yarış 3 Kızlar, 50m Serbest"), Gender::Girls);
        assert_eq!(Gender::from_header("Yarış 3, Erkek, 50m Serbest"), Gender::Boys);
        assert_eq!(Gender::from_header("Race 3 Boys, 50m Freestyle"), Gender::Boys);
        assert_eq!(Gender::from_header("Race 3, 50m Freestyle"), Gender::Unknown);
        assert_eq!(Gender::from_header("Yarış 2 ERKEKLER, 50m SIRTÜSTÜ"), Gender::Boys);
        assert_eq!(Gender::from_header("YARIŞ 4 KIZLAR, 100m SERBEST"), Gender::Girls);
    }

    #[test]
    fn test_gender_from_term() {
        assert_eq!(Gender::from_term("Kız"), Gender::Girls);
        assert_eq!(Gender::from_term("Erkekler"), Gender::Boys);
        assert_eq!(Gender::from_term("Mixed"), Gender::Unknown);
        assert_eq!(Gender::from_term("KIZLAR"), Gender::Girls);
        assert_eq!(Gender::from_term(" ERKEK "), Gender::Boys);
    }

    #[test]
    fn test_race_context_state() {
        let mut context = RaceContext::new();
        assert_eq!(context.state(), ScanState::NoContext);

        context.race_base = "Race 1 Girls, 100m Freestyle".to_string();
        assert_eq!(context.state(), ScanState::HasRaceNoAge);
        assert!(!context.accepts_athletes());

        context.age = Some(10);
        context.gender = Gender::Girls;
        assert_eq!(context.state(), ScanState::HasRaceAndAge);
        assert!(context.accepts_athletes());
        assert_eq!(
            context.race_title(),
            "Race 1 Girls, 100m Freestyle, 10 yaş"
        );
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = AthleteRecord {
            document_id: "IZMIR".to_string(),
            race_title_raw: "Race 1 Girls, 100m Freestyle, 10 yaş".to_string(),
            category_key: "Race 1, Girls, 100m Freestyle, 10 yaş".to_string(),
            gender: Gender::Girls,
            age: "10".to_string(),
            bib_code: 12,
            name: "Ayşe Yılmaz".to_string(),
            club: "CITY SC".to_string(),
            time_raw: "1:05.32".to_string(),
            time_seconds: 65.32,
            score: 450,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["documentId"], "IZMIR");
        assert_eq!(json["categoryKey"], "Race 1, Girls, 100m Freestyle, 10 yaş");
        assert_eq!(json["bibCode"], 12);
        assert_eq!(json["timeSeconds"], 65.32);
        assert_eq!(json["gender"], "Girls");
    }
}
