//! Result sheet parser
//!
//! Turns the plain-text lines of a swim-meet result sheet into athlete
//! records with canonical category keys.
//!
//! ## Architecture
//!
//! - [`time`] - race time to elapsed seconds
//! - [`athlete`] - athlete line grammars, strict and OCR-tolerant
//! - [`category`] - canonical category keys for race titles
//! - [`scanner`] - race context state machine driving the other three
//! - [`stats`] - per-document scan statistics
//! - [`text`] - case folding for mixed English/Turkish text
//!
//! ## Usage
//!
//! ```rust
//! use swim_results::parser::extract_records;
//!
//! let lines = [
//!     "Race 1 Girls, 100m Freestyle, 10 yaş",
//!     "Ayşe Yılmaz 12 CITY SC 1:05.32 450",
//!     "50m: 30.00",
//! ];
//! let records = extract_records("IZMIR", &lines);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].category_key, "Race 1, Girls, 100m Freestyle, 10 yaş");
//! ```

pub mod athlete;
pub mod category;
pub mod scanner;
pub mod stats;
pub mod text;
pub mod time;

#[cfg(test)]
mod tests;

pub use athlete::parse_athlete_line;
pub use category::normalize_category;
pub use scanner::{DocumentScanner, LineOutcome, ScanProgress, advance, extract_records};
pub use stats::{DocumentExtraction, NormalizationSummary, ScanStats};
pub use time::parse_time;
