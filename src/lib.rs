//! Swim Results Library
//!
//! A Rust library for extracting athlete results from the OCR'd text of
//! swim-meet result sheets and normalizing them into comparable categories.
//!
//! This library provides tools for:
//! - Scanning result sheet lines with a race context state machine
//! - Parsing athlete lines, including OCR-damaged ones
//! - Normalizing race times to seconds
//! - Collapsing differently worded race titles into canonical category keys
//! - Ranking athletes within categories and summarizing their performance
//! - Processing many documents concurrently with ordered merging

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;
pub mod ranking;

// Re-export commonly used types
pub use config::ExtractionConfig;
pub use error::{Result, SwimError};
pub use models::{AthleteRecord, Gender, ProcessingSummary, RaceContext};
pub use parser::{extract_records, normalize_category, parse_time};
pub use processor::{DocumentProcessor, ProcessOutput};
pub use ranking::{
    AthleteSummary, ClubReport, ClubSummary, RankingEntry, club_summaries, rank_all, rank_of,
    rank_within_category,
};
