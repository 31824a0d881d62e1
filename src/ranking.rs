//! Score-based ranking within race categories.
//!
//! Ranks are derived on demand from whatever record collection the caller
//! holds (filtered or not) and are never stored on the records themselves.
//! Higher score is better. Equal scores are ordered by name, so the ranking is
//! a deterministic total order rather than an artifact of input order.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::constants::{MIN_CLUB_RECORDS, PODIUM_RANK};
use crate::models::AthleteRecord;

/// One athlete's position within a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub category_key: String,
    pub athlete_name: String,
    pub score: u32,
    pub rank: u32,
}

/// Best-first order: score descending, then name ascending
fn ranking_order(a: &AthleteRecord, b: &AthleteRecord) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name))
}

/// Rank the records of one category.
///
/// An athlete's rank is one plus the number of competitors with a strictly
/// higher score, plus the number with the same score and a lexicographically
/// smaller name. Entries come back ordered by rank, then name.
pub fn rank_within_category(records: &[AthleteRecord], category_key: &str) -> Vec<RankingEntry> {
    let mut category: Vec<&AthleteRecord> = records
        .iter()
        .filter(|record| record.category_key == category_key)
        .collect();
    category.sort_by(|a, b| ranking_order(a, b));

    let mut entries: Vec<RankingEntry> = Vec::with_capacity(category.len());
    for (position, record) in category.iter().enumerate() {
        let rank = match (position, entries.last()) {
            (_, Some(previous))
                if previous.score == record.score && previous.athlete_name == record.name =>
            {
                previous.rank
            }
            _ => position as u32 + 1,
        };

        entries.push(RankingEntry {
            category_key: category_key.to_string(),
            athlete_name: record.name.clone(),
            score: record.score,
            rank,
        });
    }

    entries
}

/// Rank every category independently, keyed by category
pub fn rank_all(records: &[AthleteRecord]) -> BTreeMap<String, Vec<RankingEntry>> {
    let mut by_category: BTreeMap<&str, Vec<AthleteRecord>> = BTreeMap::new();
    for record in records {
        by_category
            .entry(record.category_key.as_str())
            .or_default()
            .push(record.clone());
    }

    debug!("Ranking {} categories", by_category.len());

    by_category
        .into_iter()
        .map(|(key, members)| (key.to_string(), rank_within_category(&members, key)))
        .collect()
}

/// Best rank an athlete holds in a category, if they appear in it
pub fn rank_of(records: &[AthleteRecord], category_key: &str, athlete_name: &str) -> Option<u32> {
    rank_within_category(records, category_key)
        .into_iter()
        .find(|entry| entry.athlete_name == athlete_name)
        .map(|entry| entry.rank)
}

/// One record of an athlete with its standing in the record's category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteResult {
    pub record: AthleteRecord,
    pub rank: u32,
    /// Number of records in the category
    pub field_size: usize,
}

/// Performance overview of one athlete across all their categories
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteSummary {
    pub athlete_name: String,
    /// Results ordered by rank, best first
    pub results: Vec<AthleteResult>,
    pub first_places: usize,
    pub podiums: usize,
    pub average_rank: f64,
    pub average_score: f64,
}

impl AthleteSummary {
    /// Summarize an athlete's results, or `None` if they have no records
    pub fn for_athlete(records: &[AthleteRecord], athlete_name: &str) -> Option<Self> {
        let own: Vec<&AthleteRecord> = records
            .iter()
            .filter(|record| record.name == athlete_name)
            .collect();
        if own.is_empty() {
            return None;
        }

        let mut rankings: BTreeMap<&str, Vec<RankingEntry>> = BTreeMap::new();
        let mut results = Vec::with_capacity(own.len());

        for record in own {
            let entries = rankings
                .entry(record.category_key.as_str())
                .or_insert_with(|| rank_within_category(records, &record.category_key));

            let rank = entries
                .iter()
                .find(|entry| entry.athlete_name == record.name && entry.score == record.score)
                .map_or(entries.len() as u32, |entry| entry.rank);

            results.push(AthleteResult {
                record: record.clone(),
                rank,
                field_size: entries.len(),
            });
        }

        results.sort_by(|a, b| {
            a.rank
                .cmp(&b.rank)
                .then_with(|| a.record.category_key.cmp(&b.record.category_key))
        });

        let count = results.len() as f64;
        let first_places = results.iter().filter(|result| result.rank == 1).count();
        let podiums = results
            .iter()
            .filter(|result| result.rank <= PODIUM_RANK)
            .count();
        let average_rank = results.iter().map(|result| f64::from(result.rank)).sum::<f64>() / count;
        let average_score = results
            .iter()
            .map(|result| f64::from(result.record.score))
            .sum::<f64>()
            / count;

        Some(Self {
            athlete_name: athlete_name.to_string(),
            results,
            first_places,
            podiums,
            average_rank,
            average_score,
        })
    }
}

/// Aggregate performance of one club across all documents
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSummary {
    pub club: String,
    pub record_count: usize,
    pub average_score: f64,
    pub max_score: u32,
    pub average_time_seconds: f64,
    /// Documents the club appears in, sorted
    pub document_ids: Vec<String>,
}

/// Summarize every club, best average score first (ties by club name)
pub fn club_summaries(records: &[AthleteRecord]) -> Vec<ClubSummary> {
    let mut by_club: BTreeMap<&str, Vec<&AthleteRecord>> = BTreeMap::new();
    for record in records {
        by_club.entry(record.club.as_str()).or_default().push(record);
    }

    let mut clubs: Vec<ClubSummary> = by_club
        .into_iter()
        .map(|(club, members)| {
            let count = members.len() as f64;
            let document_ids: BTreeSet<&str> = members
                .iter()
                .map(|record| record.document_id.as_str())
                .collect();

            ClubSummary {
                club: club.to_string(),
                record_count: members.len(),
                average_score: members.iter().map(|r| f64::from(r.score)).sum::<f64>() / count,
                max_score: members.iter().map(|r| r.score).max().unwrap_or_default(),
                average_time_seconds: members.iter().map(|r| r.time_seconds).sum::<f64>() / count,
                document_ids: document_ids.into_iter().map(str::to_string).collect(),
            }
        })
        .collect();

    clubs.sort_by(|a, b| {
        b.average_score
            .total_cmp(&a.average_score)
            .then_with(|| a.club.cmp(&b.club))
    });

    debug!("Summarized {} clubs", clubs.len());
    clubs
}

/// Club overview limited to clubs with enough records to compare
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubReport {
    /// Clubs in best-average-first order
    pub clubs: Vec<ClubSummary>,
    /// Whether clubs below the minimum record count were left out
    pub established_only: bool,
}

impl ClubReport {
    /// Keep clubs with at least two records; if no club has that many,
    /// keep them all.
    pub fn from_records(records: &[AthleteRecord]) -> Self {
        let all = club_summaries(records);
        let established: Vec<ClubSummary> = all
            .iter()
            .filter(|club| club.record_count >= MIN_CLUB_RECORDS)
            .cloned()
            .collect();

        if established.is_empty() {
            Self {
                clubs: all,
                established_only: false,
            }
        } else {
            Self {
                clubs: established,
                established_only: true,
            }
        }
    }
}
