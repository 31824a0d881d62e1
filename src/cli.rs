//! Command-line interface components.

use crate::config::ExtractionConfig;
use crate::constants::CLUB_REPORT_LIMIT;
use crate::error::SwimError;
use crate::models::{AthleteRecord, ProcessingSummary};
use crate::processor::DocumentProcessor;
use crate::ranking::{AthleteSummary, ClubReport, RankingEntry, rank_all, rank_within_category};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "swim-results")]
#[command(about = "Extract and normalize swim-meet results from OCR'd result sheets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Result sheet files, directories or glob patterns
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Write the merged records to this file as JSON
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print a performance summary for one athlete
    #[arg(long, value_name = "NAME")]
    pub athlete: Option<String>,

    /// Print the ranking of one category key
    #[arg(long, value_name = "KEY")]
    pub category: Option<String>,

    /// Print the ranking of every category
    #[arg(long)]
    pub rankings: bool,

    /// Print clubs ordered by average score
    #[arg(long)]
    pub clubs: bool,

    /// Maximum number of documents scanned concurrently (default: CPU count)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Only read the top level of directory inputs
    #[arg(long)]
    pub no_recursive: bool,

    /// File extension picked up from directories (repeatable)
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report warnings and errors; no progress bar or summary
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level for the crate's own targets
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Map the flags onto an extraction configuration
    pub fn to_config(&self) -> ExtractionConfig {
        let mut config = ExtractionConfig::default();

        if let Some(jobs) = self.jobs {
            config = config.with_max_concurrent_documents(jobs);
        }
        if self.no_recursive {
            config = config.without_recursion();
        }
        if !self.extensions.is_empty() {
            config = config.with_file_extensions(self.extensions.clone());
        }
        if !self.show_progress() {
            config = config.without_progress();
        }

        config
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("swim_results={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Run the whole extraction: process inputs, write output, print reports
pub async fn run(args: Args) -> Result<ProcessingSummary> {
    let config = args.to_config();
    debug!("Inputs: {:?}", args.inputs);

    let output = DocumentProcessor::new(args.inputs.clone())
        .with_config(config)
        .process()
        .await
        .context("Failed to process result sheets")?;

    if let Some(path) = &args.output {
        write_records(path, &output.records)
            .with_context(|| format!("Failed to write records to {}", path.display()))?;
        info!("Wrote {} records to {}", output.records.len(), path.display());
    }

    if !args.quiet {
        output.print_summary();
    }

    if let Some(key) = &args.category {
        print_ranking(key, &rank_within_category(&output.records, key));
    }

    if args.rankings {
        for (key, entries) in rank_all(&output.records) {
            print_ranking(&key, &entries);
        }
    }

    if args.clubs {
        print_club_report(&ClubReport::from_records(&output.records));
    }

    if let Some(name) = &args.athlete {
        match AthleteSummary::for_athlete(&output.records, name) {
            Some(summary) => print_athlete_summary(&summary),
            None => println!(
                "\n{} {}",
                "No results found for athlete:".bright_yellow(),
                name.bright_white()
            ),
        }
    }

    Ok(output.summary)
}

/// Write records as pretty-printed JSON, creating parent directories
pub fn write_records(path: &Path, records: &[AthleteRecord]) -> Result<(), SwimError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

fn print_ranking(category_key: &str, entries: &[RankingEntry]) {
    println!("\n{}", category_key.bright_green().bold());
    if entries.is_empty() {
        println!("  {}", "No results in this category".bright_yellow());
        return;
    }

    for entry in entries {
        println!(
            "  {:>3}. {:<30} {}",
            entry.rank.to_string().bright_white().bold(),
            entry.athlete_name,
            entry.score.to_string().bright_cyan()
        );
    }
}

fn print_club_report(report: &ClubReport) {
    let heading = if report.established_only {
        "Clubs with at least two results"
    } else {
        "Clubs"
    };
    println!("\n{}", heading.bright_green().bold());
    if report.clubs.is_empty() {
        println!("  {}", "No club results".bright_yellow());
        return;
    }

    for (position, club) in report.clubs.iter().take(CLUB_REPORT_LIMIT).enumerate() {
        println!(
            "  {:>3}. {:<30} {} {:.0}  {} {}  {} {}  {} {:.2}s",
            (position + 1).to_string().bright_white().bold(),
            club.club,
            "avg".bright_cyan(),
            club.average_score,
            "max".bright_cyan(),
            club.max_score,
            "results".bright_cyan(),
            club.record_count,
            "avg time".bright_cyan(),
            club.average_time_seconds
        );
        println!("       {}", club.document_ids.join(", ").dimmed());
    }
}

fn print_athlete_summary(summary: &AthleteSummary) {
    println!("\n{}", summary.athlete_name.bright_green().bold());
    println!(
        "  {} {}",
        "Races:".bright_cyan(),
        summary.results.len().to_string().bright_white()
    );
    println!(
        "  {} {}   {} {}",
        "First places:".bright_cyan(),
        summary.first_places.to_string().bright_white().bold(),
        "Podiums:".bright_cyan(),
        summary.podiums.to_string().bright_white().bold()
    );
    println!(
        "  {} {:.2}   {} {:.1}",
        "Average rank:".bright_cyan(),
        summary.average_rank,
        "Average score:".bright_cyan(),
        summary.average_score
    );

    for result in &summary.results {
        println!(
            "  {}/{}  {}  {} ({})  {}",
            result.rank.to_string().bright_white().bold(),
            result.field_size,
            result.record.category_key,
            result.record.time_raw,
            result.record.document_id,
            result.record.score.to_string().bright_cyan()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_args_map_onto_config() {
        let args = Args::parse_from([
            "swim-results",
            "meet/",
            "-j",
            "2",
            "--no-recursive",
            "--extension",
            "txt",
            "--extension",
            "text",
            "-q",
        ]);

        let config = args.to_config();

        assert_eq!(args.get_log_level(), "warn");
        assert_eq!(config.max_concurrent_documents, 2);
        assert!(!config.recursive);
        assert!(!config.show_progress);
        assert_eq!(config.file_extensions, ["txt", "text"]);
    }

    #[test]
    fn test_verbosity_levels() {
        let args = Args::parse_from(["swim-results", "izmir.txt", "-v"]);
        assert_eq!(args.get_log_level(), "debug");
        assert!(args.show_progress());

        let args = Args::parse_from(["swim-results", "izmir.txt", "-vvv"]);
        assert_eq!(args.get_log_level(), "trace");

        let args = Args::parse_from(["swim-results", "izmir.txt"]);
        assert_eq!(args.get_log_level(), "warn");
    }

    #[test]
    fn test_clubs_flag() {
        let args = Args::parse_from(["swim-results", "meet/", "--clubs"]);
        assert!(args.clubs);
        assert!(!Args::parse_from(["swim-results", "meet/"]).clubs);
    }

    #[test]
    fn test_inputs_are_required() {
        assert!(Args::try_parse_from(["swim-results"]).is_err());
    }

    #[test]
    fn test_write_records_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("records.json");
        let records = crate::parser::extract_records(
            "IZMIR",
            &[
                "Race 1 Girls, 100m Freestyle, 10 yaş",
                "Ayşe Yılmaz 12 CITY SC 1:05.32 450",
            ],
        );

        write_records(&path, &records).unwrap();

        let written: Vec<AthleteRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, records);
    }

    #[test]
    fn test_write_records_reports_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("out");
        fs::write(&blocker, "not a directory").unwrap();

        let result = write_records(&blocker.join("records.json"), &[]);

        assert!(matches!(result, Err(SwimError::Io(_))));
    }
}
