//! Configuration for document processing.
//!
//! The extraction core is configuration-free apart from the progress
//! interval; everything else here governs how the document processor finds
//! and schedules result sheets.

use crate::constants::{DEFAULT_FILE_EXTENSIONS, DEFAULT_PROGRESS_INTERVAL};
use crate::error::{Result, SwimError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Global configuration for result sheet processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Maximum documents scanned concurrently
    pub max_concurrent_documents: usize,

    /// Lines between progress callback invocations
    pub progress_interval: usize,

    /// File extensions picked up when walking directories
    pub file_extensions: Vec<String>,

    /// Descend into subdirectories of directory inputs
    pub recursive: bool,

    /// Draw a progress bar while scanning
    pub show_progress: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_concurrent_documents: num_cpus::get(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            file_extensions: DEFAULT_FILE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            recursive: true,
            show_progress: true,
        }
    }
}

impl ExtractionConfig {
    /// Set maximum concurrent documents
    pub fn with_max_concurrent_documents(mut self, max_documents: usize) -> Self {
        self.max_concurrent_documents = max_documents;
        self
    }

    /// Set the progress callback interval in lines
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Replace the accepted file extensions
    pub fn with_file_extensions(mut self, extensions: Vec<String>) -> Self {
        self.file_extensions = extensions;
        self
    }

    /// Only look at the top level of directory inputs
    pub fn without_recursion(mut self) -> Self {
        self.recursive = false;
        self
    }

    /// Disable the progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Whether a path's extension is one of the configured ones (case-insensitive)
    pub fn accepts_extension(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.file_extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }

    /// Check the configuration for values the processor cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_documents == 0 {
            return Err(SwimError::configuration(
                "max_concurrent_documents must be at least 1",
            ));
        }
        if self.progress_interval == 0 {
            return Err(SwimError::configuration(
                "progress_interval must be at least 1",
            ));
        }
        if self.file_extensions.is_empty() {
            return Err(SwimError::configuration(
                "at least one file extension is required",
            ));
        }

        debug!(
            "Configuration: {} concurrent documents, progress every {} lines, extensions {:?}",
            self.max_concurrent_documents, self.progress_interval, self.file_extensions
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.progress_interval, 50);
        assert!(config.recursive);
    }

    #[test]
    fn test_builder_methods() {
        let config = ExtractionConfig::default()
            .with_max_concurrent_documents(2)
            .with_progress_interval(10)
            .with_file_extensions(vec![".TXT".to_string(), "text".to_string()])
            .without_recursion()
            .without_progress();

        assert_eq!(config.max_concurrent_documents, 2);
        assert_eq!(config.progress_interval, 10);
        assert!(!config.recursive);
        assert!(!config.show_progress);
        assert!(config.accepts_extension(Path::new("izmir.txt")));
        assert!(config.accepts_extension(Path::new("bursa.text")));
        assert!(!config.accepts_extension(Path::new("bursa.pdf")));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractionConfig::default().with_max_concurrent_documents(0);
        assert!(matches!(
            config.validate(),
            Err(SwimError::Configuration { .. })
        ));

        let config = ExtractionConfig::default().with_file_extensions(Vec::new());
        assert!(config.validate().is_err());
    }
}
