//! Input discovery for result sheets
//!
//! Resolves command-line inputs into an ordered, de-duplicated list of
//! documents. Plain files are taken as given, directories are walked for
//! files with an accepted extension, and arguments containing glob
//! metacharacters are expanded as patterns.

use crate::config::ExtractionConfig;
use crate::error::{Result, SwimError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const GLOB_METACHARACTERS: &[char] = &['*', '?', '['];

/// Document discovery over a list of inputs
#[derive(Debug)]
pub struct DocumentDiscovery {
    inputs: Vec<PathBuf>,
    config: ExtractionConfig,
}

impl DocumentDiscovery {
    pub fn new(inputs: Vec<PathBuf>, config: ExtractionConfig) -> Self {
        Self { inputs, config }
    }

    /// Resolve every input into document paths.
    ///
    /// Order follows the inputs; directory and pattern matches are sorted by
    /// path. A document reachable through several inputs appears once, at
    /// its first position.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let mut seen = HashSet::new();
        let mut documents = Vec::new();

        for input in &self.inputs {
            for path in self.resolve_input(input)? {
                if seen.insert(path.clone()) {
                    documents.push(path);
                }
            }
        }

        if documents.is_empty() {
            return Err(SwimError::NoDocuments {
                inputs: self.describe_inputs(),
            });
        }

        debug!(
            "Discovered {} documents from {} inputs",
            documents.len(),
            self.inputs.len()
        );
        Ok(documents)
    }

    fn resolve_input(&self, input: &Path) -> Result<Vec<PathBuf>> {
        if input.is_file() {
            return Ok(vec![input.to_path_buf()]);
        }
        if input.is_dir() {
            return Ok(self.walk_directory(input));
        }

        let raw = input.to_string_lossy();
        if raw.contains(GLOB_METACHARACTERS) {
            return expand_pattern(&raw);
        }

        Err(SwimError::DocumentNotFound {
            path: input.to_path_buf(),
        })
    }

    /// Accepted files below a directory, sorted by path
    fn walk_directory(&self, dir: &Path) -> Vec<PathBuf> {
        let walker = if self.config.recursive {
            WalkDir::new(dir)
        } else {
            WalkDir::new(dir).max_depth(1)
        };

        let mut files: Vec<PathBuf> = walker
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry under {}: {}", dir.display(), e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| self.config.accepts_extension(path))
            .collect();

        files.sort();
        debug!("Found {} documents in {}", files.len(), dir.display());
        files
    }

    fn describe_inputs(&self) -> String {
        self.inputs
            .iter()
            .map(|input| input.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Expand a glob pattern into the files it matches, sorted by path
fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|e| SwimError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let mut files: Vec<PathBuf> = paths
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    debug!("Pattern '{}' matched {} files", pattern, files.len());
    Ok(files)
}
