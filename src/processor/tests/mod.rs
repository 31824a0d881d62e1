//! Integration tests for the processor module
//!
//! Tests the complete processing pipeline over temporary meet directories.

pub mod error_handling;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const IZMIR_SHEET: &str = "\
Splash Meet Manager, 11.00000 Registered to Izmir
Race 1 Girls, 100m Freestyle, 10 yaş
Ayşe Yılmaz 12 CITY SC 1:05.32 450
50m: 30.00
Zeynep Kaya 15 BAY SC 1:07.10 410

Race 3 Boys, 10-12 yaş, 50m Butterfly
10 yaş
Mehmet Demir 22 ANKARA SPOR 31.45 380
";

pub const ANKARA_SHEET: &str = "\
Yarış 1 Kızlar, 100m Serbest, 10 yaş
Elif Ak 31 ANKARA SPOR 1:04.90 470
Can Öztürk 33 ODTÜ SK 0.00 0
";

/// Write a file below the temp dir, creating parent directories
pub fn write_document(temp_dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}
