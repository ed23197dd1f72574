//! Scratch-file helpers for conversion tests.
//!
//! Each test gets its own temporary directory holding the Markdown source and
//! the HTML destination. Everything is removed when the `TempDir` drops.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fresh directory for one conversion's input and output
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Write `content` to `filename` inside the scratch directory
pub fn write_scratch_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Destination inside the scratch directory that must not exist yet
pub fn html_destination(dir: &TempDir, filename: &str) -> PathBuf {
    let path = dir.path().join(filename);
    assert!(!path.exists(), "{} already exists", path.display());
    path
}

/// Read a converted HTML file back as text
pub fn read_html(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
