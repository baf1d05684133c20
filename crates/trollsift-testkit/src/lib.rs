//! Test utilities for trollsift
//!
//! This crate provides shared testing utilities used across the trollsift workspace.

pub mod fixtures;

pub use fixtures::{by_name, ProductFixture, HRPT, IASI_L2, OLCI_L1B, PRODUCTS};

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// The directory is removed when the returned `TempDir` is dropped.
///
/// # Panics
///
/// Panics if the current directory is unknown or `.tmp/` cannot be created.
///
/// # Examples
///
/// ```rust
/// use trollsift_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("patterns.toml");
/// std::fs::write(&file_path, "[patterns]").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write a pattern file listing `patterns` as `name = "template"` entries
///
/// Returns the path of the written `patterns.toml`.
pub fn write_pattern_file(dir: &Path, strict: bool, patterns: &[(&str, &str)]) -> PathBuf {
    let mut content = format!("[options]\nstrict = {}\n\n[patterns]\n", strict);
    for (name, template) in patterns {
        content.push_str(&format!("{} = '{}'\n", name, template));
    }

    let path = dir.join("patterns.toml");
    std::fs::write(&path, content).expect("Failed to write pattern file");
    path
}
