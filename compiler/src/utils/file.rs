//! File utility functions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Resolve a user supplied path to an absolute path
///
/// `~` and `~/rest` expand to the home directory; relative paths resolve
/// against the current directory; absolute paths pass through.
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();

    let expanded = match path {
        "" => PathBuf::from("."),
        "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        _ => match (path.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(path),
        },
    };

    if expanded.is_relative() {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    } else {
        expanded
    }
}

/// Read a UTF-8 file, naming the path on failure
pub fn read_text(path: &Path) -> Result<String> {
    tracing::trace!(path = %path.display(), "Reading file");
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
