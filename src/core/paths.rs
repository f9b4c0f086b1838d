//! Path utilities
//!
//! Name matching used by the resolver, plus display normalization.

use std::path::{Path, PathBuf};

/// Default dataset file name searched for when no `--path` is given
pub const DEFAULT_DATASET: &str = "Alex_emails_march_04.csv";

/// Extension a fuzzy-match candidate must carry
pub const CSV_EXTENSION: &str = "csv";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Resolve a search root to an absolute path.
///
/// Falls back to joining onto the current directory when the root cannot be
/// canonicalized (e.g. it does not exist yet).
pub fn absolute_root(root: &Path) -> PathBuf {
    root.canonicalize().unwrap_or_else(|_| {
        if root.is_absolute() {
            root.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(root))
                .unwrap_or_else(|_| root.to_path_buf())
        }
    })
}

/// Whether the final component of `path` is exactly `name`
pub fn file_name_is(path: &Path, name: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n == name)
        .unwrap_or(false)
}

/// Whether `path` ends in `.csv` (case-sensitive, like a `*.csv` glob)
pub fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == CSV_EXTENSION)
        .unwrap_or(false)
}

/// Whether the file name of `path` contains `needle`, ignoring case
pub fn file_name_contains_ci(path: &Path, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase().contains(&needle))
        .unwrap_or(false)
}
