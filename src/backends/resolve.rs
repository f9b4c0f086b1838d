//! File resolver
//!
//! Locates the dataset on disk. Resolution runs in strict priority order and
//! the first hit of the earliest stage wins:
//!
//! 1. the name as a literal path relative to the current directory
//! 2. a file anywhere under the root whose name equals the target exactly
//! 3. a `.csv` file under the root whose name contains the target, ignoring case
//!
//! Traversal order within a stage is whatever the filesystem yields.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::paths::{file_name_contains_ci, file_name_is, has_csv_extension};

/// Resolution stage that produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Literal,
    ExactName,
    Substring,
}

/// Find a dataset by name: literal path first, then a recursive search under `root`.
///
/// Returns the path together with the stage that matched.
pub fn find_file_by_name(name: &str, root: &Path) -> Option<(PathBuf, MatchKind)> {
    let candidate = PathBuf::from(name);
    if candidate.exists() {
        tracing::debug!(path = %candidate.display(), "literal path exists");
        return Some((candidate, MatchKind::Literal));
    }

    if let Some(path) = first_file(root, |p| file_name_is(p, name)) {
        tracing::debug!(path = %path.display(), "exact name match");
        return Some((path, MatchKind::ExactName));
    }

    if let Some(path) = first_file(root, |p| has_csv_extension(p) && file_name_contains_ci(p, name)) {
        tracing::debug!(path = %path.display(), "substring match");
        return Some((path, MatchKind::Substring));
    }

    tracing::debug!(name, root = %root.display(), "no candidate found");
    None
}

/// Walk `root` and return the first file accepted by `accept`.
///
/// Symlinks count when their target is a file; directory links are not
/// descended into.
fn first_file<F>(root: &Path, accept: F) -> Option<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file() || (e.path_is_symlink() && e.path().is_file()))
        .find(|e| accept(e.path()))
        .map(|e| e.into_path())
}
