//! File system traversal with exclusion pruning

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Check if a path should be excluded from validation. Exclusions are
/// plain substrings matched against the full path.
pub fn is_excluded(path: &Path, exclusions: &[String]) -> bool {
    let path_str = path.to_string_lossy();
    exclusions
        .iter()
        .any(|exclusion| path_str.contains(exclusion.as_str()))
}

/// Check if a bare name is hidden (dot-prefixed)
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Walk a root recursively in deterministic (name-sorted) order, pruning
/// excluded directories entirely. The root itself is not yielded.
pub fn walk<'a>(root: &Path, exclusions: &'a [String]) -> impl Iterator<Item = DirEntry> + 'a {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !is_excluded(entry.path(), exclusions))
        .flatten()
}
