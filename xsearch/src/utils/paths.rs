//! Path utilities for xsearch.
//!
//! This module consolidates all path-related logic for:
//! - Cross-platform path normalization
//! - XML file discovery with gitignore support

use crate::constants::{DEFAULT_EXCLUDE_FOLDERS, XML_EXTENSION};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use xsearch::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\records\\a.xml")), "records/a.xml");
/// assert_eq!(normalize_display_path(Path::new("./data/b.xml")), "data/b.xml");
/// ```
#[must_use]
pub fn normalize_display_path(path: &std::path::Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Checks if a name matches any exclusion pattern.
/// Supports exact matching and wildcard patterns starting with `*.`.
#[must_use]
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    for exclude in excludes {
        if exclude.starts_with("*.") {
            if name.ends_with(&exclude[1..]) {
                return true;
            }
        } else if name == exclude {
            return true;
        }
    }
    false
}

/// Collects XML files from a directory with gitignore support.
///
/// Uses the `ignore` crate to respect .gitignore, .git/info/exclude, and
/// global gitignore IN ADDITION to the hardcoded default exclusions
/// (.git, node_modules, target, etc.). Excluded directories are pruned at
/// traversal time so the walk never descends into them.
///
/// The returned list is sorted, which pins the report order for a given
/// tree.
///
/// # Arguments
/// * `root` - Root directory to search
/// * `exclude` - Additional user-specified exclusion patterns
#[must_use]
pub fn collect_xml_files(root: &std::path::Path, exclude: &[String]) -> Vec<std::path::PathBuf> {
    use ignore::WalkBuilder;

    // Merge user excludes with default excludes
    let default_excludes: Vec<String> = DEFAULT_EXCLUDE_FOLDERS
        .iter()
        .map(|&s| s.to_owned())
        .collect();
    let all_excludes: Vec<String> = exclude.iter().cloned().chain(default_excludes).collect();

    let root_for_filter = root.to_path_buf();

    // Use ignore crate's WalkBuilder for gitignore support.
    // filter_entry skips excluded directories at traversal time,
    // preventing descent into node_modules, .venv, target, etc.
    let walker = WalkBuilder::new(root)
        .hidden(false) // Don't skip hidden files (we handle that with defaults)
        .git_ignore(true) // Respect .gitignore files
        .git_global(true) // Respect global gitignore
        .git_exclude(true) // Respect .git/info/exclude
        .filter_entry(move |entry| {
            // Always allow the root directory
            if entry.path() == root_for_filter {
                return true;
            }

            // Only filter directories - files are filtered by extension below
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }

            // Check if directory name matches any exclusion pattern
            if let Some(name) = entry.file_name().to_str() {
                if is_excluded(name, &all_excludes) {
                    return false;
                }
            }

            true
        })
        .build();

    let mut files = Vec::new();

    for entry in walker.flatten() {
        let path = entry.path();

        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }

        let is_xml = path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(XML_EXTENSION));
        if !is_xml {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    files
}
