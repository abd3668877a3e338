//! Shared constants for the `xsearch` crate.

/// Name of the configuration file discovered by walking up from the
/// target directory.
pub const CONFIG_FILENAME: &str = ".xsearch.toml";

/// Default number of spaces between report columns.
pub const DEFAULT_PADDING: usize = 3;

/// File extension of target files, compared case-insensitively.
pub const XML_EXTENSION: &str = "xml";

/// Directory names never descended into while walking.
pub const DEFAULT_EXCLUDE_FOLDERS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    ".venv",
    "__pycache__",
    "node_modules",
    "target",
];
