//! Error taxonomy for a search run.
//!
//! Per-file parse and read failures are not errors in this sense: they are
//! recorded in the result and reported as warnings, and the run continues.
//! Only structural failures (bad expression, missing directory) abort the
//! run.

use std::path::PathBuf;

/// Errors that abort a search run.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An XPath expression failed to compile or evaluate.
    #[error("invalid XPath expression `{expr}`: {reason}")]
    InvalidXpath {
        /// The expression as given on the command line.
        expr: String,
        /// The evaluator's diagnostic.
        reason: String,
    },
    /// The target directory is missing or not a directory.
    #[error("directory not found: {0}")]
    DirNotFound(PathBuf),
}
