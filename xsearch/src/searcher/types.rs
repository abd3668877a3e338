//! Type definitions for search results.

use serde::Serialize;

/// Represents a parsing error in a file.
///
/// A file that fails to parse is skipped with a warning; it never aborts
/// the run and never changes the exit code.
#[derive(Serialize, Debug, Clone)]
pub struct ParseError {
    /// The file where the error occurred.
    pub file: std::path::PathBuf,
    /// The error message.
    pub error: String,
}

/// One line of the report: optional identifier plus the extracted cells.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Identifier value, present when `-i/--id` was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// One cell per result expression and enabled field, in argument order.
    pub values: Vec<String>,
}

/// Summary statistics for a search run.
#[derive(Serialize, Debug, Default, Clone)]
pub struct SearchSummary {
    /// Total number of files scanned, including skipped ones.
    pub total_files: usize,
    /// Number of files skipped because they failed to parse.
    pub files_skipped: usize,
    /// Total number of report rows produced.
    pub total_rows: usize,
}

/// Holds the results of a search run.
/// This struct is serialized to JSON if requested.
#[derive(Serialize, Debug)]
pub struct SearchResult {
    /// Column labels, in the same order as every row's cells.
    pub header: Vec<String>,
    /// The accumulated report rows, in sorted file order.
    pub rows: Vec<ReportRow>,
    /// List of parse errors encountered.
    pub parse_errors: Vec<ParseError>,
    /// Summary statistics of the run.
    pub summary: SearchSummary,
}
