//! xsearch search engine.
//!
//! This module contains the report generator, broken down into:
//! - `types`: Result types (`SearchResult`, `ReportRow`, `ParseError`, `SearchSummary`)
//! - `fields`: Field selection and per-node value extraction
//! - Core `Searcher` struct and implementation

/// Field selection and per-node value extraction.
pub mod fields;
/// Result types and search summaries.
pub mod types;

pub use fields::FieldSelection;
pub use types::{ParseError, ReportRow, SearchResult, SearchSummary};

use crate::error::SearchError;
use crate::utils::collect_xml_files;
use amxml::dom::{new_document, NodePtr};
use std::fs;
use std::path::Path;

/// The main search engine.
/// Configuration options for the run are stored here.
pub struct Searcher {
    /// The XPath query that selects the records to report on.
    pub filter_xpath: String,
    /// XPath expressions evaluated relative to each selected record.
    /// With none given, the record itself is reported.
    pub results_xpath: Vec<String>,
    /// XPath to an identifier, evaluated per selected record.
    pub id_xpath: Option<String>,
    /// XPath selecting the sub-trees to search before the filter applies.
    pub parent_xpath: Option<String>,
    /// Which fields of a matched element are reported.
    pub fields: FieldSelection,
    /// Directory names to exclude from the walk.
    pub exclude_folders: Vec<String>,
    /// Whether to log scanned files to stderr.
    pub verbose: bool,
    /// Progress bar for tracking the scan.
    pub progress_bar: Option<indicatif::ProgressBar>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self {
            filter_xpath: String::new(),
            results_xpath: Vec::new(),
            id_xpath: None,
            parent_xpath: None,
            fields: FieldSelection::default(),
            exclude_folders: Vec::new(),
            verbose: false,
            progress_bar: None,
        }
    }
}

impl Searcher {
    /// Creates a new `Searcher` for the given filter and result expressions.
    #[must_use]
    pub fn new(filter_xpath: String, results_xpath: Vec<String>) -> Self {
        Self {
            filter_xpath,
            results_xpath,
            ..Self::default()
        }
    }

    /// The result expressions actually evaluated. With none given on the
    /// command line, the selected record itself is reported via `.`.
    #[must_use]
    pub fn effective_results(&self) -> Vec<String> {
        if self.results_xpath.is_empty() {
            vec![".".to_owned()]
        } else {
            self.results_xpath.clone()
        }
    }

    /// Column labels, in the same order as every row's cells.
    #[must_use]
    pub fn header(&self) -> Vec<String> {
        let results = self.effective_results();
        let mut header = Vec::new();
        if self.id_xpath.is_some() {
            header.push("id".to_owned());
        }
        for expr in &results {
            let base = if expr == "." { "node" } else { expr.as_str() };
            if self.fields.any() {
                for label in self.fields.labels() {
                    if results.len() == 1 {
                        header.push(label.to_owned());
                    } else {
                        header.push(format!("{base} {label}"));
                    }
                }
            } else {
                header.push(base.to_owned());
            }
        }
        header
    }

    /// Compiles every configured expression against an empty document, so
    /// malformed XPath is fatal before any file is read.
    pub fn validate_expressions(&self) -> Result<(), SearchError> {
        let probe = new_document("<probe/>").map_err(|e| SearchError::InvalidXpath {
            expr: String::new(),
            reason: e.to_string(),
        })?;

        let mut expressions = vec![self.filter_xpath.as_str()];
        expressions.extend(self.results_xpath.iter().map(String::as_str));
        if let Some(id) = &self.id_xpath {
            expressions.push(id.as_str());
        }
        if let Some(parent) = &self.parent_xpath {
            expressions.push(parent.as_str());
        }

        for expr in expressions {
            nodeset(&probe, expr)?;
        }
        Ok(())
    }

    /// Walks `dir` and evaluates the configured expressions against every
    /// XML file, sequentially and in sorted file order.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing directory or a malformed expression.
    /// A file that fails to parse is recorded in the result instead.
    pub fn search_dir(&self, dir: &Path) -> Result<SearchResult, SearchError> {
        if !dir.is_dir() {
            return Err(SearchError::DirNotFound(dir.to_path_buf()));
        }
        self.validate_expressions()?;

        let files = collect_xml_files(dir, &self.exclude_folders);
        let results = self.effective_results();

        let mut result = SearchResult {
            header: self.header(),
            rows: Vec::new(),
            parse_errors: Vec::new(),
            summary: SearchSummary::default(),
        };

        for file in &files {
            if self.verbose {
                eprintln!("[VERBOSE] scanning {}", file.display());
            }
            self.search_file(file, &results, &mut result)?;
            result.summary.total_files += 1;
            if let Some(pb) = &self.progress_bar {
                pb.inc(1);
            }
        }

        result.summary.total_rows = result.rows.len();
        Ok(result)
    }

    /// Evaluates the configured expressions against a single file,
    /// appending rows to `result`. Parse failures are recorded, not raised.
    pub fn search_file(
        &self,
        path: &Path,
        results_xpath: &[String],
        result: &mut SearchResult,
    ) -> Result<(), SearchError> {
        let source = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                result.summary.files_skipped += 1;
                result.parse_errors.push(ParseError {
                    file: path.to_path_buf(),
                    error: e.to_string(),
                });
                return Ok(());
            }
        };

        let doc = match new_document(&source) {
            Ok(d) => d,
            Err(e) => {
                result.summary.files_skipped += 1;
                result.parse_errors.push(ParseError {
                    file: path.to_path_buf(),
                    error: e.to_string(),
                });
                return Ok(());
            }
        };

        // Evaluation roots: matches of --parent if given, else the document.
        let roots = match &self.parent_xpath {
            Some(parent) => nodeset(&doc, parent)?,
            None => vec![doc.rc_clone()],
        };

        for root in &roots {
            for node in nodeset(root, &self.filter_xpath)? {
                let row = self.row_for_node(&node, results_xpath)?;
                result.rows.push(row);
            }
        }

        Ok(())
    }

    /// Builds one report row from one candidate node.
    fn row_for_node(
        &self,
        node: &NodePtr,
        results_xpath: &[String],
    ) -> Result<ReportRow, SearchError> {
        let id = match &self.id_xpath {
            Some(expr) => Some(
                nodeset(node, expr)?
                    .iter()
                    .map(fields::string_value)
                    .collect::<String>(),
            ),
            None => None,
        };

        let mut values = Vec::new();
        for expr in results_xpath {
            let matches = nodeset(node, expr)?;
            let mut cells = vec![String::new(); self.fields.column_count()];
            for matched in &matches {
                for (column, value) in self.fields.extract(matched).into_iter().enumerate() {
                    if value.is_empty() {
                        continue;
                    }
                    if !cells[column].is_empty() {
                        cells[column].push(' ');
                    }
                    cells[column].push_str(&value);
                }
            }
            values.extend(cells);
        }

        Ok(ReportRow { id, values })
    }
}

/// Evaluates `expr` relative to `node`, mapping evaluator failures to the
/// fatal expression error. An expression that fails here would fail on
/// every file the same way.
fn nodeset(node: &NodePtr, expr: &str) -> Result<Vec<NodePtr>, SearchError> {
    node.get_nodeset(expr)
        .map_err(|e| SearchError::InvalidXpath {
            expr: expr.to_owned(),
            reason: e.to_string(),
        })
}
