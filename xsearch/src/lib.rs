//! Core library for the `xsearch` command-line tool.
//!
//! Evaluates an XPath filter expression against every XML file under a
//! directory, extracts fields from the matches with further XPath
//! expressions, and renders the result as a padded columnar report.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants.
pub mod constants;

/// Module defining the entry point logic.
/// The binary and the integration tests both run through it.
pub mod entry_point;

/// Module defining the error taxonomy of a search run.
pub mod error;

/// Module for CLI output formatting.
pub mod output;

/// Module containing the search engine.
/// This includes the `Searcher` struct and the report row types.
pub mod searcher;

/// Module containing utility functions.
/// This includes helper functions used across the application.
pub mod utils;
