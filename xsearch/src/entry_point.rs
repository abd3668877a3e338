//! Shared entry point for the binary and the integration tests.
//!
//! All argument handling, configuration merging and rendering lives here so
//! that the CLI binary stays a one-line delegate and tests can capture the
//! report through an injected writer.

use crate::cli::Cli;
use crate::config::Config;
use crate::constants::DEFAULT_PADDING;
use crate::searcher::{FieldSelection, Searcher};
use crate::{output, utils};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Runs the report generator with the given arguments.
///
/// # Errors
///
/// Returns an error only on I/O failure while writing the report; every
/// user-level failure is reported on stderr and mapped to a non-zero exit
/// code instead.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run xsearch with the given arguments, writing output to the specified
/// writer.
///
/// This is the testable version of `run_with_args` that allows output
/// capture.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["xsearch".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, but captured
                    // by the injected writer
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    let dir = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    if !dir.is_dir() {
        eprintln!("Error: The directory '{}' does not exist.", dir.display());
        return Ok(1);
    }

    // Config file defaults, overridden by CLI flags
    let config = Config::load_from_path(&dir);
    let padding = cli
        .output
        .padding
        .or(config.xsearch.padding)
        .unwrap_or(DEFAULT_PADDING);
    let mut exclude_folders = config.xsearch.exclude_folders.clone().unwrap_or_default();
    exclude_folders.extend(cli.exclude_folders.clone());

    if cli.output.verbose && !cli.output.json {
        eprintln!("[VERBOSE] xsearch v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("[VERBOSE] Directory: {}", dir.display());
        eprintln!("[VERBOSE] Filter: {}", cli.filter_xpath);
        if !cli.results_xpath.is_empty() {
            eprintln!("[VERBOSE] Results: {:?}", cli.results_xpath);
        }
        if let Some(parent) = &cli.parent {
            eprintln!("[VERBOSE] Parent scope: {parent}");
        }
        if let Some(id) = &cli.id {
            eprintln!("[VERBOSE] Identifier: {id}");
        }
        if let Some(path) = &config.config_file_path {
            eprintln!("[VERBOSE] Config file: {}", path.display());
        }
        if !exclude_folders.is_empty() {
            eprintln!("[VERBOSE] Exclude folders: {exclude_folders:?}");
        }
        eprintln!();
    }

    let mut searcher = Searcher::new(cli.filter_xpath.clone(), cli.results_xpath.clone());
    searcher.id_xpath = cli.id.clone();
    searcher.parent_xpath = cli.parent.clone();
    searcher.fields = FieldSelection {
        tag: cli.fields.tag,
        attrib: cli.fields.attrib,
        text: cli.fields.text,
        tail: cli.fields.tail,
    };
    searcher.exclude_folders = exclude_folders;
    searcher.verbose = cli.output.verbose && !cli.output.json;

    // Count files first so the progress bar has an accurate total
    let total_files = utils::collect_xml_files(&dir, &searcher.exclude_folders).len();
    let progress = if cli.output.json {
        None
    } else {
        Some(output::create_progress_bar(total_files as u64))
    };
    searcher.progress_bar = progress.clone();

    let start_time = std::time::Instant::now();
    let result = match searcher.search_dir(&dir) {
        Ok(r) => r,
        Err(e) => {
            if let Some(pb) = progress {
                pb.finish_and_clear();
            }
            eprintln!("Error: {e}");
            return Ok(1);
        }
    };
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    // Per-file failures are warnings, never fatal (exit code stays 0)
    output::print_parse_warnings(&result);

    if cli.output.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        output::print_report(writer, &result, padding)?;
        if !cli.output.quiet {
            output::print_summary(writer, &result, start_time.elapsed())?;
        }
    }

    Ok(0)
}
