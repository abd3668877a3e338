//! CLI output formatting for the report and the run summary.
//!
//! The report table is rendered by hand: `--padding` must control the
//! whitespace between columns exactly, and cells must never pick up any
//! styling bytes. Auxiliary lines (warnings, footer) may be styled.

use crate::searcher::SearchResult;
use crate::utils::normalize_display_path;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// Escapes a cell for single-line rendering.
/// Embedded newlines become the two characters `\n`.
fn escape_cell(value: &str) -> String {
    value.replace('\n', "\\n")
}

/// Print the report as padded columns: a header row naming each column,
/// then one row per selected record.
///
/// An empty match set prints nothing.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_report(
    writer: &mut impl Write,
    result: &SearchResult,
    padding: usize,
) -> std::io::Result<()> {
    if result.rows.is_empty() {
        return Ok(());
    }

    let mut table: Vec<Vec<String>> = Vec::with_capacity(result.rows.len() + 1);
    table.push(result.header.iter().map(|h| escape_cell(h)).collect());
    for row in &result.rows {
        let mut cells = Vec::with_capacity(result.header.len());
        if let Some(id) = &row.id {
            cells.push(escape_cell(id));
        }
        cells.extend(row.values.iter().map(|v| escape_cell(v)));
        table.push(cells);
    }

    let columns = table.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &table {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    for row in &table {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            line.push_str(cell);
            if i + 1 < row.len() {
                let fill = widths[i] + padding - cell.chars().count();
                line.extend(std::iter::repeat(' ').take(fill));
            }
        }
        writeln!(writer, "{}", line.trim_end())?;
    }

    Ok(())
}

/// Print the run footer: row and file counters plus elapsed time.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(
    writer: &mut impl Write,
    result: &SearchResult,
    elapsed: Duration,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "\n[SUMMARY] {} rows from {} files ({} skipped)",
        result.summary.total_rows,
        result.summary.total_files,
        result.summary.files_skipped
    )?;
    writeln!(writer, "[TIME] Completed in {:.2}s", elapsed.as_secs_f64())?;
    Ok(())
}

/// Print one warning per skipped file to stderr.
pub fn print_parse_warnings(result: &SearchResult) {
    for parse_error in &result.parse_errors {
        eprintln!(
            "{} skipping {}: {}",
            "[WARN]".yellow().bold(),
            normalize_display_path(&parse_error.file),
            parse_error.error
        );
    }
}

/// Create a progress bar with file count for the scan.
///
/// In test mode, returns a hidden progress bar to avoid polluting test
/// output.
#[must_use]
pub fn create_progress_bar(total_files: u64) -> ProgressBar {
    if cfg!(test) {
        return ProgressBar::hidden();
    }

    let pb =
        ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr_with_hz(20));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.set_message("scanning...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.tick(); // Force initial draw
    pb
}
