//! Main binary entry point for the `xsearch` command-line tool.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()`
//! function so that the CLI and the integration tests exercise the same
//! code path.

use anyhow::Result;

fn main() -> Result<()> {
    let code = xsearch::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
