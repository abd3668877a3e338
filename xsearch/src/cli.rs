use clap::{Args, Parser};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.xsearch.toml):
  Create this file in or above the target directory to set defaults.

  [xsearch]
  padding = 3                       # Spaces between report columns
  exclude_folders = [\"fixtures\"]    # Directory names to skip while walking
";

/// Which fields of a matched element each result expression reports.
///
/// With none of these set, a result expression yields a single column
/// holding the XPath string value of its matches.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct FieldOptions {
    /// Report the element tag name.
    #[arg(short = 'g', long)]
    pub tag: bool,

    /// Report the element attributes as key=value pairs.
    #[arg(short = 'a', long)]
    pub attrib: bool,

    /// Report the element text content.
    #[arg(short = 'x', long)]
    pub text: bool,

    /// Report the text immediately following the element.
    #[arg(short = 'l', long)]
    pub tail: bool,
}

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output raw JSON.
    #[arg(long)]
    pub json: bool,

    /// Spaces between report columns.
    #[arg(long, value_name = "PADDING")]
    pub padding: Option<usize>,

    /// Enable verbose output for debugging (shows files being scanned).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: print the report without the summary footer.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "xsearch - XPath searches over directories of XML files",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// The XPath query that selects the records to report on.
    pub filter_xpath: String,

    /// XPath expressions evaluated relative to each selected record,
    /// one set of report columns each. With none given, the selected
    /// record itself is reported.
    pub results_xpath: Vec<String>,

    /// Directory to walk for XML files (default: current directory).
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// XPath to an identifier, evaluated per selected record and shown
    /// as the first column.
    #[arg(short, long, value_name = "XPATH")]
    pub id: Option<String>,

    /// XPath selecting the sub-trees to search; the filter is applied
    /// relative to each match instead of the document root.
    #[arg(short, long, value_name = "XPATH")]
    pub parent: Option<String>,

    /// Field selection options (tag, attrib, text, tail).
    #[command(flatten)]
    pub fields: FieldOptions,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,

    /// Directory names to exclude from the walk.
    #[arg(long = "exclude-folder", value_name = "NAME")]
    pub exclude_folders: Vec<String>,
}
