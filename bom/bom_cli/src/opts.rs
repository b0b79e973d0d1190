#![deny(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cli::parsers::length_parser;

#[derive(Parser, Debug)]
#[command(name = "bom_cli")]
#[command(bin_name = "bom_cli")]
#[command(version, about, long_about = None)]
pub(crate) struct Opts {
    #[command(subcommand)]
    pub(crate) command: Command,

    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub(crate) trace: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) verbose: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Aggregate line items and write a BOM summary
    Summary(SummaryArgs),
}

#[derive(Debug, Parser)]
pub(crate) struct SummaryArgs {
    /// Path, relative item and output paths are resolved against it
    #[arg(long, default_value = ".")]
    pub(crate) path: PathBuf,

    /// Line items CSV file
    #[arg(long, value_name = "LINE_ITEMS_FILE")]
    pub(crate) items: PathBuf,

    /// Project name, e.g. 'Smith Residence'
    #[arg(long, value_name = "PROJECT_NAME")]
    pub(crate) project: String,

    /// Material lost per saw cut, in the same unit as the stock and cut lengths
    #[arg(long, value_name = "WIDTH", default_value = "0.125", value_parser = length_parser)]
    pub(crate) kerf: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormatArg::Csv)]
    pub(crate) format: OutputFormatArg,

    /// Output file, defaults to a name derived from the project name
    #[arg(long, value_name = "OUTPUT_FILE")]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormatArg {
    /// Spreadsheet summary
    Csv,
    /// Full report, including costs
    Json,
}
