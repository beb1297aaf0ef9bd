//! CLI argument definitions for the school survey tool.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use nces_cli::logging::LogFormat;
use nces_cli::report::ReportFormat;

/// Environment variable naming the default dataset file.
pub const DATA_ENV_VAR: &str = "NCES_SCHOOL_DATA";

/// Dataset file used when neither `--data` nor the environment names one.
pub const DEFAULT_DATA_FILE: &str = "school_data.csv";

#[derive(Parser)]
#[command(
    name = "nces",
    version,
    about = "Search and summarize the NCES public school survey file",
    long_about = "Search and summarize the NCES public school universe file.\n\n\
                  Ranks schools by name, city and state for free-text queries and\n\
                  reports school counts by state, locale and city."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank schools against a free-text query.
    Search(SearchArgs),

    /// Report school counts by state, locale and city.
    Stats(StatsArgs),
}

#[derive(Args)]
pub struct DataArgs {
    /// Dataset CSV file (default: $NCES_SCHOOL_DATA, then school_data.csv).
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Character encoding of the dataset (any WHATWG label).
    #[arg(long = "encoding", value_name = "LABEL", default_value = "cp1252")]
    pub encoding: String,

    /// Field delimiter.
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = ',')]
    pub delimiter: char,

    /// Pad records shorter than the header instead of rejecting them on access.
    #[arg(long = "pad-short-rows")]
    pub pad_short_rows: bool,
}

impl DataArgs {
    /// Dataset path from `--data`, the environment, or the default file name.
    pub fn data_path(&self) -> PathBuf {
        if let Some(path) = &self.data {
            return path.clone();
        }
        std::env::var_os(DATA_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Delimiter as a single byte.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be an ASCII character, got '{}'", self.delimiter);
        }
        Ok(self.delimiter as u8)
    }
}

#[derive(Args)]
pub struct SearchArgs {
    /// Query words; multiple arguments are joined with spaces.
    #[arg(value_name = "QUERY", required = true)]
    pub query: Vec<String>,

    /// Maximum number of results.
    #[arg(long = "top", short = 'k', value_name = "K", default_value_t = nces_search::DEFAULT_TOP_K)]
    pub top: usize,

    /// Add up city and state weights across query words instead of keeping the last match.
    #[arg(long = "accumulate-field-matches")]
    pub accumulate_field_matches: bool,

    /// Show the score breakdown for each result.
    #[arg(long = "explain")]
    pub explain: bool,

    /// Report format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Report format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Plain,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<OutputFormatArg> for ReportFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => Self::Table,
            OutputFormatArg::Plain => Self::Plain,
            OutputFormatArg::Json => Self::Json,
        }
    }
}

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "nces", "search", "foley", "high", "--top", "5", "--data", "s.csv", "--explain",
        ])
        .unwrap();
        let Command::Search(args) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(args.query, vec!["foley", "high"]);
        assert_eq!(args.top, 5);
        assert!(args.explain);
        assert_eq!(args.data.data_path(), PathBuf::from("s.csv"));
        assert_eq!(args.data.encoding, "cp1252");
        assert_eq!(args.data.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["nces", "search"]).is_err());
    }

    #[test]
    fn test_parse_stats_with_globals() {
        let cli = Cli::try_parse_from([
            "nces", "stats", "--encoding", "utf-8", "--output", "json", "--log-format", "json",
        ])
        .unwrap();
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        let Command::Stats(args) = cli.command else {
            panic!("expected stats command");
        };
        assert_eq!(args.data.encoding, "utf-8");
        assert!(matches!(args.output, OutputFormatArg::Json));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let cli = Cli::try_parse_from(["nces", "stats", "--delimiter", "§"]).unwrap();
        let Command::Stats(args) = cli.command else {
            panic!("expected stats command");
        };
        assert!(args.data.delimiter_byte().is_err());
    }
}
