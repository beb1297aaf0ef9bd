//! NCES school survey CLI.

use clap::{ColorChoice, Parser};
use nces_cli::logging::{LogConfig, init_logging};
use nces_cli::report::{RenderOptions, render_search, render_stats};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{run_search, run_stats};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let styled = table_styling(&cli);
    let rendered = match &cli.command {
        Command::Search(args) => run_search(args).and_then(|report| {
            let options = RenderOptions::new(args.output.into())
                .with_styling(styled)
                .with_explain(args.explain);
            Ok(render_search(&report, options)?)
        }),
        Command::Stats(args) => run_stats(args).and_then(|report| {
            let options = RenderOptions::new(args.output.into()).with_styling(styled);
            Ok(render_stats(&report, options)?)
        }),
    };
    let exit_code = match rendered {
        Ok(output) => {
            print!("{output}");
            0
        }
        Err(error) => {
            tracing::error!("Command failed: {error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn table_styling(cli: &Cli) -> bool {
    match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    }
}

/// Explicit flags win over `RUST_LOG`; `--log-level` wins over `-v/-q`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.verbosity.is_present() || cli.log_level.is_some();
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter,
        use_env_filter: !explicit,
        with_ansi,
        ..LogConfig::default()
    }
    .with_format(cli.log_format.into())
    .with_log_file(cli.log_file.clone())
}
