//! UK data pipeline CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use ukdp_assemble::UsernameMatchPolicy;
use ukdp_cli::logging::{LogConfig, LogFormat, init_logging};
use ukdp_cli::pipeline::{RunConfig, run};
use ukdp_cli::summary::print_summary;
use ukdp_ingest::TextEncoding;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let config = run_config_from_cli(&cli);
    let exit_code = match run(&config) {
        Ok(summary) => {
            print_summary(&summary);
            println!("Data pipeline executed successfully!");
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run_config_from_cli(cli: &Cli) -> RunConfig {
    RunConfig {
        users_csv: cli.users_csv.clone(),
        logins_csv: cli.logins_csv.clone(),
        database: cli.database.clone(),
        users_encoding: if cli.users_utf8 {
            TextEncoding::Utf8
        } else {
            TextEncoding::Latin1
        },
        username_policy: if cli.match_usernames_any_case {
            UsernameMatchPolicy::CaseInsensitive
        } else {
            UsernameMatchPolicy::CaseSensitive
        },
        dry_run: cli.dry_run,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
