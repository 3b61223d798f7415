//! CLI argument definitions for the UK data pipeline.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ukdp",
    version,
    about = "UK data pipeline - clean, link, and load user and login datasets",
    long_about = "Load the UK user profile and login timestamp datasets, clean and\n\
                  normalize every field, derive stable user identifiers, link logins\n\
                  to users, and persist both into a SQLite database.\n\n\
                  Running with no arguments performs the full load from the default\n\
                  dataset locations."
)]
pub struct Cli {
    /// Path to the user profile CSV (Latin-1 encoded unless --users-utf8).
    #[arg(long = "users", value_name = "PATH", default_value = "data/UK User Data.csv")]
    pub users_csv: PathBuf,

    /// Path to the login events CSV.
    #[arg(
        long = "logins",
        value_name = "PATH",
        default_value = "data/UK-User-LoginTS.csv"
    )]
    pub logins_csv: PathBuf,

    /// SQLite database file to load into.
    #[arg(
        long = "database",
        value_name = "PATH",
        default_value = "databases/user_data.db"
    )]
    pub database: PathBuf,

    /// Read the user dataset as UTF-8 instead of Latin-1.
    #[arg(long = "users-utf8")]
    pub users_utf8: bool,

    /// Match login usernames case-insensitively.
    ///
    /// The default reproduces the observed exact-match join, which misses
    /// logins whose username differs from the stored email only by case.
    #[arg(long = "match-usernames-any-case")]
    pub match_usernames_any_case: bool,

    /// Clean and link without writing to the database.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
