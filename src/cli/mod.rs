//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "briefing")]
#[command(author, version, about = "Scheduled daily market briefing generator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch data, write the briefing post, and send the notification
    Run(RunArgs),
    /// Fetch data and print the snapshot without writing or notifying
    Fetch(FetchArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Skip the Telegram notification
    #[arg(long)]
    pub skip_notify: bool,

    /// Write the post here instead of the configured posts directory
    #[arg(long)]
    pub posts_dir: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct FetchArgs {
    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}
