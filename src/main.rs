//! Market briefing CLI application.

mod cli;

use anyhow::{Context, Result};
use briefing_config::load_config;
use briefing_monitor::setup_logging;
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // validate-config reports load errors itself, so it runs before the
    // config-dependent logging setup.
    if matches!(cli.command, Commands::ValidateConfig) {
        return cli::commands::validate::run(&cli.config).await;
    }

    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

    let level = cli
        .log_level
        .map(|l| l.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let json = cli.json_logs || config.logging.format == "json";
    let _guard = setup_logging(&level, json, config.logging.dir.as_deref());

    match cli.command {
        Commands::Run(args) => cli::commands::run::run(args, config).await,
        Commands::Fetch(args) => cli::commands::fetch::run(args, config).await,
        Commands::ValidateConfig => Ok(()),
    }
}
