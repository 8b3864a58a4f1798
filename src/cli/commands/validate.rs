//! Validate configuration command.

use anyhow::Result;
use briefing_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Max retries: {}", config.fetch.max_retries);
            println!("Initial delay: {}s", config.fetch.initial_delay_secs);
            println!("Backoff multiplier: {}", config.fetch.backoff_multiplier);
            println!("Batch lookback: {}d", config.fetch.batch_lookback_days);
            println!("Fallback lookback: {}d", config.fetch.fallback_lookback_days);
            println!("FRED key env: {}", config.fred.api_key_env);
            println!("Posts dir: {}", config.report.posts_dir);
            println!(
                "Telegram env: {} / {}",
                config.telegram.bot_token_env, config.telegram.chat_id_env
            );
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
