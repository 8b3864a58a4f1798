//! Configuration structures.

use briefing_core::types::CategorySpec;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    /// Quote categories to fetch; the built-in catalog when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<CategorySpec>>,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub fetch: FetchSettings,
    #[serde(default)]
    pub fred: FredSettings,
    #[serde(default)]
    pub telegram: TelegramSettings,
    #[serde(default)]
    pub report: ReportSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "market-briefing".to_string(),
            environment: "production".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    /// Directory for daily-rolling log files; console only when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            dir: None,
        }
    }
}

/// Data collection settings: retry budget, backoff shape, pacing, lookbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Retries after the initial attempt; 0 means a single attempt.
    pub max_retries: u32,
    pub initial_delay_secs: f64,
    pub backoff_multiplier: f64,
    /// Sleep between individual fallback requests.
    pub rate_limit_delay_secs: f64,
    pub request_timeout_secs: u64,
    /// Trading sessions of history requested by the batch path.
    pub batch_lookback_days: u32,
    /// Shorter window used by the per-symbol fallback path.
    pub fallback_lookback_days: u32,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_secs: 2.0,
            backoff_multiplier: 2.0,
            rate_limit_delay_secs: 0.5,
            request_timeout_secs: 10,
            batch_lookback_days: 5,
            fallback_lookback_days: 2,
        }
    }
}

/// FRED API settings. The key itself lives in the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FredSettings {
    pub api_key_env: String,
}

impl Default for FredSettings {
    fn default() -> Self {
        Self {
            api_key_env: "FRED_API_KEY".to_string(),
        }
    }
}

/// Telegram notification settings. Token and chat id live in the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramSettings {
    pub bot_token_env: String,
    pub chat_id_env: String,
    pub max_message_length: usize,
    /// Pause between consecutive messages of one briefing.
    pub message_delay_secs: f64,
}

impl Default for TelegramSettings {
    fn default() -> Self {
        Self {
            bot_token_env: "TELEGRAM_BOT_TOKEN".to_string(),
            chat_id_env: "TELEGRAM_CHAT_ID".to_string(),
            max_message_length: 4000,
            message_delay_secs: 0.5,
        }
    }
}

/// Markdown report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub posts_dir: String,
    /// Base URL the published post will live under, used in notifications.
    pub site_base_url: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            posts_dir: "_posts/market".to_string(),
            site_base_url: "https://example.github.io/market/briefing".to_string(),
        }
    }
}
