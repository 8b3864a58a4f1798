//! Telegram Bot API client.

use briefing_config::TelegramSettings;
use briefing_core::error::NotifyError;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

const API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

/// Sends the condensed briefing over the Bot API.
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
    token: String,
    chat_id: String,
    max_message_length: usize,
    message_delay: Duration,
}

impl TelegramNotifier {
    /// Read the bot token and chat id from the environment variables named
    /// in the settings. Returns `None` when either is unset so a host
    /// without credentials skips notification instead of failing the run.
    pub fn from_settings(settings: &TelegramSettings) -> Result<Option<Self>, NotifyError> {
        let token = std::env::var(&settings.bot_token_env).unwrap_or_default();
        let chat_id = std::env::var(&settings.chat_id_env).unwrap_or_default();
        if token.is_empty() || chat_id.is_empty() {
            warn!(
                "{} or {} is not set; notifications disabled",
                settings.bot_token_env, settings.chat_id_env
            );
            return Ok(None);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| NotifyError::Connection(e.to_string()))?;

        Ok(Some(Self {
            client,
            api_url: API_URL.to_string(),
            token,
            chat_id,
            max_message_length: settings.max_message_length,
            message_delay: Duration::from_secs_f64(settings.message_delay_secs),
        }))
    }

    async fn send_message(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let body = json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "Markdown",
            "disable_web_page_preview": true,
        });

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::Connection(e.to_string()))?;

        let status = resp.status();
        let api: ApiResponse = resp
            .json()
            .await
            .map_err(|e| NotifyError::Api(format!("{}: {}", status, e)))?;
        if !api.ok {
            return Err(NotifyError::Api(
                api.description.unwrap_or_else(|| status.to_string()),
            ));
        }
        Ok(())
    }

    /// Send the briefing messages in order, chunking anything over the
    /// length limit and pausing between sends.
    pub async fn send_briefing(&self, messages: &[String]) -> Result<(), NotifyError> {
        let chunks: Vec<String> = messages
            .iter()
            .flat_map(|m| crate::message::split_message(m, self.max_message_length))
            .collect();

        let total = chunks.len();
        for (i, chunk) in chunks.iter().enumerate() {
            self.send_message(chunk).await?;
            info!("telegram message {}/{} sent", i + 1, total);
            if i + 1 < total {
                tokio::time::sleep(self.message_delay).await;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_response_parsing() {
        let json = r#"{"ok": false, "error_code": 400, "description": "Bad Request: message is too long"}"#;
        let parsed: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(!parsed.ok);
        assert_eq!(
            parsed.description.as_deref(),
            Some("Bad Request: message is too long")
        );
    }

    #[test]
    fn test_api_ok_response_parsing() {
        let json = r#"{"ok": true, "result": {"message_id": 42}}"#;
        let parsed: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.ok);
        assert!(parsed.description.is_none());
    }
}
