//! CoinGecko crypto price client.

use briefing_core::error::DataError;
use briefing_core::retry::RetryPolicy;
use briefing_core::types::CryptoQuote;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Debug, Deserialize)]
struct CoinPrice {
    usd: Option<f64>,
    usd_24h_change: Option<f64>,
}

/// CoinGecko `/simple/price` client.
pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl CoinGeckoClient {
    pub fn new(timeout: Duration) -> Result<Self, DataError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
            // CoinGecko's free tier rate-limits aggressively; short retries
            // with doubling backoff are usually enough to ride it out.
            retry: RetryPolicy::new(3, Duration::from_secs(1), 2.0),
        })
    }

    async fn simple_price(&self, ids: &str) -> Result<HashMap<String, CoinPrice>, DataError> {
        let url = format!("{}/simple/price", self.base_url);
        let params = [
            ("ids", ids.to_string()),
            ("vs_currencies", "usd".to_string()),
            ("include_24hr_change", "true".to_string()),
        ];

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DataError::RateLimited(status.to_string()));
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(DataError::Api(format!("{}: {}", status, text)));
        }

        resp.json().await.map_err(|e| DataError::Parse(e.to_string()))
    }

    /// Fetch USD quotes for the configured coins.
    ///
    /// `coins` maps CoinGecko ids to display symbols (e.g. "bitcoin" ->
    /// "BTC"). Coins missing from the response are skipped, not errors.
    pub async fn fetch(
        &self,
        coins: &[(String, String)],
    ) -> Result<HashMap<String, CryptoQuote>, DataError> {
        let ids = coins
            .iter()
            .map(|(id, _)| id.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let raw = self
            .retry
            .run_with(
                || self.simple_price(&ids),
                DataError::is_transient,
                |_, _| {},
            )
            .await?;

        let mut quotes = HashMap::new();
        for (id, symbol) in coins {
            if let Some(price) = raw.get(id) {
                quotes.insert(
                    symbol.clone(),
                    CryptoQuote {
                        price_usd: price.usd,
                        change_24h: price.usd_24h_change,
                    },
                );
            }
        }
        info!("crypto quotes collected: {}", quotes.len());
        Ok(quotes)
    }
}
