//! Yahoo Finance quote provider.
//!
//! Uses the v8 spark endpoint for batched requests and the v8 chart endpoint
//! for individual symbols. Both return daily closing-price series; null
//! closes (half sessions, fresh listings) are filtered out.

use async_trait::async_trait;
use briefing_core::error::DataError;
use briefing_core::traits::QuoteProvider;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

const BASE_URL: &str = "https://query1.finance.yahoo.com";
// Yahoo rejects requests without a browser-looking agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0";

#[derive(Debug, Deserialize)]
struct SparkResponse {
    spark: SparkBody,
}

#[derive(Debug, Deserialize)]
struct SparkBody {
    result: Option<Vec<SparkResult>>,
}

#[derive(Debug, Deserialize)]
struct SparkResult {
    symbol: String,
    response: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    close: Option<Vec<Option<f64>>>,
}

impl ChartResult {
    /// Time-ordered closes with null observations dropped.
    fn closes(&self) -> Vec<f64> {
        self.indicators
            .quote
            .first()
            .and_then(|q| q.close.as_ref())
            .map(|closes| closes.iter().filter_map(|c| *c).collect())
            .unwrap_or_default()
    }
}

/// Yahoo Finance historical price provider.
pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    pub fn new(timeout: Duration) -> Result<Self, DataError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, DataError> {
        let resp = self
            .client
            .get(url)
            .query(params)
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
}

#[async_trait]
impl QuoteProvider for YahooProvider {
    async fn fetch_batch(
        &self,
        symbols: &[String],
        lookback_days: u32,
    ) -> Result<HashMap<String, Vec<f64>>, DataError> {
        let url = format!("{}/v8/finance/spark", self.base_url);
        let params = [
            ("symbols", symbols.join(",")),
            ("range", format!("{}d", lookback_days)),
            ("interval", "1d".to_string()),
        ];

        debug!("spark request for {} symbols", symbols.len());
        let data: SparkResponse = self.get_json(&url, &params).await?;

        let mut series = HashMap::new();
        for result in data.spark.result.unwrap_or_default() {
            let closes = result
                .response
                .as_ref()
                .and_then(|r| r.first())
                .map(|c| c.closes())
                .unwrap_or_default();
            if !closes.is_empty() {
                series.insert(result.symbol, closes);
            }
        }
        Ok(series)
    }

    async fn fetch_single(&self, symbol: &str, lookback_days: u32) -> Result<Vec<f64>, DataError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        let params = [
            ("range", format!("{}d", lookback_days)),
            ("interval", "1d".to_string()),
        ];

        let data: ChartResponse = self.get_json(&url, &params).await?;
        let closes = data
            .chart
            .result
            .as_ref()
            .and_then(|r| r.first())
            .map(|c| c.closes())
            .unwrap_or_default();

        if closes.is_empty() {
            return Err(DataError::SymbolNotFound(symbol.to_string()));
        }
        Ok(closes)
    }

    fn name(&self) -> &str {
        "yahoo"
    }
}
