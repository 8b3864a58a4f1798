//! Sentiment indices: crypto Fear & Greed plus a VIX-derived market score.

use briefing_core::error::DataError;
use briefing_core::types::{classify, FearGreedIndex, MarketSentiment};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const BASE_URL: &str = "https://api.alternative.me";

#[derive(Debug, Deserialize)]
struct FngResponse {
    data: Vec<FngEntry>,
}

#[derive(Debug, Deserialize)]
struct FngEntry {
    value: String,
    value_classification: String,
}

/// alternative.me crypto Fear & Greed client.
pub struct FearGreedClient {
    client: Client,
    base_url: String,
}

impl FearGreedClient {
    pub fn new(timeout: Duration) -> Result<Self, DataError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Latest crypto Fear & Greed reading with change vs the prior day.
    pub async fn fetch_crypto_index(&self) -> Result<FearGreedIndex, DataError> {
        let url = format!("{}/fng/", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("limit", "2"), ("format", "json")])
            .send()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(DataError::Api(format!("{}: {}", status, text)));
        }

        let data: FngResponse = resp.json().await.map_err(|e| DataError::Parse(e.to_string()))?;
        let latest = data.data.first().ok_or(DataError::NoData)?;
        let value: i64 = latest
            .value
            .parse()
            .map_err(|_| DataError::Parse(format!("bad index value: {}", latest.value)))?;
        let prev_value = data.data.get(1).and_then(|e| e.value.parse::<i64>().ok());

        Ok(FearGreedIndex {
            value,
            classification: latest.value_classification.clone(),
            prev_value,
            change: prev_value.map(|p| value - p),
        })
    }
}

/// Derive a 0-100 market sentiment score from the VIX level, nudged by the
/// S&P 500 daily move.
///
/// Bands: VIX under 12 scores deep into greed, 12-17 greed, 17-22 neutral,
/// 22-30 fear, above 30 extreme fear. A daily index move beyond +-1% shifts
/// the score 5 points, clamped to [0, 100]. Returns `None` without a VIX
/// reading.
pub fn market_sentiment(vix: Option<f64>, sp500_change: Option<f64>) -> Option<MarketSentiment> {
    let vix = vix?;

    let mut score = if vix < 12.0 {
        95.0 - vix * 0.4
    } else if vix < 17.0 {
        90.0 - (vix - 12.0) * 4.0
    } else if vix < 22.0 {
        55.0 - (vix - 17.0) * 2.0
    } else if vix < 30.0 {
        45.0 - (vix - 22.0) * 2.5
    } else {
        (25.0 - (vix - 30.0) * 0.5).max(0.0)
    };

    if let Some(change) = sp500_change {
        if change > 1.0 {
            score = (score + 5.0).min(100.0);
        } else if change < -1.0 {
            score = (score - 5.0).max(0.0);
        }
    }

    let value = score.round() as i64;
    let based_on = match sp500_change {
        Some(change) => format!("VIX {:.1}, S&P 500 {:+.2}%", vix, change),
        None => format!("VIX {:.1}", vix),
    };

    Some(MarketSentiment {
        value,
        classification: classify(value).to_string(),
        based_on,
    })
}
