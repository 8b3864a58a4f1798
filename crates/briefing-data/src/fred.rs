//! FRED economic statistics client.

use briefing_core::error::DataError;
use briefing_core::types::{EconomicIndicators, SeriesPoint};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, warn};

const BASE_URL: &str = "https://api.stlouisfed.org/fred";

/// Daily-updating rate series.
const DAILY_SERIES: &[(&str, &str)] = &[
    ("US 10Y Treasury", "DGS10"),
    ("US 2Y Treasury", "DGS2"),
    ("10Y-2Y Spread", "T10Y2Y"),
    ("Effective Fed Funds", "DFF"),
];

/// Weekly employment series.
const WEEKLY_SERIES: &[(&str, &str)] = &[
    ("Initial Jobless Claims", "ICSA"),
    ("Continued Claims", "CCSA"),
];

/// Headline monthly/quarterly series.
const MONTHLY_SERIES: &[(&str, &str)] = &[
    ("Unemployment Rate", "UNRATE"),
    ("CPI", "CPIAUCSL"),
    ("Core CPI", "CPILFESL"),
    ("Fed Funds Rate", "FEDFUNDS"),
    ("GDP Growth (QoQ)", "A191RL1Q225SBEA"),
    ("Retail Sales", "RSAFS"),
    ("Consumer Sentiment", "UMCSENT"),
];

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    date: String,
    /// FRED reports missing observations as ".".
    value: String,
}

/// Build a series point from observations ordered newest-first.
fn point_from_observations(observations: &[Observation]) -> Option<SeriesPoint> {
    let latest = observations.first()?;
    let value: f64 = latest.value.parse().ok()?;
    let prev_value = observations
        .get(1)
        .and_then(|o| o.value.parse::<f64>().ok());

    let change = prev_value.and_then(|prev| {
        if prev == 0.0 {
            None
        } else {
            Some(((value - prev) / prev.abs() * 100.0 * 100.0).round() / 100.0)
        }
    });

    Some(SeriesPoint {
        value,
        date: latest.date.clone(),
        prev_value,
        change,
    })
}

/// FRED series observations client.
pub struct FredClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FredClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, DataError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
            api_key,
        })
    }

    /// Construct from the named environment variable; `None` when unset.
    pub fn from_env(api_key_env: &str, timeout: Duration) -> Result<Option<Self>, DataError> {
        match std::env::var(api_key_env) {
            Ok(key) if !key.is_empty() => Ok(Some(Self::new(key, timeout)?)),
            _ => Ok(None),
        }
    }

    async fn fetch_series(&self, series_id: &str, limit: u32) -> Result<Option<SeriesPoint>, DataError> {
        let url = format!("{}/series/observations", self.base_url);
        let params = [
            ("series_id", series_id.to_string()),
            ("api_key", self.api_key.clone()),
            ("file_type", "json".to_string()),
            ("sort_order", "desc".to_string()),
            ("limit", limit.to_string()),
        ];

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(DataError::Api(format!("{}: {}", status, text)));
        }

        let data: ObservationsResponse =
            resp.json().await.map_err(|e| DataError::Parse(e.to_string()))?;
        Ok(point_from_observations(&data.observations))
    }

    async fn fetch_group(&self, series: &[(&str, &str)]) -> HashMap<String, SeriesPoint> {
        let mut results = HashMap::new();
        for (name, series_id) in series {
            match self.fetch_series(series_id, 2).await {
                Ok(Some(point)) => {
                    results.insert((*name).to_string(), point);
                }
                Ok(None) => {}
                Err(err) => warn!("FRED fetch failed for {}: {}", series_id, err),
            }
        }
        results
    }

    /// Collect all indicator groups. Individual series failures are logged
    /// and skipped.
    pub async fn fetch_all(&self) -> EconomicIndicators {
        let indicators = EconomicIndicators {
            daily: self.fetch_group(DAILY_SERIES).await,
            weekly: self.fetch_group(WEEKLY_SERIES).await,
            monthly: self.fetch_group(MONTHLY_SERIES).await,
        };
        info!(
            "economic indicators collected: {} daily, {} weekly, {} monthly",
            indicators.daily.len(),
            indicators.weekly.len(),
            indicators.monthly.len()
        );
        indicators
    }
}
