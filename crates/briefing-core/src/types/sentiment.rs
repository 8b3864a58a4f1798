//! Sentiment index records.

use serde::{Deserialize, Serialize};

/// Crypto Fear & Greed index reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FearGreedIndex {
    /// 0 (extreme fear) to 100 (extreme greed).
    pub value: i64,
    /// Provider classification label (e.g. "Greed").
    pub classification: String,
    pub prev_value: Option<i64>,
    /// Point change vs the previous reading.
    pub change: Option<i64>,
}

/// Market sentiment score derived from VIX and index momentum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSentiment {
    /// 0 (extreme fear) to 100 (extreme greed).
    pub value: i64,
    pub classification: String,
    /// Inputs the score was derived from, for display (e.g. "VIX 18.5").
    pub based_on: String,
}

/// All sentiment readings for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub crypto: Option<FearGreedIndex>,
    pub market: Option<MarketSentiment>,
}

impl SentimentSummary {
    pub fn is_empty(&self) -> bool {
        self.crypto.is_none() && self.market.is_none()
    }
}

/// Classify a 0-100 fear/greed score.
pub fn classify(value: i64) -> &'static str {
    match value {
        v if v <= 25 => "Extreme Fear",
        v if v <= 45 => "Fear",
        v if v <= 55 => "Neutral",
        v if v <= 75 => "Greed",
        _ => "Extreme Greed",
    }
}
