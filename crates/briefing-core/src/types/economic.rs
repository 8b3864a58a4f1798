//! Economic statistics series records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Latest observation of one statistics series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub value: f64,
    /// Observation date as reported by the provider (e.g. "2026-07-01").
    pub date: String,
    pub prev_value: Option<f64>,
    /// Percent change vs the previous observation, rounded to 2 decimals.
    pub change: Option<f64>,
}

/// Economic indicators grouped by release cadence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomicIndicators {
    /// Daily series (treasury yields, effective funds rate).
    pub daily: HashMap<String, SeriesPoint>,
    /// Weekly series (jobless claims).
    pub weekly: HashMap<String, SeriesPoint>,
    /// Monthly/quarterly headline series (CPI, unemployment, GDP).
    pub monthly: HashMap<String, SeriesPoint>,
}

impl EconomicIndicators {
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty() && self.weekly.is_empty() && self.monthly.is_empty()
    }
}
