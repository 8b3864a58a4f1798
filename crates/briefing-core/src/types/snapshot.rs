//! The aggregate record assembled during one run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{CryptoQuote, EconomicCalendar, EconomicIndicators, Quote, SentimentSummary};

/// Everything collected in one run: quote categories plus the best-effort
/// sections. Append-only while the run is in progress; categories left empty
/// by a failed source stay empty rather than aborting the run.
///
/// Map iteration order is not meaningful; presentation order comes from the
/// `SymbolCatalog`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub timestamp: DateTime<Utc>,
    /// category key -> display name -> quote
    pub quotes: HashMap<String, HashMap<String, Quote>>,
    /// display symbol (e.g. "BTC") -> quote
    pub crypto: HashMap<String, CryptoQuote>,
    pub economic: EconomicIndicators,
    pub sentiment: SentimentSummary,
    pub calendar: EconomicCalendar,
}

impl MarketSnapshot {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            quotes: HashMap::new(),
            crypto: HashMap::new(),
            economic: EconomicIndicators::default(),
            sentiment: SentimentSummary::default(),
            calendar: EconomicCalendar::default(),
        }
    }

    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// Record a quote for a catalog entry. Creates the category map on first
    /// insert; never clears existing entries.
    pub fn insert_quote(&mut self, category: &str, name: &str, quote: Quote) {
        self.quotes
            .entry(category.to_string())
            .or_default()
            .insert(name.to_string(), quote);
    }

    pub fn quote(&self, category: &str, name: &str) -> Option<&Quote> {
        self.quotes.get(category)?.get(name)
    }

    pub fn category(&self, category: &str) -> Option<&HashMap<String, Quote>> {
        self.quotes.get(category)
    }

    /// Number of quote categories holding at least one populated quote, plus
    /// the non-empty sections. Used for the end-of-run summary log.
    pub fn filled_sections(&self) -> usize {
        let filled_quotes = self
            .quotes
            .values()
            .filter(|m| m.values().any(|q| !q.is_absent()))
            .count();
        let mut filled = filled_quotes;
        if !self.crypto.is_empty() {
            filled += 1;
        }
        if !self.economic.is_empty() {
            filled += 1;
        }
        if !self.sentiment.is_empty() {
            filled += 1;
        }
        if !self.calendar.is_empty() {
            filled += 1;
        }
        filled
    }

    /// VIX closing price, used as an input to the market sentiment score.
    pub fn vix_price(&self) -> Option<f64> {
        self.quote("market_indicators", "VIX")?.price
    }

    /// S&P 500 daily change, the secondary sentiment input.
    pub fn sp500_change(&self) -> Option<f64> {
        self.quote("us_indices", "S&P 500")?.change
    }
}
