//! Data collection for the briefing system.
//!
//! One fetcher per upstream source, each best-effort, sequenced by
//! [`MarketDataFetcher`]. Quote categories come from a batch-first
//! [`QuoteAggregator`] over a [`briefing_core::traits::QuoteProvider`].

pub mod calendar;
mod crypto;
mod fear_greed;
mod fetcher;
mod fred;
mod quotes;
mod yahoo;

pub use crypto::CoinGeckoClient;
pub use fear_greed::{market_sentiment, FearGreedClient};
pub use fetcher::MarketDataFetcher;
pub use fred::FredClient;
pub use quotes::QuoteAggregator;
pub use yahoo::YahooProvider;
