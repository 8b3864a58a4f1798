//! Full-snapshot orchestration across all data sources.

use briefing_config::{default_catalog, default_crypto_ids, AppConfig};
use briefing_core::error::DataError;
use briefing_core::traits::QuoteProvider;
use briefing_core::types::{MarketSnapshot, SymbolCatalog};
use chrono::Utc;
use std::time::Duration;
use tracing::{info, warn};

use crate::calendar;
use crate::crypto::CoinGeckoClient;
use crate::fear_greed::{market_sentiment, FearGreedClient};
use crate::fred::FredClient;
use crate::quotes::QuoteAggregator;
use crate::yahoo::YahooProvider;

/// Runs every data source and assembles one [`MarketSnapshot`].
///
/// Sources are independent: a failing source logs a warning and leaves its
/// section empty while the rest of the run proceeds.
pub struct MarketDataFetcher<P> {
    aggregator: QuoteAggregator<P>,
    crypto: CoinGeckoClient,
    fred: Option<FredClient>,
    fear_greed: FearGreedClient,
    catalog: SymbolCatalog,
    crypto_ids: Vec<(String, String)>,
}

impl MarketDataFetcher<YahooProvider> {
    /// Wire up the production sources from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, DataError> {
        let timeout = Duration::from_secs(config.fetch.request_timeout_secs);
        let provider = YahooProvider::new(timeout)?;

        let fred = FredClient::from_env(&config.fred.api_key_env, timeout)?;
        if fred.is_none() {
            warn!(
                "{} is not set; economic indicators will be skipped",
                config.fred.api_key_env
            );
        }

        let catalog = match &config.catalog {
            Some(categories) => SymbolCatalog::new(categories.clone()),
            None => default_catalog(),
        };

        Ok(Self {
            aggregator: QuoteAggregator::new(provider, config.fetch.clone()),
            crypto: CoinGeckoClient::new(timeout)?,
            fred,
            fear_greed: FearGreedClient::new(timeout)?,
            catalog,
            crypto_ids: default_crypto_ids(),
        })
    }
}

impl<P: QuoteProvider> MarketDataFetcher<P> {
    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    /// Collect everything into one snapshot.
    pub async fn fetch_all(&self) -> MarketSnapshot {
        let mut snapshot = MarketSnapshot::now();

        match self.crypto.fetch(&self.crypto_ids).await {
            Ok(quotes) => snapshot.crypto = quotes,
            Err(err) => warn!("crypto fetch failed: {}", err),
        }

        self.aggregator.populate(&self.catalog, &mut snapshot).await;

        if let Some(fred) = &self.fred {
            snapshot.economic = fred.fetch_all().await;
        }

        match self.fear_greed.fetch_crypto_index().await {
            Ok(index) => snapshot.sentiment.crypto = Some(index),
            Err(err) => warn!("fear & greed fetch failed: {}", err),
        }
        snapshot.sentiment.market =
            market_sentiment(snapshot.vix_price(), snapshot.sp500_change());

        snapshot.calendar = calendar::build(Utc::now().date_naive());

        info!(
            "snapshot assembled: {} sections populated",
            snapshot.filled_sections()
        );
        snapshot
    }
}
