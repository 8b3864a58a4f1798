//! Quote aggregation: batch-first with a per-symbol fallback.

use briefing_config::FetchSettings;
use briefing_core::error::DataError;
use briefing_core::retry::RetryPolicy;
use briefing_core::traits::QuoteProvider;
use briefing_core::types::{MarketSnapshot, Quote, SymbolCatalog};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, warn};

/// Populates the snapshot's quote categories from a [`QuoteProvider`].
///
/// One batched request covers the whole catalog; if that fails after the
/// retry budget (or keeps coming back empty), every symbol is fetched
/// individually with rate-limit pacing. Either way every catalog entry ends
/// up with a quote, absent when its data could not be obtained.
pub struct QuoteAggregator<P> {
    provider: P,
    settings: FetchSettings,
}

impl<P: QuoteProvider> QuoteAggregator<P> {
    pub fn new(provider: P, settings: FetchSettings) -> Self {
        Self { provider, settings }
    }

    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.settings.max_retries,
            Duration::from_secs_f64(self.settings.initial_delay_secs),
            self.settings.backoff_multiplier,
        )
    }

    /// Fill every category of the catalog into the snapshot.
    pub async fn populate(&self, catalog: &SymbolCatalog, snapshot: &mut MarketSnapshot) {
        let symbols = catalog.all_symbols();
        if symbols.is_empty() {
            return;
        }
        info!(
            "batch quote download: {} symbols via {}",
            symbols.len(),
            self.provider.name()
        );

        let batch = self
            .retry_policy()
            .run(|| async {
                let series = self
                    .provider
                    .fetch_batch(&symbols, self.settings.batch_lookback_days)
                    .await?;
                // An empty frame is a provider hiccup, not real coverage.
                if series.is_empty() {
                    return Err(DataError::NoData);
                }
                Ok(series)
            })
            .await;

        match batch {
            Ok(series) => self.apply_batch(catalog, &series, snapshot),
            Err(err) => {
                warn!("batch download failed: {}; switching to per-symbol fetches", err);
                self.populate_individual(catalog, snapshot).await;
            }
        }
    }

    /// Map batch results onto the catalog via its reverse symbol map.
    /// Symbols without coverage get an absent quote and count as failures;
    /// nothing raises.
    fn apply_batch(
        &self,
        catalog: &SymbolCatalog,
        series: &HashMap<String, Vec<f64>>,
        snapshot: &mut MarketSnapshot,
    ) {
        let mut succeeded = 0usize;
        let mut failed = 0usize;

        for (symbol, (category, name)) in catalog.symbol_map() {
            let quote = series
                .get(&symbol)
                .map(|closes| Quote::from_closes(closes))
                .unwrap_or_else(Quote::absent);
            if quote.is_absent() {
                warn!("no batch coverage for {} ({})", symbol, name);
                failed += 1;
            } else {
                succeeded += 1;
            }
            snapshot.insert_quote(&category, &name, quote);
        }

        info!("batch quotes applied: {} ok, {} missing", succeeded, failed);
    }

    /// Fallback path: one request per symbol, in catalog order, pausing
    /// between requests. A failed symbol is recorded as absent and the pass
    /// continues.
    async fn populate_individual(&self, catalog: &SymbolCatalog, snapshot: &mut MarketSnapshot) {
        let pause = Duration::from_secs_f64(self.settings.rate_limit_delay_secs);

        for category in &catalog.categories {
            let mut succeeded = 0usize;
            let mut failed = 0usize;

            for entry in &category.entries {
                let quote = match self
                    .provider
                    .fetch_single(&entry.symbol, self.settings.fallback_lookback_days)
                    .await
                {
                    Ok(closes) => Quote::from_closes(&closes),
                    Err(err) => {
                        warn!(
                            "individual fetch failed for {} ({}): {}",
                            entry.name, entry.symbol, err
                        );
                        Quote::absent()
                    }
                };
                if quote.is_absent() {
                    failed += 1;
                } else {
                    succeeded += 1;
                }
                snapshot.insert_quote(&category.key, &entry.name, quote);
                tokio::time::sleep(pause).await;
            }

            info!("{}: {} ok, {} failed", category.key, succeeded, failed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use briefing_core::types::{entries, CategorySpec};
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct MockProvider {
        batch: HashMap<String, Vec<f64>>,
        batch_fails: bool,
        singles: HashMap<String, Vec<f64>>,
        batch_calls: AtomicU32,
        single_calls: AtomicU32,
    }

    #[async_trait]
    impl QuoteProvider for MockProvider {
        async fn fetch_batch(
            &self,
            _symbols: &[String],
            _lookback_days: u32,
        ) -> Result<HashMap<String, Vec<f64>>, DataError> {
            self.batch_calls.fetch_add(1, Ordering::SeqCst);
            if self.batch_fails {
                Err(DataError::Network("connection reset".into()))
            } else {
                Ok(self.batch.clone())
            }
        }

        async fn fetch_single(
            &self,
            symbol: &str,
            _lookback_days: u32,
        ) -> Result<Vec<f64>, DataError> {
            self.single_calls.fetch_add(1, Ordering::SeqCst);
            self.singles
                .get(symbol)
                .cloned()
                .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    fn catalog() -> SymbolCatalog {
        SymbolCatalog::new(vec![CategorySpec {
            key: "idx".into(),
            title: "Indices".into(),
            entries: entries(&[("Index A", "AAA"), ("Index B", "XYZ")]),
        }])
    }

    fn settings() -> FetchSettings {
        FetchSettings {
            max_retries: 3,
            initial_delay_secs: 0.01,
            backoff_multiplier: 2.0,
            rate_limit_delay_secs: 0.01,
            ..FetchSettings::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_batch_populates_catalog() {
        let provider = MockProvider {
            batch: HashMap::from([
                ("AAA".to_string(), vec![90.0, 99.0]),
                ("XYZ".to_string(), vec![200.0, 190.0]),
            ]),
            ..MockProvider::default()
        };
        let aggregator = QuoteAggregator::new(provider, settings());
        let mut snapshot = MarketSnapshot::now();
        aggregator.populate(&catalog(), &mut snapshot).await;

        let a = snapshot.quote("idx", "Index A").unwrap();
        assert_eq!(a.price, Some(99.0));
        assert_eq!(a.change, Some(10.0));
        let b = snapshot.quote("idx", "Index B").unwrap();
        assert_eq!(b.price, Some(190.0));
        assert_eq!(b.change, Some(-5.0));
        assert_eq!(aggregator.provider.batch_calls.load(Ordering::SeqCst), 1);
        assert_eq!(aggregator.provider.single_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_batch_routes_symbols_across_categories() {
        let catalog = SymbolCatalog::new(vec![
            CategorySpec {
                key: "idx".into(),
                title: "Indices".into(),
                entries: entries(&[("Index A", "AAA")]),
            },
            CategorySpec {
                key: "fx".into(),
                title: "Currencies".into(),
                entries: entries(&[("USD/KRW", "KRW=X")]),
            },
        ]);
        let provider = MockProvider {
            batch: HashMap::from([
                ("AAA".to_string(), vec![90.0, 99.0]),
                ("KRW=X".to_string(), vec![1400.0, 1414.0]),
            ]),
            ..MockProvider::default()
        };
        let aggregator = QuoteAggregator::new(provider, settings());
        let mut snapshot = MarketSnapshot::now();
        aggregator.populate(&catalog, &mut snapshot).await;

        // Each symbol lands under its own category key and display name.
        assert_eq!(snapshot.quote("idx", "Index A").unwrap().price, Some(99.0));
        assert_eq!(snapshot.quote("fx", "USD/KRW").unwrap().price, Some(1414.0));
        assert!(snapshot.quote("fx", "Index A").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_symbol_missing_from_batch_is_absent() {
        let provider = MockProvider {
            batch: HashMap::from([("AAA".to_string(), vec![90.0, 99.0])]),
            ..MockProvider::default()
        };
        let aggregator = QuoteAggregator::new(provider, settings());
        let mut snapshot = MarketSnapshot::now();
        aggregator.populate(&catalog(), &mut snapshot).await;

        assert_eq!(snapshot.quote("idx", "Index A").unwrap().price, Some(99.0));
        // Uncovered symbol keeps its key, with an explicit absent marker.
        assert!(snapshot.quote("idx", "Index B").unwrap().is_absent());
    }

    #[tokio::test(start_paused = true)]
    async fn test_batch_failure_falls_back_to_individual() {
        let provider = MockProvider {
            batch_fails: true,
            singles: HashMap::from([("AAA".to_string(), vec![90.0, 99.0])]),
            ..MockProvider::default()
        };
        let aggregator = QuoteAggregator::new(provider, settings());
        let mut snapshot = MarketSnapshot::now();
        aggregator.populate(&catalog(), &mut snapshot).await;

        // Batch retried to exhaustion: initial attempt + 3 retries.
        assert_eq!(aggregator.provider.batch_calls.load(Ordering::SeqCst), 4);
        // Fallback still populated the symbol whose fetch succeeded...
        assert_eq!(snapshot.quote("idx", "Index A").unwrap().price, Some(99.0));
        // ...and the failing one is absent rather than missing.
        assert!(snapshot.quote("idx", "Index B").unwrap().is_absent());
        assert_eq!(aggregator.provider.single_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_batch_result_falls_back() {
        let provider = MockProvider {
            singles: HashMap::from([
                ("AAA".to_string(), vec![50.0]),
                ("XYZ".to_string(), vec![10.0, 11.0]),
            ]),
            ..MockProvider::default()
        };
        let aggregator = QuoteAggregator::new(provider, settings());
        let mut snapshot = MarketSnapshot::now();
        aggregator.populate(&catalog(), &mut snapshot).await;

        // Empty frames are retried like failures before falling through.
        assert_eq!(aggregator.provider.batch_calls.load(Ordering::SeqCst), 4);
        let a = snapshot.quote("idx", "Index A").unwrap();
        assert_eq!(a.price, Some(50.0));
        assert_eq!(a.change, Some(0.0));
        assert_eq!(snapshot.quote("idx", "Index B").unwrap().change, Some(10.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_catalog_is_a_no_op() {
        let aggregator = QuoteAggregator::new(MockProvider::default(), settings());
        let mut snapshot = MarketSnapshot::now();
        aggregator.populate(&SymbolCatalog::default(), &mut snapshot).await;
        assert!(snapshot.quotes.is_empty());
        assert_eq!(aggregator.provider.batch_calls.load(Ordering::SeqCst), 0);
    }
}
