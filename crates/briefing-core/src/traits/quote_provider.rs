//! Quote provider trait definition.

use crate::error::DataError;
use async_trait::async_trait;
use std::collections::HashMap;

/// A source of historical closing prices for ticker symbols.
///
/// Providers expose a batched endpoint covering many symbols in one request
/// (preferred, to respect upstream rate limits) and a per-symbol endpoint
/// used by the fallback path.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch closing-price series for many symbols in one request.
    ///
    /// # Returns
    /// Symbol -> time-ordered closes (oldest first). Symbols the provider
    /// does not cover are simply missing from the map; that is not an error.
    async fn fetch_batch(
        &self,
        symbols: &[String],
        lookback_days: u32,
    ) -> Result<HashMap<String, Vec<f64>>, DataError>;

    /// Fetch the closing-price series for a single symbol.
    async fn fetch_single(&self, symbol: &str, lookback_days: u32) -> Result<Vec<f64>, DataError>;

    /// Provider name for logging.
    fn name(&self) -> &str;
}
