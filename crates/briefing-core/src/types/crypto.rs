//! Crypto spot quote.

use serde::{Deserialize, Serialize};

/// USD spot price and 24-hour change for one coin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CryptoQuote {
    pub price_usd: Option<f64>,
    pub change_24h: Option<f64>,
}
