//! Deterministic headline summary assembled from the snapshot itself.

use briefing_core::types::MarketSnapshot;

fn direction(change: f64) -> &'static str {
    if change > 0.0 {
        "up"
    } else if change < 0.0 {
        "down"
    } else {
        "flat"
    }
}

/// Two or three headline sentences covering the S&P 500, VIX and BTC.
/// Sections without data are simply skipped.
pub fn headline_summary(snapshot: &MarketSnapshot) -> String {
    let mut parts = Vec::new();

    if let Some(quote) = snapshot.quote("us_indices", "S&P 500") {
        if let (Some(price), Some(change)) = (quote.price, quote.change) {
            parts.push(format!(
                "S&P 500 closed at {:.2}, {} {:.2}% on the session.",
                price,
                direction(change),
                change.abs()
            ));
        }
    }

    if let Some(sentiment) = &snapshot.sentiment.market {
        parts.push(format!(
            "Market sentiment reads {}/100 ({}).",
            sentiment.value, sentiment.classification
        ));
    } else if let Some(vix) = snapshot.vix_price() {
        parts.push(format!("VIX stands at {:.1}.", vix));
    }

    if let Some(btc) = snapshot.crypto.get("BTC") {
        if let (Some(price), Some(change)) = (btc.price_usd, btc.change_24h) {
            parts.push(format!(
                "Bitcoin trades at ${:.0}, {} {:.2}% over 24h.",
                price,
                direction(change),
                change.abs()
            ));
        }
    }

    if parts.is_empty() {
        "Market data was unavailable for this briefing.".to_string()
    } else {
        parts.join(" ")
    }
}
