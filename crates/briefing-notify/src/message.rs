//! Condensed briefing message assembly.
//!
//! The briefing goes out as an ordered series of messages rather than one
//! long wall of text: sentiment and US indices first, then movers, global
//! markets and crypto, FX and commodities, and finally economic data with
//! the post link.

use briefing_core::types::{MarketSnapshot, Quote, SymbolCatalog};

const DIVIDER: &str = "--------------------";

/// "+2.50%" / "-1.50%", or "-" when unknown.
pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(c) => format!("{:+.2}%", c),
        None => "-".to_string(),
    }
}

fn quote_line(name: &str, quote: &Quote, dollar: bool) -> Option<String> {
    let price = quote.price?;
    let prefix = if dollar { "$" } else { "" };
    Some(format!(
        "• {}: {}{:.2} ({})",
        name,
        prefix,
        price,
        format_change(quote.change)
    ))
}

/// Populated quote lines for a category, in catalog order.
fn category_lines(
    catalog: &SymbolCatalog,
    snapshot: &MarketSnapshot,
    key: &str,
    dollar: bool,
) -> Vec<String> {
    let Some(category) = catalog.category(key) else {
        return Vec::new();
    };
    category
        .entries
        .iter()
        .filter_map(|entry| {
            snapshot
                .quote(key, &entry.name)
                .and_then(|q| quote_line(&entry.name, q, dollar))
        })
        .collect()
}

/// Same lines sorted by change descending, movers first.
fn sorted_category_lines(
    catalog: &SymbolCatalog,
    snapshot: &MarketSnapshot,
    key: &str,
    dollar: bool,
) -> Vec<String> {
    let Some(category) = catalog.category(key) else {
        return Vec::new();
    };
    let mut rows: Vec<(f64, String)> = category
        .entries
        .iter()
        .filter_map(|entry| {
            let quote = snapshot.quote(key, &entry.name)?;
            let line = quote_line(&entry.name, quote, dollar)?;
            Some((quote.change.unwrap_or(0.0), line))
        })
        .collect();
    rows.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    rows.into_iter().map(|(_, line)| line).collect()
}

fn push_section(out: &mut Vec<String>, title: &str, lines: Vec<String>) {
    if lines.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(String::new());
        out.push(DIVIDER.to_string());
        out.push(String::new());
    }
    out.push(format!("*{}*", title));
    out.push(String::new());
    out.extend(lines);
}

fn sentiment_lines(snapshot: &MarketSnapshot) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(vix) = snapshot.quote("market_indicators", "VIX") {
        if let Some(price) = vix.price {
            let status = if price < 20.0 {
                "calm"
            } else if price < 30.0 {
                "elevated"
            } else {
                "fearful"
            };
            lines.push(format!(
                "• VIX: {:.1} ({}) - {}",
                price,
                format_change(vix.change),
                status
            ));
        }
    }
    if let Some(market) = &snapshot.sentiment.market {
        lines.push(format!(
            "• Market sentiment: {}/100 ({})",
            market.value, market.classification
        ));
    }
    if let Some(crypto) = &snapshot.sentiment.crypto {
        lines.push(format!(
            "• Crypto F&G: {}/100 ({})",
            crypto.value, crypto.classification
        ));
    }
    lines
}

fn crypto_lines(snapshot: &MarketSnapshot, order: &[String]) -> Vec<String> {
    order
        .iter()
        .filter_map(|symbol| {
            let quote = snapshot.crypto.get(symbol)?;
            let price = quote.price_usd?;
            Some(format!(
                "• {}: ${:.2} ({})",
                symbol,
                price,
                format_change(quote.change_24h)
            ))
        })
        .collect()
}

fn economic_lines(snapshot: &MarketSnapshot) -> Vec<String> {
    let mut lines = Vec::new();
    let mut names: Vec<&String> = snapshot.economic.monthly.keys().collect();
    names.sort();
    for name in names {
        let point = &snapshot.economic.monthly[name];
        lines.push(format!("• {}: {:.2} ({})", name, point.value, point.date));
    }
    lines
}

fn calendar_lines(snapshot: &MarketSnapshot) -> Vec<String> {
    let mut lines = Vec::new();
    for event in snapshot.calendar.upcoming_fed.iter().take(2) {
        lines.push(format!(
            "• {} {} ({})",
            event.countdown(),
            event.name,
            event.date
        ));
    }
    for event in snapshot.calendar.this_week.iter().take(3) {
        lines.push(format!("• {} ({})", event.name, event.date));
    }
    lines
}

/// Build the ordered briefing messages. Empty sections are skipped; a
/// message with no content at all is dropped entirely.
pub fn build_messages(
    catalog: &SymbolCatalog,
    snapshot: &MarketSnapshot,
    crypto_order: &[String],
    post_url: &str,
) -> Vec<String> {
    let date = snapshot.timestamp.format("%Y-%m-%d");
    let mut messages = Vec::new();

    // Header, sentiment, bonds, US indices.
    let mut msg = vec![
        "*Daily Market Briefing*".to_string(),
        format!("{} 06:00 UTC", date),
    ];
    push_section(&mut msg, "Sentiment", sentiment_lines(snapshot));
    push_section(
        &mut msg,
        "Bonds",
        category_lines(catalog, snapshot, "bonds", false),
    );
    push_section(
        &mut msg,
        "US Indices",
        category_lines(catalog, snapshot, "us_indices", false),
    );
    messages.push(msg.join("\n"));

    // Single names, biggest movers first.
    let mut msg = Vec::new();
    push_section(
        &mut msg,
        "MAG7",
        sorted_category_lines(catalog, snapshot, "mag7", true),
    );
    push_section(
        &mut msg,
        "Sector ETFs",
        sorted_category_lines(catalog, snapshot, "us_sectors", true),
    );
    if !msg.is_empty() {
        messages.push(msg.join("\n"));
    }

    let mut msg = Vec::new();
    push_section(
        &mut msg,
        "Global Indices",
        category_lines(catalog, snapshot, "global_indices", false),
    );
    push_section(&mut msg, "Crypto", crypto_lines(snapshot, crypto_order));
    if !msg.is_empty() {
        messages.push(msg.join("\n"));
    }

    let mut msg = Vec::new();
    push_section(
        &mut msg,
        "FX",
        category_lines(catalog, snapshot, "currencies", false),
    );
    push_section(
        &mut msg,
        "Commodities",
        category_lines(catalog, snapshot, "commodities", true),
    );
    push_section(
        &mut msg,
        "Agriculture",
        category_lines(catalog, snapshot, "agriculture", true),
    );
    if !msg.is_empty() {
        messages.push(msg.join("\n"));
    }

    // Economic data, calendar, and the link to the full post.
    let mut msg = Vec::new();
    push_section(&mut msg, "Economic Indicators", economic_lines(snapshot));
    push_section(&mut msg, "Calendar", calendar_lines(snapshot));
    if !msg.is_empty() {
        msg.push(String::new());
        msg.push(DIVIDER.to_string());
        msg.push(String::new());
    }
    msg.push(format!("[Read the full briefing]({})", post_url));
    messages.push(msg.join("\n"));

    messages
}

/// Split a message on line boundaries so no chunk exceeds `max_len`.
/// A single line longer than the limit becomes its own chunk.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    if text.len() <= max_len {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    for line in text.split('\n') {
        let needed = if current.is_empty() {
            line.len()
        } else {
            current.len() + 1 + line.len()
        };
        if needed > max_len && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefing_core::types::{entries, CategorySpec, CryptoQuote};
    use chrono::{TimeZone, Utc};

    fn catalog() -> SymbolCatalog {
        SymbolCatalog::new(vec![
            CategorySpec {
                key: "us_indices".into(),
                title: "US Indices".into(),
                entries: entries(&[("S&P 500", "^GSPC")]),
            },
            CategorySpec {
                key: "market_indicators".into(),
                title: "Market Indicators".into(),
                entries: entries(&[("VIX", "^VIX")]),
            },
            CategorySpec {
                key: "mag7".into(),
                title: "MAG7".into(),
                entries: entries(&[("Apple", "AAPL"), ("NVIDIA", "NVDA")]),
            },
        ])
    }

    fn snapshot() -> MarketSnapshot {
        let mut snapshot =
            MarketSnapshot::new(Utc.with_ymd_and_hms(2026, 8, 21, 6, 0, 0).unwrap());
        snapshot.insert_quote("us_indices", "S&P 500", Quote::from_closes(&[5000.0, 5075.0]));
        snapshot.insert_quote("market_indicators", "VIX", Quote::from_closes(&[19.0, 18.5]));
        snapshot.insert_quote("mag7", "Apple", Quote::from_closes(&[230.0, 232.0]));
        snapshot.insert_quote("mag7", "NVIDIA", Quote::from_closes(&[120.0, 126.0]));
        snapshot.crypto.insert(
            "BTC".into(),
            CryptoQuote {
                price_usd: Some(95000.0),
                change_24h: Some(2.5),
            },
        );
        snapshot
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(Some(2.5)), "+2.50%");
        assert_eq!(format_change(Some(-1.5)), "-1.50%");
        assert_eq!(format_change(Some(0.0)), "+0.00%");
        assert_eq!(format_change(None), "-");
    }

    #[test]
    fn test_header_and_link_messages() {
        let messages = build_messages(&catalog(), &snapshot(), &["BTC".into()], "https://example.test/post");
        assert!(messages[0].starts_with("*Daily Market Briefing*\n2026-08-21 06:00 UTC"));
        assert!(messages[0].contains("• VIX: 18.5"));
        assert!(messages[0].contains("• S&P 500: 5075.00 (+1.50%)"));
        let last = messages.last().unwrap();
        assert!(last.contains("[Read the full briefing](https://example.test/post)"));
    }

    #[test]
    fn test_movers_sorted_descending() {
        let messages = build_messages(&catalog(), &snapshot(), &[], "u");
        let mag7 = messages
            .iter()
            .find(|m| m.contains("*MAG7*"))
            .expect("mag7 message");
        let nvidia = mag7.find("NVIDIA").unwrap();
        let apple = mag7.find("Apple").unwrap();
        // NVIDIA (+5%) lists before Apple (+0.87%).
        assert!(nvidia < apple);
    }

    #[test]
    fn test_crypto_follows_configured_order() {
        let mut snap = snapshot();
        snap.crypto.insert(
            "ETH".into(),
            CryptoQuote {
                price_usd: Some(3200.0),
                change_24h: None,
            },
        );
        let order = vec!["BTC".to_string(), "ETH".to_string()];
        let messages = build_messages(&catalog(), &snap, &order, "u");
        let crypto = messages.iter().find(|m| m.contains("*Crypto*")).unwrap();
        assert!(crypto.find("BTC").unwrap() < crypto.find("ETH").unwrap());
        assert!(crypto.contains("• ETH: $3200.00 (-)"));
    }

    #[test]
    fn test_empty_snapshot_still_links_post() {
        let empty = MarketSnapshot::new(Utc.with_ymd_and_hms(2026, 8, 21, 6, 0, 0).unwrap());
        let messages = build_messages(&catalog(), &empty, &[], "https://example.test/post");
        // Header message and the link message survive; mover and global
        // messages are dropped.
        assert_eq!(messages.len(), 2);
        assert!(messages[1].contains("Read the full briefing"));
    }

    #[test]
    fn test_split_short_message_untouched() {
        let chunks = split_message("one\ntwo", 100);
        assert_eq!(chunks, vec!["one\ntwo"]);
    }

    #[test]
    fn test_split_on_line_boundaries() {
        let text = "aaaa\nbbbb\ncccc";
        let chunks = split_message(text, 9);
        assert_eq!(chunks, vec!["aaaa\nbbbb", "cccc"]);
        for chunk in &chunks {
            assert!(chunk.len() <= 9);
        }
    }

    #[test]
    fn test_split_oversized_line_kept_whole() {
        let chunks = split_message("short\nreallyreallylongline", 10);
        assert_eq!(chunks, vec!["short", "reallyreallylongline"]);
    }
}
