//! Jekyll post rendering and writing.
//!
//! Tables target kramdown, which requires a blank line before and after
//! every table block.

use briefing_config::{default_crypto_ids, ReportSettings};
use briefing_core::error::ReportError;
use briefing_core::types::{
    CategorySpec, EconomicCalendar, EconomicIndicators, MarketSnapshot, SentimentSummary,
    SeriesPoint, SymbolCatalog,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const SLUG: &str = "daily-market-briefing";

fn format_change(change: Option<f64>) -> String {
    match change {
        Some(c) => format!("{:+.2}%", c),
        None => "-".to_string(),
    }
}

/// One kramdown table for a quote category, rows in catalog order. Absent
/// quotes are skipped; a category with no populated rows renders a
/// placeholder instead of an empty table.
fn quote_table(category: &CategorySpec, snapshot: &MarketSnapshot) -> String {
    let mut rows = Vec::new();
    for entry in &category.entries {
        let Some(quote) = snapshot.quote(&category.key, &entry.name) else {
            continue;
        };
        let Some(price) = quote.price else { continue };
        rows.push(format!(
            "| {} | {:.2} | {} |",
            entry.name,
            price,
            format_change(quote.change)
        ));
    }

    if rows.is_empty() {
        return "\n_no data_\n".to_string();
    }

    let mut lines = vec![
        String::new(),
        "| Name | Price | Change |".to_string(),
        "|:------|------:|------:|".to_string(),
    ];
    lines.extend(rows);
    lines.push(String::new());
    lines.join("\n")
}

fn crypto_table(crypto: &HashMap<String, briefing_core::types::CryptoQuote>) -> String {
    if crypto.is_empty() {
        return "\n_no data_\n".to_string();
    }

    // Configured display order first, any extra symbols after.
    let mut order: Vec<String> = default_crypto_ids().into_iter().map(|(_, s)| s).collect();
    let mut extras: Vec<&String> = crypto.keys().filter(|k| !order.contains(k)).collect();
    extras.sort();
    order.extend(extras.into_iter().cloned());

    let mut lines = vec![
        String::new(),
        "| Coin | Price (USD) | 24h Change |".to_string(),
        "|:------|------:|------:|".to_string(),
    ];
    for symbol in &order {
        let Some(quote) = crypto.get(symbol) else { continue };
        let Some(price) = quote.price_usd else { continue };
        lines.push(format!(
            "| {} | ${:.2} | {} |",
            symbol,
            price,
            format_change(quote.change_24h)
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

fn sentiment_block(sentiment: &SentimentSummary) -> String {
    let mut lines = Vec::new();

    if let Some(market) = &sentiment.market {
        lines.push("### Market Sentiment Score".to_string());
        lines.push(format!(
            "**{}/100** - {}",
            market.value, market.classification
        ));
        lines.push(format!("_(based on {})_", market.based_on));
        lines.push(String::new());
    }

    if let Some(crypto) = &sentiment.crypto {
        let change = crypto
            .change
            .map(|c| format!(" ({:+})", c))
            .unwrap_or_default();
        lines.push("### Crypto Fear & Greed".to_string());
        lines.push(format!(
            "**{}/100** - {}{}",
            crypto.value, crypto.classification, change
        ));
        lines.push(String::new());
    }

    if lines.is_empty() {
        "\n_no data_\n".to_string()
    } else {
        lines.join("\n")
    }
}

fn series_table(title: &str, order: &[&str], points: &HashMap<String, SeriesPoint>, percent: bool) -> Vec<String> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![
        format!("**{}**", title),
        String::new(),
        "| Series | Value | Change | Date |".to_string(),
        "|:------|------:|------:|:--------|".to_string(),
    ];
    for name in order {
        let Some(point) = points.get(*name) else { continue };
        let value = if percent {
            format!("{:.2}%", point.value)
        } else if point.value.abs() >= 1000.0 {
            format!("{:.0}", point.value)
        } else {
            format!("{:.2}", point.value)
        };
        lines.push(format!(
            "| {} | {} | {} | {} |",
            name,
            value,
            format_change(point.change),
            point.date
        ));
    }
    lines.push(String::new());
    lines
}

fn economic_section(economic: &EconomicIndicators) -> String {
    if economic.is_empty() {
        return "\n_no data_\n".to_string();
    }

    let mut lines = Vec::new();
    lines.extend(series_table(
        "Rates",
        &["US 10Y Treasury", "US 2Y Treasury", "10Y-2Y Spread", "Effective Fed Funds"],
        &economic.daily,
        true,
    ));
    lines.extend(series_table(
        "Employment",
        &["Initial Jobless Claims", "Continued Claims"],
        &economic.weekly,
        false,
    ));
    lines.extend(series_table(
        "Headline Indicators",
        &[
            "Unemployment Rate",
            "CPI",
            "Core CPI",
            "Fed Funds Rate",
            "GDP Growth (QoQ)",
            "Retail Sales",
            "Consumer Sentiment",
        ],
        &economic.monthly,
        false,
    ));
    lines.join("\n")
}

fn calendar_section(calendar: &EconomicCalendar) -> String {
    if calendar.is_empty() {
        return "\n_no scheduled events_\n".to_string();
    }

    let mut lines = Vec::new();

    if !calendar.upcoming_fed.is_empty() {
        lines.push("### Fed Schedule".to_string());
        for event in calendar.upcoming_fed.iter().take(3) {
            lines.push(format!(
                "- **{}** {} ({})",
                event.countdown(),
                event.name,
                event.date
            ));
        }
        lines.push(String::new());
    }

    if !calendar.this_week.is_empty() {
        lines.push("### This Week".to_string());
        for event in calendar.this_week.iter().take(5) {
            lines.push(format!(
                "- {} ({}, {})",
                event.name,
                event.date,
                event.countdown()
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Writes the daily briefing as a Jekyll post.
pub struct PostGenerator {
    settings: ReportSettings,
}

impl PostGenerator {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }

    /// URL the published post will resolve to, for the notification link.
    pub fn post_url(&self, date: NaiveDate) -> String {
        format!("{}/{}/{}", self.settings.site_base_url, date, SLUG)
    }

    /// Full post text: front matter, highlights, every catalog category in
    /// order, then the crypto, economic, and calendar sections.
    pub fn render(&self, catalog: &SymbolCatalog, snapshot: &MarketSnapshot, summary: &str) -> String {
        let timestamp = snapshot.timestamp;
        let mut out = String::new();

        out.push_str(&format!(
            "---\nlayout: post\ntitle: \"Daily Market Briefing - {}\"\ndate: {} +0000\ncategories: [market, briefing]\ntags: [markets, stocks, crypto, commodities]\n---\n\n",
            timestamp.format("%Y-%m-%d"),
            timestamp.format("%Y-%m-%d %H:%M:%S"),
        ));

        out.push_str(&format!("> As of {} UTC\n\n", timestamp.format("%Y-%m-%d %H:%M")));
        out.push_str("## Today's Highlights\n\n");
        out.push_str(summary);
        out.push_str("\n\n## Market Sentiment\n\n");
        out.push_str(&sentiment_block(&snapshot.sentiment));

        for category in &catalog.categories {
            out.push_str(&format!("\n## {}\n", category.title));
            out.push_str(&quote_table(category, snapshot));
        }

        out.push_str("\n## Crypto\n");
        out.push_str(&crypto_table(&snapshot.crypto));

        out.push_str("\n## Economic Indicators\n\n");
        out.push_str(&economic_section(&snapshot.economic));

        out.push_str("\n## Economic Calendar\n\n");
        out.push_str(&calendar_section(&snapshot.calendar));

        out.push('\n');
        out
    }

    /// Render and write `<posts_dir>/<YYYY-MM-DD>-daily-market-briefing.md`,
    /// creating the directory as needed. Returns the written path.
    pub fn generate(
        &self,
        catalog: &SymbolCatalog,
        snapshot: &MarketSnapshot,
        summary: &str,
    ) -> Result<PathBuf, ReportError> {
        self.generate_in(Path::new(&self.settings.posts_dir), catalog, snapshot, summary)
    }

    /// Same as [`generate`](Self::generate) with an explicit output directory.
    pub fn generate_in(
        &self,
        posts_dir: &Path,
        catalog: &SymbolCatalog,
        snapshot: &MarketSnapshot,
        summary: &str,
    ) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(posts_dir)?;
        let filename = format!("{}-{}.md", snapshot.timestamp.format("%Y-%m-%d"), SLUG);
        let path = posts_dir.join(filename);
        fs::write(&path, self.render(catalog, snapshot, summary))?;
        info!("briefing post written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefing_core::types::{entries, CalendarEvent, CryptoQuote, Importance, Quote};
    use chrono::{TimeZone, Utc};

    fn catalog() -> SymbolCatalog {
        SymbolCatalog::new(vec![
            CategorySpec {
                key: "us_indices".into(),
                title: "US Indices".into(),
                entries: entries(&[("S&P 500", "^GSPC"), ("NASDAQ", "^IXIC")]),
            },
            CategorySpec {
                key: "bonds".into(),
                title: "Bonds".into(),
                entries: entries(&[("US 10Y", "^TNX")]),
            },
        ])
    }

    fn snapshot() -> MarketSnapshot {
        let mut snapshot =
            MarketSnapshot::new(Utc.with_ymd_and_hms(2026, 8, 21, 6, 0, 0).unwrap());
        snapshot.insert_quote("us_indices", "S&P 500", Quote::from_closes(&[5000.0, 5075.0]));
        snapshot.insert_quote("us_indices", "NASDAQ", Quote::absent());
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
    fn test_front_matter_and_header() {
        let post = PostGenerator::new(ReportSettings::default());
        let text = post.render(&catalog(), &snapshot(), "Quiet session.");
        assert!(text.starts_with("---\nlayout: post\n"));
        assert!(text.contains("title: \"Daily Market Briefing - 2026-08-21\""));
        assert!(text.contains("date: 2026-08-21 06:00:00 +0000"));
        assert!(text.contains("## Today's Highlights\n\nQuiet session."));
    }

    #[test]
    fn test_absent_quotes_omitted_from_table() {
        let post = PostGenerator::new(ReportSettings::default());
        let text = post.render(&catalog(), &snapshot(), "");
        assert!(text.contains("| S&P 500 | 5075.00 | +1.50% |"));
        assert!(!text.contains("| NASDAQ |"));
    }

    #[test]
    fn test_empty_category_renders_placeholder() {
        let post = PostGenerator::new(ReportSettings::default());
        let text = post.render(&catalog(), &snapshot(), "");
        assert!(text.contains("## Bonds\n\n_no data_\n"));
    }

    #[test]
    fn test_tables_framed_by_blank_lines() {
        let post = PostGenerator::new(ReportSettings::default());
        let text = post.render(&catalog(), &snapshot(), "");
        assert!(text.contains("## US Indices\n\n| Name | Price | Change |\n|:------|------:|------:|\n"));
    }

    #[test]
    fn test_crypto_table() {
        let post = PostGenerator::new(ReportSettings::default());
        let text = post.render(&catalog(), &snapshot(), "");
        assert!(text.contains("| BTC | $95000.00 | +2.50% |"));
    }

    #[test]
    fn test_calendar_section() {
        let post = PostGenerator::new(ReportSettings::default());
        let mut snap = snapshot();
        snap.calendar.upcoming_fed.push(CalendarEvent {
            date: NaiveDate::from_ymd_opt(2026, 9, 16).unwrap(),
            name: "FOMC rate decision".into(),
            importance: Importance::High,
            days_until: 26,
        });
        let text = post.render(&catalog(), &snap, "");
        assert!(text.contains("- **D-26** FOMC rate decision (2026-09-16)"));
    }

    #[test]
    fn test_post_url() {
        let post = PostGenerator::new(ReportSettings::default());
        let url = post.post_url(NaiveDate::from_ymd_opt(2026, 8, 21).unwrap());
        assert_eq!(
            url,
            "https://example.github.io/market/briefing/2026-08-21/daily-market-briefing"
        );
    }

    #[test]
    fn test_generate_writes_dated_file() {
        let post = PostGenerator::new(ReportSettings::default());
        let dir = std::env::temp_dir().join("briefing-report-test-posts");
        let path = post
            .generate_in(&dir, &catalog(), &snapshot(), "Quiet session.")
            .unwrap();
        assert!(path.ends_with("2026-08-21-daily-market-briefing.md"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Quiet session."));
        fs::remove_dir_all(&dir).unwrap();
    }
}
