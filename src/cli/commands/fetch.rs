//! Fetch command: collect a snapshot and print it.

use anyhow::{bail, Result};
use briefing_config::AppConfig;
use briefing_core::types::{MarketSnapshot, SymbolCatalog};
use briefing_data::MarketDataFetcher;

use crate::cli::FetchArgs;

pub async fn run(args: FetchArgs, config: AppConfig) -> Result<()> {
    let fetcher = MarketDataFetcher::from_config(&config)?;
    let snapshot = fetcher.fetch_all().await;

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        "text" => print_text(fetcher.catalog(), &snapshot),
        other => bail!("unknown output format: {}", other),
    }

    Ok(())
}

fn print_text(catalog: &SymbolCatalog, snapshot: &MarketSnapshot) {
    println!("Snapshot at {}", snapshot.timestamp.format("%Y-%m-%d %H:%M UTC"));

    for category in &catalog.categories {
        println!("\n{}", category.title);
        for entry in &category.entries {
            let Some(quote) = snapshot.quote(&category.key, &entry.name) else {
                continue;
            };
            match (quote.price, quote.change) {
                (Some(price), Some(change)) => {
                    println!("  {}: {:.2} ({:+.2}%)", entry.name, price, change)
                }
                (Some(price), None) => println!("  {}: {:.2}", entry.name, price),
                _ => println!("  {}: -", entry.name),
            }
        }
    }

    if !snapshot.crypto.is_empty() {
        println!("\nCrypto");
        let mut symbols: Vec<&String> = snapshot.crypto.keys().collect();
        symbols.sort();
        for symbol in symbols {
            let quote = &snapshot.crypto[symbol];
            match (quote.price_usd, quote.change_24h) {
                (Some(price), Some(change)) => {
                    println!("  {}: ${:.2} ({:+.2}%)", symbol, price, change)
                }
                (Some(price), None) => println!("  {}: ${:.2}", symbol, price),
                _ => println!("  {}: -", symbol),
            }
        }
    }

    if let Some(market) = &snapshot.sentiment.market {
        println!(
            "\nMarket sentiment: {}/100 ({}, based on {})",
            market.value, market.classification, market.based_on
        );
    }
    if let Some(crypto) = &snapshot.sentiment.crypto {
        println!(
            "Crypto Fear & Greed: {}/100 ({})",
            crypto.value, crypto.classification
        );
    }

    for event in &snapshot.calendar.upcoming_fed {
        println!("Fed: {} {} ({})", event.countdown(), event.name, event.date);
    }
}
