//! Built-in symbol catalog.
//!
//! Category and entry order here is the processing and presentation order
//! for the whole run.

use briefing_core::types::{entries, CategorySpec, SymbolCatalog};

/// CoinGecko coin ids fetched by the crypto section, with display symbols.
pub fn default_crypto_ids() -> Vec<(String, String)> {
    [
        ("bitcoin", "BTC"),
        ("ethereum", "ETH"),
        ("ripple", "XRP"),
        ("dogecoin", "DOGE"),
        ("chainlink", "LINK"),
    ]
    .iter()
    .map(|(id, sym)| (id.to_string(), sym.to_string()))
    .collect()
}

/// The default quote catalog: US indices, volatility, treasuries, megacaps,
/// sector funds, global indices, FX, and commodities.
pub fn default_catalog() -> SymbolCatalog {
    SymbolCatalog::new(vec![
        CategorySpec {
            key: "us_indices".into(),
            title: "US Indices".into(),
            entries: entries(&[
                ("S&P 500", "^GSPC"),
                ("NASDAQ", "^IXIC"),
                ("Dow Jones", "^DJI"),
            ]),
        },
        CategorySpec {
            key: "market_indicators".into(),
            title: "Market Indicators".into(),
            entries: entries(&[("VIX", "^VIX")]),
        },
        CategorySpec {
            key: "bonds".into(),
            title: "Treasury Yields".into(),
            entries: entries(&[("US 10Y", "^TNX"), ("US 30Y", "^TYX")]),
        },
        CategorySpec {
            key: "mag7".into(),
            title: "Big Tech (MAG7)".into(),
            entries: entries(&[
                ("Apple", "AAPL"),
                ("Microsoft", "MSFT"),
                ("Alphabet", "GOOGL"),
                ("Amazon", "AMZN"),
                ("Nvidia", "NVDA"),
                ("Meta", "META"),
                ("Tesla", "TSLA"),
            ]),
        },
        CategorySpec {
            key: "us_sectors".into(),
            title: "Sector ETFs".into(),
            entries: entries(&[
                ("Technology (XLK)", "XLK"),
                ("Financials (XLF)", "XLF"),
                ("Energy (XLE)", "XLE"),
                ("Health Care (XLV)", "XLV"),
                ("Consumer Discretionary (XLY)", "XLY"),
                ("Consumer Staples (XLP)", "XLP"),
                ("Industrials (XLI)", "XLI"),
                ("Materials (XLB)", "XLB"),
                ("Utilities (XLU)", "XLU"),
                ("Real Estate (XLRE)", "XLRE"),
                ("Communications (XLC)", "XLC"),
            ]),
        },
        CategorySpec {
            key: "global_indices".into(),
            title: "Global Indices".into(),
            entries: entries(&[
                ("KOSPI", "^KS11"),
                ("KOSDAQ", "^KQ11"),
                ("Nikkei 225", "^N225"),
                ("Hang Seng", "^HSI"),
                ("Shanghai Composite", "000001.SS"),
                ("DAX", "^GDAXI"),
                ("FTSE 100", "^FTSE"),
            ]),
        },
        CategorySpec {
            key: "currencies".into(),
            title: "Currencies".into(),
            entries: entries(&[
                ("USD/KRW", "KRW=X"),
                ("USD/JPY", "JPY=X"),
                ("EUR/USD", "EURUSD=X"),
                ("USD/CNY", "CNY=X"),
            ]),
        },
        CategorySpec {
            key: "commodities".into(),
            title: "Commodities".into(),
            entries: entries(&[
                ("WTI Crude", "CL=F"),
                ("Gold", "GC=F"),
                ("Silver", "SI=F"),
                ("Copper", "HG=F"),
                ("Natural Gas", "NG=F"),
            ]),
        },
        CategorySpec {
            key: "agriculture".into(),
            title: "Agriculture".into(),
            entries: entries(&[("Corn", "ZC=F"), ("Soybeans", "ZS=F"), ("Wheat", "ZW=F")]),
        },
    ])
}
