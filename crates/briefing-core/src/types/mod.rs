//! Market data types.

mod calendar;
mod catalog;
mod crypto;
mod economic;
mod quote;
mod sentiment;
mod snapshot;

pub use calendar::{CalendarEvent, EconomicCalendar, Importance};
pub use catalog::{entries, CategorySpec, SymbolCatalog, SymbolEntry};
pub use crypto::CryptoQuote;
pub use economic::{EconomicIndicators, SeriesPoint};
pub use quote::Quote;
pub use sentiment::{classify, FearGreedIndex, MarketSentiment, SentimentSummary};
pub use snapshot::MarketSnapshot;
