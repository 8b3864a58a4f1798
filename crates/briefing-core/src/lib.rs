//! Core types and traits for the briefing system.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Quote, MarketSnapshot, SymbolCatalog)
//! - Best-effort section records (crypto, economic, sentiment, calendar)
//! - The retry policy used around flaky upstream calls
//! - Core traits for quote providers

pub mod error;
pub mod retry;
pub mod traits;
pub mod types;

pub use error::{BriefingError, BriefingResult};
pub use retry::RetryPolicy;
pub use traits::*;
pub use types::*;
