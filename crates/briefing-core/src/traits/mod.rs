//! Trait definitions for external data providers.

mod quote_provider;

pub use quote_provider::QuoteProvider;
