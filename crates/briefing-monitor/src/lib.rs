//! Observability for the briefing system.

mod logging;

pub use logging::setup_logging;
