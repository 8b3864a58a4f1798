//! Markdown briefing post generation.

mod post;
mod summary;

pub use post::PostGenerator;
pub use summary::headline_summary;
