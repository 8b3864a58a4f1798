//! Telegram delivery of the condensed briefing.

mod message;
mod telegram;

pub use message::{build_messages, format_change, split_message};
pub use telegram::TelegramNotifier;
