//! Full pipeline command: fetch, write the post, notify.

use anyhow::Result;
use briefing_config::{default_crypto_ids, AppConfig};
use briefing_data::MarketDataFetcher;
use briefing_notify::{build_messages, TelegramNotifier};
use briefing_report::{headline_summary, PostGenerator};
use tracing::{error, info};

use crate::cli::RunArgs;

pub async fn run(args: RunArgs, config: AppConfig) -> Result<()> {
    let fetcher = MarketDataFetcher::from_config(&config)?;
    let snapshot = fetcher.fetch_all().await;

    let summary = headline_summary(&snapshot);
    let generator = PostGenerator::new(config.report.clone());
    let path = match &args.posts_dir {
        Some(dir) => generator.generate_in(dir, fetcher.catalog(), &snapshot, &summary)?,
        None => generator.generate(fetcher.catalog(), &snapshot, &summary)?,
    };
    println!("Briefing written to {}", path.display());

    if args.skip_notify {
        info!("notification skipped by request");
        return Ok(());
    }

    match TelegramNotifier::from_settings(&config.telegram)? {
        Some(notifier) => {
            let post_url = generator.post_url(snapshot.timestamp.date_naive());
            let crypto_order: Vec<String> = default_crypto_ids()
                .into_iter()
                .map(|(_, symbol)| symbol)
                .collect();
            let messages =
                build_messages(fetcher.catalog(), &snapshot, &crypto_order, &post_url);
            // The post is already on disk; a failed send must not fail the run.
            match notifier.send_briefing(&messages).await {
                Ok(()) => println!("Notification sent ({} messages)", messages.len()),
                Err(err) => error!("notification failed: {}", err),
            }
        }
        None => println!("Telegram is not configured; notification skipped"),
    }

    Ok(())
}
