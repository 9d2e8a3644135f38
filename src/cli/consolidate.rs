use std::path::Path;

use anyhow::{Context, Result};
use consumed_feed::ActivityConsolidator;
use consumed_shared::EventRecord;
use time::OffsetDateTime;

use crate::card::{FeedCard, feed_cards};

/// Consolidate a JSON array of feed events read from `input`.
pub fn consolidate_file(
    config: &crate::config::Config,
    input: &Path,
    window_override: Option<u64>,
) -> Result<Vec<FeedCard>> {
    let window_seconds = window_override.unwrap_or(config.feed.window_seconds);
    anyhow::ensure!(window_seconds > 0, "window must be greater than 0 seconds");

    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let events: Vec<EventRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of feed events", input.display()))?;

    tracing::info!(
        events = events.len(),
        window_seconds,
        input = %input.display(),
        "Consolidating feed events"
    );

    let groups = ActivityConsolidator::from_seconds(window_seconds).consolidate(events);

    Ok(feed_cards(groups, OffsetDateTime::now_utc()))
}

pub fn run(
    config: crate::config::Config,
    input: &Path,
    window_override: Option<u64>,
) -> Result<()> {
    let cards = consolidate_file(&config, input, window_override)?;
    println!("{}", serde_json::to_string_pretty(&cards)?);

    Ok(())
}
