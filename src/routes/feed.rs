use std::collections::HashMap;

use anyhow::Context;
use axum::{extract::State, response::Json};
use consumed_feed::ActivityConsolidator;
use consumed_shared::{Engagement, EventRecord};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    card::{FeedCard, feed_cards},
    error::AppError,
    routes::AppState,
};

/// Request payload for feed consolidation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidateRequest {
    pub events: Vec<EventRecord>,
    /// Falls back to the configured feed window
    #[serde(default)]
    pub window_seconds: Option<u64>,
    /// Engagement counters keyed by post id
    #[serde(default)]
    pub engagement: HashMap<String, Engagement>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsolidateResponse {
    pub groups: Vec<FeedCard>,
}

/// POST /api/feed/consolidate
#[tracing::instrument(skip_all, fields(events = payload.events.len()))]
pub async fn consolidate(
    State(state): State<AppState>,
    Json(payload): Json<ConsolidateRequest>,
) -> Result<Json<ConsolidateResponse>, AppError> {
    let window_seconds = payload
        .window_seconds
        .unwrap_or(state.config.feed.window_seconds);

    if window_seconds == 0 {
        return Err(AppError::ValidationError(
            "windowSeconds must be greater than 0".to_string(),
        ));
    }

    let ConsolidateRequest {
        events, engagement, ..
    } = payload;
    let consolidator = ActivityConsolidator::from_seconds(window_seconds);
    let groups =
        tokio::task::spawn_blocking(move || consolidator.consolidate_with(events, &engagement))
            .await
            .context("feed consolidation task failed")?;

    tracing::info!(groups = groups.len(), window_seconds, "Feed consolidated");

    Ok(Json(ConsolidateResponse {
        groups: feed_cards(groups, OffsetDateTime::now_utc()),
    }))
}
