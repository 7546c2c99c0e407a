//! Dataset fetching for the dashboard

use super::core::EventSender;
use crate::api::StatsApi;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::store::{LoadError, LoadUpdate};
use std::sync::Arc;

/// Fetches the block statistics dataset.
///
/// One invocation performs a single best-effort request: no retry, no
/// timeout, no cancellation. The outcome reaches the dashboard as exactly
/// one terminal load transition on the event channel.
pub struct StatsFetcher {
    api: Arc<dyn StatsApi>,
    event_sender: EventSender,
}

impl StatsFetcher {
    pub fn new(api: Arc<dyn StatsApi>, event_sender: EventSender) -> Self {
        Self { api, event_sender }
    }

    /// Perform one load cycle.
    pub async fn fetch(&self) {
        self.event_sender
            .send_fetch_event(
                "Fetching block statistics...".to_string(),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        match self.api.block_stats().await {
            Ok(mut stats) => {
                // The API reports x in epoch seconds; everything downstream
                // consumes milliseconds.
                stats.scale_to_millis();
                let msg = format!(
                    "Loaded {} days of block statistics",
                    stats.blocks_per_day.data.len()
                );
                self.event_sender
                    .send_transition(
                        LoadUpdate::Succeeded(stats),
                        msg,
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
            }
            Err(e) => {
                let log_level = e.log_level();
                let msg = format!("Failed to load block statistics: {}", e);
                self.event_sender
                    .send_transition(
                        LoadUpdate::Failed(LoadError::from(e)),
                        msg,
                        EventType::Error,
                        log_level,
                    )
                    .await;
            }
        }
    }
}
