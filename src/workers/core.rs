//! Core worker utilities

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::store::LoadUpdate;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a plain activity-log event from the stats fetcher
    pub async fn send_fetch_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::fetcher_with_level(message, event_type, log_level))
            .await;
    }

    /// Send an event carrying a load state transition
    pub async fn send_transition(
        &self,
        update: LoadUpdate,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::load_transition(update, message, event_type, log_level))
            .await;
    }
}
