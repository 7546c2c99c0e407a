//! Session setup and initialization

use crate::api::{ApiClient, StatsApi};
use crate::consts::cli_consts;
use crate::environment::Environment;
use crate::events::Event;
use crate::workers::core::EventSender;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Receives worker events for display and state updates
    pub event_receiver: mpsc::Receiver<Event>,
    /// Sender handed to spawned fetch workers
    pub event_sender: EventSender,
    /// Shutdown signal for background tasks
    pub shutdown_sender: broadcast::Sender<()>,
    /// Statistics API client shared by fetch dispatches
    pub api: Arc<ApiClient>,
    /// The environment this session reads from
    pub environment: Environment,
}

/// Sets up a dashboard session.
///
/// Wires the event channel, the shutdown channel, and the API client that
/// both the TUI and headless modes hand to fetch workers.
pub fn setup_session(environment: Environment) -> SessionData {
    let (sender, event_receiver) = mpsc::channel::<Event>(cli_consts::EVENT_QUEUE_SIZE);
    let (shutdown_sender, _) = broadcast::channel(1);
    let api = Arc::new(ApiClient::new(environment));
    let environment = api.environment().clone();

    SessionData {
        event_receiver,
        event_sender: EventSender::new(sender),
        shutdown_sender,
        api,
        environment,
    }
}
