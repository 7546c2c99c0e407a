//! Dashboard state management
//!
//! Contains the main dashboard state struct

use super::crosshair::CrosshairSelection;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::store::LoadState;

use std::collections::VecDeque;
use std::time::Instant;

/// Dashboard state: the load lifecycle of the dataset plus view-local
/// interaction state.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment this dashboard reads from.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Load lifecycle of the block statistics dataset.
    pub load: LoadState,
    /// Highlighted points on the two line charts.
    pub crosshair: CrosshairSelection,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant) -> Self {
        Self {
            environment,
            start_time,
            load: LoadState::default(),
            crosshair: CrosshairSelection::default(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
