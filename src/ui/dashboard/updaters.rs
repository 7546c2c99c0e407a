//! Dashboard state update logic
//!
//! Contains the methods that apply queued worker events to dashboard state

use super::state::DashboardState;

use crate::events::Event as WorkerEvent;
use crate::store::LoadUpdate;

impl DashboardState {
    /// Update the dashboard state with new tick and queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            // Add to activity logs for display
            self.add_to_activity_log(event.clone());

            // Process the event for state updates
            self.process_event(event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: WorkerEvent) {
        if let Some(update) = event.transition {
            // A resolved load invalidates any highlighted points.
            if matches!(update, LoadUpdate::Succeeded(_) | LoadUpdate::Failed(_)) {
                self.crosshair.clear();
            }
            self.load.apply(update);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::events::{Event, EventType};
    use crate::logging::LogLevel;
    use crate::stats::{BlockStats, Series, SeriesPoint};
    use crate::store::{LoadError, LoadUpdate};
    use crate::ui::dashboard::crosshair::CrosshairSelection;
    use std::time::Instant;

    fn stats() -> BlockStats {
        let series = |name: &str| Series {
            name: name.to_string(),
            data: vec![SeriesPoint { x: 1_000_000.0, y: 5.0 }],
        };
        BlockStats {
            blocks_per_day: series("Blocks per day"),
            transactions_per_block_per_day: series("Transactions per block per day"),
            op_return_blocks_vs_blocks: series("OP_RETURN blocks vs blocks"),
        }
    }

    fn state() -> DashboardState {
        DashboardState::new(Environment::Local, Instant::now())
    }

    fn transition_event(update: LoadUpdate) -> Event {
        Event::load_transition(update, "event".to_string(), EventType::Refresh, LogLevel::Info)
    }

    #[test]
    fn success_event_moves_state_to_loaded() {
        let mut state = state();
        state.add_event(transition_event(LoadUpdate::Started));
        state.add_event(transition_event(LoadUpdate::Succeeded(stats())));

        state.update();

        assert!(state.load.is_loaded());
        assert!(!state.load.loading);
        assert!(state.load.data.is_some());
        assert_eq!(state.activity_logs.len(), 2);
    }

    #[test]
    fn failure_event_records_error_and_drops_data() {
        let mut state = state();
        state.add_event(transition_event(LoadUpdate::Succeeded(stats())));
        state.update();

        let error = LoadError::from(crate::api::error::ApiError::Http {
            status: 500,
            message: "boom".to_string(),
        });
        state.add_event(transition_event(LoadUpdate::Failed(error)));
        state.update();

        assert!(!state.load.is_loaded());
        assert!(state.load.data.is_none());
        assert_eq!(
            state.load.error.as_ref().map(|e| e.display_text().to_string()),
            Some("boom".to_string())
        );
    }

    #[test]
    fn resolved_load_clears_the_crosshair() {
        let mut state = state();
        state.add_event(transition_event(LoadUpdate::Succeeded(stats())));
        state.update();

        state.crosshair =
            CrosshairSelection::select_at(state.load.data.as_ref().unwrap(), 1_000_000.0);
        assert!(!state.crosshair.is_empty());

        state.add_event(transition_event(LoadUpdate::Succeeded(stats())));
        state.update();
        assert!(state.crosshair.is_empty());
    }

    #[test]
    fn plain_log_events_do_not_touch_the_store() {
        let mut state = state();
        state.add_event(Event::fetcher_with_level(
            "Fetching block statistics...".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        ));

        state.update();

        assert!(state.load.should_load());
        assert_eq!(state.activity_logs.len(), 1);
    }
}
