pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    use std::time::Duration;

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum event buffer size for the worker channel.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long terminal input polling blocks per UI loop iteration (milliseconds).
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    /// How long the splash screen is shown before the dashboard appears.
    pub const SPLASH_DURATION_SECS: u64 = 2;

    /// Helper function to get the UI poll interval.
    pub const fn ui_poll_interval() -> Duration {
        Duration::from_millis(UI_POLL_INTERVAL_MS)
    }

    /// Helper function to get the splash duration.
    pub const fn splash_duration() -> Duration {
        Duration::from_secs(SPLASH_DURATION_SECS)
    }

    // =============================================================================
    // API CONFIGURATION
    // =============================================================================

    /// Statistics API endpoints.
    pub mod stats_api {
        /// Resource path serving the per-day block statistics dataset.
        pub const BLOCK_STATS_PATH: &str = "/visualizations/blocks/day/num";
    }
}
