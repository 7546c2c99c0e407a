//! Load lifecycle for the block statistics dataset
//!
//! One dataset, one state machine: Idle -> Loading -> (Loaded | Failed).
//! Both terminal states may re-enter Loading on a later dispatch.

use crate::api::error::ApiError;
use crate::stats::BlockStats;
use std::fmt::Display;

/// A transition in the dataset load lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadUpdate {
    /// A fetch has been dispatched.
    Started,
    /// The fetch resolved; the payload is already scaled to milliseconds.
    Succeeded(BlockStats),
    /// The fetch rejected.
    Failed(LoadError),
}

/// A fetch failure, captured whole for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadError {
    /// Server-supplied message, when the failure carried one.
    message: Option<String>,
    /// Fallback rendering of the raw error.
    detail: String,
}

impl LoadError {
    /// The text shown to the user: the message if present, else the raw error.
    pub fn display_text(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.detail)
    }
}

impl From<ApiError> for LoadError {
    fn from(err: ApiError) -> Self {
        let message = match &err {
            ApiError::Http { message, .. } if !message.is_empty() => Some(message.clone()),
            _ => None,
        };
        Self {
            message,
            detail: err.to_string(),
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_text())
    }
}

/// Load status of the single block statistics dataset.
///
/// Exactly one of `loading`, `loaded`, or a set `error` reflects the most
/// recent transition; `loaded` and `error` are mutually exclusive.
#[derive(Debug, Clone, Default)]
pub struct LoadState {
    pub loading: bool,
    pub loaded: bool,
    pub data: Option<BlockStats>,
    pub error: Option<LoadError>,
}

impl LoadState {
    /// True iff the most recent completed load succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The load-if-absent guard: a fetch should be dispatched only when no
    /// load has succeeded and none is in flight.
    pub fn should_load(&self) -> bool {
        !self.loaded && !self.loading
    }

    /// Applies one lifecycle transition.
    pub fn apply(&mut self, update: LoadUpdate) {
        match update {
            LoadUpdate::Started => {
                // Prior data and error stay untouched until resolution.
                self.loading = true;
            }
            LoadUpdate::Succeeded(stats) => {
                self.loading = false;
                self.loaded = true;
                self.data = Some(stats);
                self.error = None;
            }
            LoadUpdate::Failed(err) => {
                self.loading = false;
                self.loaded = false;
                self.data = None;
                self.error = Some(err);
            }
        }
    }
}
