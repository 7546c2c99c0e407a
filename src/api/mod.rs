use crate::environment::Environment;
use crate::stats::BlockStats;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Injected HTTP capability for the statistics backend.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StatsApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the per-day block statistics dataset.
    async fn block_stats(&self) -> Result<BlockStats, error::ApiError>;
}
