//! Multi-strategy text search with sequential and concurrent execution.
//!
//! Each strategy filters its own candidates through the open-and-close-by
//! check. Results are concatenated in [`SearchStrategy::ALL`] order and
//! deduplicated by restaurant identifier, first occurrence wins.
//!
//! The concurrent variant spawns one task per strategy onto a shared worker
//! budget and merges strictly after every task has finished. A failing or
//! panicking strategy is logged and contributes nothing.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::domain::{Restaurant, TraceId};

mod dedup;
mod strategy;

use dedup::merge_unique;
pub use strategy::{SearchError, SearchPorts, SearchScope, SearchStrategy};

/// Worker budget used when none is configured.
pub const DEFAULT_SEARCH_WORKERS: usize = 10;

/// Orchestrates the four search strategies.
#[derive(Clone)]
pub struct RestaurantSearch {
    ports: SearchPorts,
    workers: Arc<Semaphore>,
}

impl RestaurantSearch {
    /// Build a search sharing a budget of `workers` concurrent strategy runs
    /// across all callers. A budget of zero is raised to one.
    pub fn new(ports: SearchPorts, workers: usize) -> Self {
        Self {
            ports,
            workers: Arc::new(Semaphore::new(workers.max(1))),
        }
    }

    /// Run the strategies one after another.
    ///
    /// The first failing strategy aborts the search.
    pub async fn search(&self, scope: &SearchScope) -> Result<Vec<Restaurant>, SearchError> {
        if scope.query().is_empty() {
            return Ok(Vec::new());
        }
        let mut per_strategy = Vec::with_capacity(SearchStrategy::ALL.len());
        for strategy in SearchStrategy::ALL {
            let found = strategy.run(&self.ports, scope).await?;
            debug!(%strategy, count = found.len(), "search strategy finished");
            per_strategy.push(found);
        }
        Ok(merge_unique(per_strategy))
    }

    /// Run the strategies concurrently and merge once all have finished.
    pub async fn search_concurrent(&self, scope: &SearchScope) -> Vec<Restaurant> {
        if scope.query().is_empty() {
            return Vec::new();
        }

        let trace_id = TraceId::current();
        let mut tasks = JoinSet::new();
        for strategy in SearchStrategy::ALL {
            let ports = self.ports.clone();
            let scope = scope.clone();
            let workers = Arc::clone(&self.workers);
            tasks.spawn(TraceId::scope_optional(trace_id, async move {
                let Ok(_permit) = workers.acquire_owned().await else {
                    return (strategy, Err(SearchError::WorkersClosed));
                };
                (strategy, strategy.run(&ports, &scope).await)
            }));
        }

        let mut per_strategy: [Vec<Restaurant>; 4] = Default::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((strategy, Ok(found))) => {
                    debug!(%strategy, count = found.len(), "search strategy finished");
                    per_strategy[strategy.position()] = found;
                }
                Ok((strategy, Err(error))) => {
                    warn!(%strategy, %error, "search strategy failed; contributing no results");
                }
                Err(error) => {
                    warn!(%error, "search strategy task aborted; contributing no results");
                }
            }
        }
        merge_unique(per_strategy)
    }

    /// Permits currently free in the shared worker budget.
    pub fn available_workers(&self) -> usize {
        self.workers.available_permits()
    }
}

impl std::fmt::Debug for RestaurantSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantSearch")
            .field("available_workers", &self.available_workers())
            .finish_non_exhaustive()
    }
}
