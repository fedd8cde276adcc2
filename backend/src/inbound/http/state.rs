//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the driving port and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::RestaurantQuery;

/// Which search variant serves text queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Strategies fan out onto the shared worker budget.
    #[default]
    Concurrent,
    /// Strategies run one after another.
    Sequential,
}

impl SearchMode {
    pub fn from_sequential_flag(sequential: bool) -> Self {
        if sequential {
            Self::Sequential
        } else {
            Self::Concurrent
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub restaurants: Arc<dyn RestaurantQuery>,
    pub clock: Arc<dyn Clock>,
    pub search_mode: SearchMode,
}

impl HttpState {
    /// Construct state reading the time of day from `clock`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use nearby_eats::domain::ports::FixtureRestaurantQuery;
    /// use nearby_eats::inbound::http::state::{HttpState, SearchMode};
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureRestaurantQuery),
    ///     Arc::new(mockable::DefaultClock),
    ///     SearchMode::Concurrent,
    /// );
    /// assert_eq!(state.search_mode, SearchMode::Concurrent);
    /// ```
    pub fn new(
        restaurants: Arc<dyn RestaurantQuery>,
        clock: Arc<dyn Clock>,
        search_mode: SearchMode,
    ) -> Self {
        Self {
            restaurants,
            clock,
            search_mode,
        }
    }
}
