//! Driving port for restaurant discovery.
//!
//! Inbound adapters call this port to browse nearby restaurants, run text
//! searches and read menus without depending on storage or cache details.

use async_trait::async_trait;

use crate::domain::{Error, Menu, Restaurant, RestaurantId, SearchCriteria};

/// Driving port for restaurant reads.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), nearby_eats::domain::Error> {
/// use chrono::NaiveTime;
/// use nearby_eats::domain::SearchCriteria;
/// use nearby_eats::domain::ports::{FixtureRestaurantQuery, RestaurantQuery};
///
/// let at = NaiveTime::from_hms_opt(12, 0, 0).expect("valid time");
/// let criteria = SearchCriteria::new(12.97, 77.59, "dosa", at).expect("valid");
/// let found = FixtureRestaurantQuery.search(&criteria).await?;
/// assert!(found.is_empty());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantQuery: Send + Sync {
    /// Open restaurants inside the serving radius around the criteria
    /// location. The text query is ignored.
    async fn find_nearby(&self, criteria: &SearchCriteria) -> Result<Vec<Restaurant>, Error>;

    /// Text search running the four strategies one after another.
    ///
    /// An empty query yields an empty list.
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Restaurant>, Error>;

    /// Text search running the four strategies concurrently.
    ///
    /// A failing strategy contributes nothing instead of failing the search.
    async fn search_concurrent(&self, criteria: &SearchCriteria)
    -> Result<Vec<Restaurant>, Error>;

    /// The menu of `restaurant_id`; `NotFound` when it has none.
    async fn menu(&self, restaurant_id: &RestaurantId) -> Result<Menu, Error>;
}

/// Fixture query with an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRestaurantQuery;

#[async_trait]
impl RestaurantQuery for FixtureRestaurantQuery {
    async fn find_nearby(&self, _criteria: &SearchCriteria) -> Result<Vec<Restaurant>, Error> {
        Ok(Vec::new())
    }

    async fn search(&self, _criteria: &SearchCriteria) -> Result<Vec<Restaurant>, Error> {
        Ok(Vec::new())
    }

    async fn search_concurrent(
        &self,
        _criteria: &SearchCriteria,
    ) -> Result<Vec<Restaurant>, Error> {
        Ok(Vec::new())
    }

    async fn menu(&self, restaurant_id: &RestaurantId) -> Result<Menu, Error> {
        Err(Error::not_found(format!(
            "menu for restaurant {restaurant_id} not found"
        )))
    }
}
