//! The four independent text-search strategies.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveTime;
use thiserror::Error;

use crate::domain::ports::{
    MenuRepository, MenuRepositoryError, RestaurantRepository, RestaurantRepositoryError,
};
use crate::domain::{GeoPoint, Menu, Restaurant, SearchCriteria};

use super::dedup::{merge_unique, unique_ids};

/// Failures raised while running a single strategy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error(transparent)]
    Restaurants(#[from] RestaurantRepositoryError),
    #[error(transparent)]
    Menus(#[from] MenuRepositoryError),
    /// The shared worker budget was shut down before the strategy started.
    #[error("search worker pool is closed")]
    WorkersClosed,
}

/// Port bundle used by every strategy.
#[derive(Clone)]
pub struct SearchPorts {
    pub restaurants: Arc<dyn RestaurantRepository>,
    pub menus: Arc<dyn MenuRepository>,
}

impl SearchPorts {
    pub fn new(restaurants: Arc<dyn RestaurantRepository>, menus: Arc<dyn MenuRepository>) -> Self {
        Self { restaurants, menus }
    }

    /// Fetch the restaurants owning `menus`, ordered by first appearance.
    async fn restaurants_for(&self, menus: Vec<Menu>) -> Result<Vec<Restaurant>, SearchError> {
        let ids = unique_ids(menus.into_iter().map(|menu| menu.restaurant_id));
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut by_id: HashMap<_, _> = self
            .restaurants
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|restaurant| (restaurant.id().clone(), restaurant))
            .collect();
        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }
}

/// Text query together with the open-and-close-by filter for one search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchScope {
    origin: GeoPoint,
    query: String,
    now: NaiveTime,
    radius_km: f64,
}

impl SearchScope {
    pub fn new(criteria: &SearchCriteria, radius_km: f64) -> Self {
        Self {
            origin: *criteria.location(),
            query: criteria.query().to_owned(),
            now: criteria.at(),
            radius_km,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    fn retain_open_close_by(&self, candidates: Vec<Restaurant>) -> Vec<Restaurant> {
        candidates
            .into_iter()
            .filter(|restaurant| {
                restaurant.is_open_close_by(&self.origin, self.now, self.radius_km)
            })
            .collect()
    }
}

/// One way of matching the query against the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Restaurant name, exact then substring.
    Name,
    /// Restaurant attribute tag membership.
    Attribute,
    /// Menu item name, exact then substring.
    ItemName,
    /// Menu item attribute substring.
    ItemAttribute,
}

impl SearchStrategy {
    /// Every strategy in merge order.
    pub const ALL: [SearchStrategy; 4] = [
        SearchStrategy::Name,
        SearchStrategy::Attribute,
        SearchStrategy::ItemName,
        SearchStrategy::ItemAttribute,
    ];

    /// Position of the strategy in [`SearchStrategy::ALL`].
    pub fn position(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Attribute => 1,
            Self::ItemName => 2,
            Self::ItemAttribute => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Attribute => "attribute",
            Self::ItemName => "item_name",
            Self::ItemAttribute => "item_attribute",
        }
    }

    /// Run the strategy and keep only restaurants open and close by.
    pub async fn run(
        self,
        ports: &SearchPorts,
        scope: &SearchScope,
    ) -> Result<Vec<Restaurant>, SearchError> {
        let query = scope.query();
        let candidates = match self {
            Self::Name => {
                let exact = ports.restaurants.find_by_name_exact(query).await?;
                let partial = ports.restaurants.find_by_name_containing(query).await?;
                merge_unique([exact, partial])
            }
            Self::Attribute => ports.restaurants.find_by_attribute(query).await?,
            Self::ItemName => {
                let mut menus = ports.menus.find_by_item_name_exact(query).await?;
                menus.extend(ports.menus.find_by_item_name_containing(query).await?);
                ports.restaurants_for(menus).await?
            }
            Self::ItemAttribute => {
                let menus = ports.menus.find_by_item_attribute_containing(query).await?;
                ports.restaurants_for(menus).await?
            }
        };
        Ok(scope.retain_open_close_by(candidates))
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
