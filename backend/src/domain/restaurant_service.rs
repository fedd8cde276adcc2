//! Restaurant discovery service.
//!
//! Implements the [`RestaurantQuery`] driving port on top of the finder, the
//! search orchestrator and the menu repository, and maps their failures into
//! domain [`Error`]s.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    MenuRepository, MenuRepositoryError, RestaurantQuery, RestaurantRepository,
    RestaurantRepositoryError,
};
use crate::domain::{
    Error, FinderError, GeoCache, GeoCacheError, Menu, Restaurant, RestaurantFinder, RestaurantId,
    RestaurantSearch, SearchCriteria, SearchError, SearchPorts, ServingRadiusPolicy,
};

use super::search::SearchScope;

fn map_restaurant_error(error: RestaurantRepositoryError) -> Error {
    match error {
        RestaurantRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("restaurant store unavailable: {message}"))
        }
        RestaurantRepositoryError::Query { message } => {
            Error::internal(format!("restaurant store error: {message}"))
        }
    }
}

fn map_menu_error(error: MenuRepositoryError) -> Error {
    match error {
        MenuRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("menu store unavailable: {message}"))
        }
        MenuRepositoryError::Query { message } => {
            Error::internal(format!("menu store error: {message}"))
        }
    }
}

fn map_cache_error(error: GeoCacheError) -> Error {
    Error::internal(format!("geo cache error: {error}"))
}

fn map_finder_error(error: FinderError) -> Error {
    match error {
        FinderError::Repository(err) => map_restaurant_error(err),
        FinderError::Cache(err) => map_cache_error(err),
    }
}

fn map_search_error(error: SearchError) -> Error {
    match error {
        SearchError::Restaurants(err) => map_restaurant_error(err),
        SearchError::Menus(err) => map_menu_error(err),
        SearchError::WorkersClosed => Error::internal("search worker pool is closed"),
    }
}

/// Outbound dependencies of [`RestaurantQueryService`].
pub struct RestaurantQueryPorts {
    pub restaurants: Arc<dyn RestaurantRepository>,
    pub menus: Arc<dyn MenuRepository>,
    pub cache: GeoCache,
}

/// Service implementing [`RestaurantQuery`].
#[derive(Clone)]
pub struct RestaurantQueryService {
    finder: RestaurantFinder,
    search: RestaurantSearch,
    menus: Arc<dyn MenuRepository>,
    policy: ServingRadiusPolicy,
}

impl RestaurantQueryService {
    /// Wire the service. Cached proximity pools cover the widest radius
    /// `policy` can produce so cache hits serve every time of day.
    pub fn new(ports: RestaurantQueryPorts, policy: ServingRadiusPolicy, workers: usize) -> Self {
        let RestaurantQueryPorts {
            restaurants,
            menus,
            cache,
        } = ports;
        let cache_radius_km = policy.peak_radius_km().max(policy.normal_radius_km());
        Self {
            finder: RestaurantFinder::new(Arc::clone(&restaurants), cache, cache_radius_km),
            search: RestaurantSearch::new(
                SearchPorts::new(restaurants, Arc::clone(&menus)),
                workers,
            ),
            menus,
            policy,
        }
    }

    pub fn policy(&self) -> ServingRadiusPolicy {
        self.policy
    }

    fn scope(&self, criteria: &SearchCriteria) -> SearchScope {
        SearchScope::new(criteria, self.policy.radius_km(criteria.at()))
    }
}

#[async_trait]
impl RestaurantQuery for RestaurantQueryService {
    async fn find_nearby(&self, criteria: &SearchCriteria) -> Result<Vec<Restaurant>, Error> {
        let radius_km = self.policy.radius_km(criteria.at());
        self.finder
            .find_nearby(criteria.location(), criteria.at(), radius_km)
            .await
            .map_err(map_finder_error)
    }

    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Restaurant>, Error> {
        self.search
            .search(&self.scope(criteria))
            .await
            .map_err(map_search_error)
    }

    async fn search_concurrent(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<Restaurant>, Error> {
        Ok(self.search.search_concurrent(&self.scope(criteria)).await)
    }

    async fn menu(&self, restaurant_id: &RestaurantId) -> Result<Menu, Error> {
        self.menus
            .find_by_restaurant_id(restaurant_id)
            .await
            .map_err(map_menu_error)?
            .ok_or_else(|| {
                Error::not_found(format!("menu for restaurant {restaurant_id} not found"))
            })
    }
}

#[cfg(test)]
#[path = "restaurant_service_tests.rs"]
mod tests;
