//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod cache_key;
mod cache_store;
mod menu_repository;
mod restaurant_query;
mod restaurant_repository;

pub use cache_key::{GEOHASH_PRECISION, GeoCacheKey, GeoCacheKeyError};
#[cfg(test)]
pub use cache_store::MockCacheStore;
pub use cache_store::{CacheStore, CacheStoreError};
#[cfg(test)]
pub use menu_repository::MockMenuRepository;
pub use menu_repository::{FixtureMenuRepository, MenuRepository, MenuRepositoryError};
#[cfg(test)]
pub use restaurant_query::MockRestaurantQuery;
pub use restaurant_query::{FixtureRestaurantQuery, RestaurantQuery};
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
pub use restaurant_repository::{
    FixtureRestaurantRepository, RestaurantRepository, RestaurantRepositoryError,
};
