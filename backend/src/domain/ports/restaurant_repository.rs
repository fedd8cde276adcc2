//! Read-side port over stored restaurants.
//!
//! Every lookup returns records in storage order; callers must not rely on
//! any particular ordering beyond that.

use async_trait::async_trait;

use crate::domain::{Restaurant, RestaurantId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading restaurants.
    pub enum RestaurantRepositoryError {
        /// The store could not be reached.
        Connection => connection, "restaurant store connection failed: {message}",
        /// A lookup failed while executing or decoding rows.
        Query => query, "restaurant query failed: {message}",
    }
}

/// Port for restaurant lookups used by proximity search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Return every restaurant.
    async fn find_all(&self) -> Result<Vec<Restaurant>, RestaurantRepositoryError>;

    /// Return the restaurants whose identifiers appear in `ids`.
    ///
    /// Unknown identifiers are skipped silently.
    async fn find_by_ids(
        &self,
        ids: &[RestaurantId],
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError>;

    /// Restaurants whose name equals `name`, ignoring case.
    async fn find_by_name_exact(
        &self,
        name: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError>;

    /// Restaurants whose name contains `fragment`, ignoring case.
    async fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError>;

    /// Restaurants carrying an attribute tag equal to `attribute`, ignoring case.
    async fn find_by_attribute(
        &self,
        attribute: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError>;
}

/// Fixture implementation backed by an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRestaurantRepository;

#[async_trait]
impl RestaurantRepository for FixtureRestaurantRepository {
    async fn find_all(&self) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_ids(
        &self,
        _ids: &[RestaurantId],
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_name_exact(
        &self,
        _name: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_name_containing(
        &self,
        _fragment: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_attribute(
        &self,
        _attribute: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        Ok(Vec::new())
    }
}
