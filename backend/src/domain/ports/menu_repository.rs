//! Read-side port over stored menus.

use async_trait::async_trait;

use crate::domain::{Menu, RestaurantId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading menus.
    pub enum MenuRepositoryError {
        /// The store could not be reached.
        Connection => connection, "menu store connection failed: {message}",
        /// A lookup failed while executing or decoding rows.
        Query => query, "menu query failed: {message}",
    }
}

/// Port for menu lookups.
///
/// Item searches return whole menus; the owning restaurant is
/// [`Menu::restaurant_id`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// The menu of one restaurant, or `None` when it has none.
    async fn find_by_restaurant_id(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Option<Menu>, MenuRepositoryError>;

    /// Menus with an item whose name equals `name`, ignoring case.
    async fn find_by_item_name_exact(&self, name: &str) -> Result<Vec<Menu>, MenuRepositoryError>;

    /// Menus with an item whose name contains `fragment`, ignoring case.
    async fn find_by_item_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Menu>, MenuRepositoryError>;

    /// Menus with an item attribute containing `fragment`, ignoring case.
    async fn find_by_item_attribute_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Menu>, MenuRepositoryError>;
}

/// Fixture implementation with no menus.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMenuRepository;

#[async_trait]
impl MenuRepository for FixtureMenuRepository {
    async fn find_by_restaurant_id(
        &self,
        _restaurant_id: &RestaurantId,
    ) -> Result<Option<Menu>, MenuRepositoryError> {
        Ok(None)
    }

    async fn find_by_item_name_exact(&self, _name: &str) -> Result<Vec<Menu>, MenuRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_item_name_containing(
        &self,
        _fragment: &str,
    ) -> Result<Vec<Menu>, MenuRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_item_attribute_containing(
        &self,
        _fragment: &str,
    ) -> Result<Vec<Menu>, MenuRepositoryError> {
        Ok(Vec::new())
    }
}
