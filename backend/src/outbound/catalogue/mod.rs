//! In-memory document catalogue implementing the restaurant and menu
//! repositories.
//!
//! Matching mirrors a document store queried by case-insensitive field
//! equality, substring and array membership. Results keep seed order.

use async_trait::async_trait;

use crate::domain::ports::{
    MenuRepository, MenuRepositoryError, RestaurantRepository, RestaurantRepositoryError,
};
use crate::domain::{Menu, Restaurant, RestaurantId};

mod latency;
mod seed;

pub use latency::SimulatedLatency;
pub use seed::{CatalogueLoadError, CatalogueSeed, load_catalogue};

/// Read-only catalogue held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogue {
    restaurants: Vec<Restaurant>,
    menus: Vec<Menu>,
}

impl InMemoryCatalogue {
    pub fn new(restaurants: Vec<Restaurant>, menus: Vec<Menu>) -> Self {
        Self { restaurants, menus }
    }

    pub fn restaurant_count(&self) -> usize {
        self.restaurants.len()
    }

    pub fn menu_count(&self) -> usize {
        self.menus.len()
    }

    fn restaurants_where<F>(&self, predicate: F) -> Vec<Restaurant>
    where
        F: Fn(&Restaurant) -> bool,
    {
        self.restaurants
            .iter()
            .filter(|restaurant| predicate(*restaurant))
            .cloned()
            .collect()
    }

    fn menus_with_item<F>(&self, predicate: F) -> Vec<Menu>
    where
        F: Fn(&crate::domain::MenuItem) -> bool,
    {
        self.menus
            .iter()
            .filter(|menu| menu.items.iter().any(&predicate))
            .cloned()
            .collect()
    }
}

impl From<CatalogueSeed> for InMemoryCatalogue {
    fn from(seed: CatalogueSeed) -> Self {
        Self::new(seed.restaurants, seed.menus)
    }
}

fn equals_ignoring_case(value: &str, needle: &str) -> bool {
    value.to_lowercase() == needle.to_lowercase()
}

fn contains_ignoring_case(value: &str, needle: &str) -> bool {
    value.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl RestaurantRepository for InMemoryCatalogue {
    async fn find_all(&self) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        Ok(self.restaurants.clone())
    }

    async fn find_by_ids(
        &self,
        ids: &[RestaurantId],
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        Ok(self.restaurants_where(|restaurant| ids.contains(restaurant.id())))
    }

    async fn find_by_name_exact(
        &self,
        name: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        Ok(self.restaurants_where(|restaurant| equals_ignoring_case(restaurant.name(), name)))
    }

    async fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        Ok(self.restaurants_where(|restaurant| {
            contains_ignoring_case(restaurant.name(), fragment)
        }))
    }

    async fn find_by_attribute(
        &self,
        attribute: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        Ok(self.restaurants_where(|restaurant| {
            restaurant
                .attributes()
                .iter()
                .any(|tag| equals_ignoring_case(tag, attribute))
        }))
    }
}

#[async_trait]
impl MenuRepository for InMemoryCatalogue {
    async fn find_by_restaurant_id(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Option<Menu>, MenuRepositoryError> {
        Ok(self
            .menus
            .iter()
            .find(|menu| &menu.restaurant_id == restaurant_id)
            .cloned())
    }

    async fn find_by_item_name_exact(&self, name: &str) -> Result<Vec<Menu>, MenuRepositoryError> {
        Ok(self.menus_with_item(|item| equals_ignoring_case(&item.name, name)))
    }

    async fn find_by_item_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Menu>, MenuRepositoryError> {
        Ok(self.menus_with_item(|item| contains_ignoring_case(&item.name, fragment)))
    }

    async fn find_by_item_attribute_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Menu>, MenuRepositoryError> {
        Ok(self.menus_with_item(|item| {
            item.attributes
                .iter()
                .any(|tag| contains_ignoring_case(tag, fragment))
        }))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::test_support::{RestaurantBuilder, menu_for};

    #[fixture]
    fn catalogue() -> InMemoryCatalogue {
        let udupi = RestaurantBuilder::new("1", "Udupi Grand")
            .attributes(&["South Indian", "Vegetarian"])
            .build();
        let punjab = RestaurantBuilder::new("2", "Punjab Grill")
            .attributes(&["North Indian"])
            .build();
        let grand = RestaurantBuilder::new("3", "The Grand Thali").build();
        let menus = vec![
            menu_for(&udupi, &[("Masala Dosa", &["veg", "crispy"])]),
            menu_for(&punjab, &[("Paneer Tikka", &["veg", "tandoori"])]),
        ];
        InMemoryCatalogue::new(vec![udupi, punjab, grand], menus)
    }

    fn ids(found: &[Restaurant]) -> Vec<&str> {
        found.iter().map(|r| r.id().as_str()).collect()
    }

    fn menu_ids(found: &[Menu]) -> Vec<&str> {
        found.iter().map(|m| m.restaurant_id.as_str()).collect()
    }

    #[rstest]
    #[tokio::test]
    async fn name_lookups_ignore_case(catalogue: InMemoryCatalogue) {
        let exact = catalogue.find_by_name_exact("udupi grand").await.expect("lookup");
        assert_eq!(ids(&exact), ["1"]);

        let partial = catalogue.find_by_name_containing("GRAND").await.expect("lookup");
        assert_eq!(ids(&partial), ["1", "3"]);
    }

    #[rstest]
    #[case("south indian", vec!["1"])]
    #[case("Indian", vec![])]
    #[tokio::test]
    async fn attribute_lookup_is_membership(
        catalogue: InMemoryCatalogue,
        #[case] attribute: &str,
        #[case] expected: Vec<&str>,
    ) {
        let found = catalogue.find_by_attribute(attribute).await.expect("lookup");
        assert_eq!(ids(&found), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn item_lookups_return_owning_menus(catalogue: InMemoryCatalogue) {
        let exact = catalogue
            .find_by_item_name_exact("paneer tikka")
            .await
            .expect("lookup");
        assert_eq!(menu_ids(&exact), ["2"]);

        let partial = catalogue
            .find_by_item_name_containing("tikka")
            .await
            .expect("lookup");
        assert_eq!(menu_ids(&partial), ["2"]);

        let tagged = catalogue
            .find_by_item_attribute_containing("VE")
            .await
            .expect("lookup");
        assert_eq!(menu_ids(&tagged), ["1", "2"]);
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_ids_keeps_storage_order_and_skips_unknown(catalogue: InMemoryCatalogue) {
        let wanted = [
            RestaurantId::new("3").expect("id"),
            RestaurantId::new("missing").expect("id"),
            RestaurantId::new("1").expect("id"),
        ];
        let found = catalogue.find_by_ids(&wanted).await.expect("lookup");
        assert_eq!(ids(&found), ["1", "3"]);
    }

    #[rstest]
    #[tokio::test]
    async fn menu_lookup_by_restaurant(catalogue: InMemoryCatalogue) {
        let known = RestaurantId::new("1").expect("id");
        let unknown = RestaurantId::new("3").expect("id");
        assert!(catalogue.find_by_restaurant_id(&known).await.expect("lookup").is_some());
        assert!(catalogue.find_by_restaurant_id(&unknown).await.expect("lookup").is_none());
    }
}
