//! Decorator adding a fixed delay to every repository call.
//!
//! Stands in for storage round-trips when comparing sequential and
//! concurrent search.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{
    MenuRepository, MenuRepositoryError, RestaurantRepository, RestaurantRepositoryError,
};
use crate::domain::{Menu, Restaurant, RestaurantId};

/// Wraps a repository and sleeps for `delay` before each call.
#[derive(Debug, Clone)]
pub struct SimulatedLatency<C> {
    inner: C,
    delay: Duration,
}

impl<C> SimulatedLatency<C> {
    pub fn new(inner: C, delay: Duration) -> Self {
        Self { inner, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

#[async_trait]
impl<C> RestaurantRepository for SimulatedLatency<C>
where
    C: RestaurantRepository,
{
    async fn find_all(&self) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        self.pause().await;
        self.inner.find_all().await
    }

    async fn find_by_ids(
        &self,
        ids: &[RestaurantId],
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        self.pause().await;
        self.inner.find_by_ids(ids).await
    }

    async fn find_by_name_exact(
        &self,
        name: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        self.pause().await;
        self.inner.find_by_name_exact(name).await
    }

    async fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        self.pause().await;
        self.inner.find_by_name_containing(fragment).await
    }

    async fn find_by_attribute(
        &self,
        attribute: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        self.pause().await;
        self.inner.find_by_attribute(attribute).await
    }
}

#[async_trait]
impl<C> MenuRepository for SimulatedLatency<C>
where
    C: MenuRepository,
{
    async fn find_by_restaurant_id(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Option<Menu>, MenuRepositoryError> {
        self.pause().await;
        self.inner.find_by_restaurant_id(restaurant_id).await
    }

    async fn find_by_item_name_exact(&self, name: &str) -> Result<Vec<Menu>, MenuRepositoryError> {
        self.pause().await;
        self.inner.find_by_item_name_exact(name).await
    }

    async fn find_by_item_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Menu>, MenuRepositoryError> {
        self.pause().await;
        self.inner.find_by_item_name_containing(fragment).await
    }

    async fn find_by_item_attribute_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Menu>, MenuRepositoryError> {
        self.pause().await;
        self.inner.find_by_item_attribute_containing(fragment).await
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tokio::time::Instant;

    use super::*;
    use crate::outbound::catalogue::InMemoryCatalogue;

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn every_call_waits_for_the_delay() {
        let repo = SimulatedLatency::new(InMemoryCatalogue::default(), Duration::from_millis(40));
        let started = Instant::now();

        repo.find_all().await.expect("lookup");
        repo.find_by_item_name_exact("dosa").await.expect("lookup");

        assert_eq!(started.elapsed(), Duration::from_millis(80));
    }
}
