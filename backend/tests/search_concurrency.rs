//! Sequential versus concurrent search over the fixture catalogue.

mod support;

use std::collections::HashSet;

use async_trait::async_trait;
use nearby_eats::domain::ports::{
    MenuRepository, MenuRepositoryError, RestaurantQuery, RestaurantRepository,
    RestaurantRepositoryError,
};
use nearby_eats::domain::{GeoCache, Menu, Restaurant, RestaurantId};
use nearby_eats::outbound::catalogue::{InMemoryCatalogue, SimulatedLatency};
use rstest::rstest;
use support::{ROUND_TRIP, criteria, fixture_catalogue, ids, service_over, time};
use tokio::time::Instant;

#[rstest]
#[case::lunch(time(12, 30), &["12", "13", "11"])]
#[case::evening(time(18, 0), &["12", "13", "11", "16"])]
#[tokio::test]
async fn both_variants_return_the_same_ordered_matches(
    #[case] at: chrono::NaiveTime,
    #[case] expected: &[&str],
) {
    let service = service_over(fixture_catalogue(), GeoCache::disabled(), 10);
    let criteria = criteria("tikka", at);

    let sequential = service.search(&criteria).await.expect("sequential");
    let concurrent = service.search_concurrent(&criteria).await.expect("concurrent");

    assert_eq!(ids(&sequential), expected);
    assert_eq!(ids(&concurrent), expected);
    let unique: HashSet<_> = ids(&concurrent).into_iter().collect();
    assert_eq!(unique.len(), concurrent.len());
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn concurrent_search_is_at_least_one_and_a_half_times_faster() {
    let slowed = SimulatedLatency::new(fixture_catalogue(), ROUND_TRIP);
    let service = service_over(slowed, GeoCache::disabled(), 10);
    let criteria = criteria("tikka", time(18, 0));

    let started = Instant::now();
    let sequential = service.search(&criteria).await.expect("sequential");
    let sequential_elapsed = started.elapsed();

    let started = Instant::now();
    let concurrent = service.search_concurrent(&criteria).await.expect("concurrent");
    let concurrent_elapsed = started.elapsed();

    assert_eq!(ids(&sequential), ids(&concurrent));
    // Eight dependent round-trips one after another; the longest strategy
    // chain is three.
    assert!(sequential_elapsed >= ROUND_TRIP * 8 && sequential_elapsed < ROUND_TRIP * 9);
    assert!(concurrent_elapsed >= ROUND_TRIP * 3 && concurrent_elapsed < ROUND_TRIP * 4);
    assert!(sequential_elapsed.as_secs_f64() >= 1.5 * concurrent_elapsed.as_secs_f64());
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn a_single_worker_serialises_the_fan_out() {
    let slowed = SimulatedLatency::new(fixture_catalogue(), ROUND_TRIP);
    let service = service_over(slowed, GeoCache::disabled(), 1);
    let criteria = criteria("tikka", time(18, 0));

    let started = Instant::now();
    let found = service.search_concurrent(&criteria).await.expect("concurrent");

    assert_eq!(ids(&found), ["12", "13", "11", "16"]);
    let elapsed = started.elapsed();
    assert!(elapsed >= ROUND_TRIP * 8 && elapsed < ROUND_TRIP * 9);
}

/// Catalogue whose attribute index is offline.
struct BrokenAttributeIndex(InMemoryCatalogue);

#[async_trait]
impl RestaurantRepository for BrokenAttributeIndex {
    async fn find_all(&self) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        self.0.find_all().await
    }

    async fn find_by_ids(
        &self,
        ids: &[RestaurantId],
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        self.0.find_by_ids(ids).await
    }

    async fn find_by_name_exact(
        &self,
        name: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        self.0.find_by_name_exact(name).await
    }

    async fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        self.0.find_by_name_containing(fragment).await
    }

    async fn find_by_attribute(
        &self,
        _attribute: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        Err(RestaurantRepositoryError::query("attribute index offline"))
    }
}

#[async_trait]
impl MenuRepository for BrokenAttributeIndex {
    async fn find_by_restaurant_id(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Option<Menu>, MenuRepositoryError> {
        self.0.find_by_restaurant_id(restaurant_id).await
    }

    async fn find_by_item_name_exact(&self, name: &str) -> Result<Vec<Menu>, MenuRepositoryError> {
        self.0.find_by_item_name_exact(name).await
    }

    async fn find_by_item_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Menu>, MenuRepositoryError> {
        self.0.find_by_item_name_containing(fragment).await
    }

    async fn find_by_item_attribute_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Menu>, MenuRepositoryError> {
        self.0.find_by_item_attribute_containing(fragment).await
    }
}

#[rstest]
#[tokio::test]
async fn failing_strategy_degrades_concurrent_search_only() {
    let service = service_over(
        BrokenAttributeIndex(fixture_catalogue()),
        GeoCache::disabled(),
        10,
    );
    let criteria = criteria("tikka", time(18, 0));

    let err = service.search(&criteria).await.expect_err("sequential fails");
    assert_eq!(err.code(), nearby_eats::domain::ErrorCode::InternalError);

    // Punjab Grill still surfaces through its "Tikka" menu item.
    let found = service.search_concurrent(&criteria).await.expect("degraded");
    assert_eq!(ids(&found), ["12", "13", "11", "16"]);
}

#[rstest]
#[tokio::test]
async fn blank_query_returns_nothing() {
    let service = service_over(fixture_catalogue(), GeoCache::disabled(), 10);
    let criteria = criteria("   ", time(18, 0));

    assert!(service.search(&criteria).await.expect("search").is_empty());
    assert!(
        service
            .search_concurrent(&criteria)
            .await
            .expect("search")
            .is_empty()
    );
}
