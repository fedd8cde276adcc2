//! Tests for the cache-first proximity finder.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use mockall::predicate::always;
use rstest::rstest;

use super::*;
use crate::domain::ports::{CacheStoreError, MockCacheStore, MockRestaurantRepository};
use crate::test_support::{RestaurantBuilder, at, origin};

const CACHE_RADIUS_KM: f64 = 5.0;

fn finder(repo: MockRestaurantRepository, cache: GeoCache) -> RestaurantFinder {
    RestaurantFinder::new(Arc::new(repo), cache, CACHE_RADIUS_KM)
}

fn repo_returning(records: Vec<Restaurant>) -> MockRestaurantRepository {
    let mut repo = MockRestaurantRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(move || Ok(records));
    repo
}

fn ids(found: &[Restaurant]) -> Vec<&str> {
    found.iter().map(|r| r.id().as_str()).collect()
}

#[rstest]
#[case::peak(at(9, 0), 3.0)]
#[case::off_peak(at(11, 0), 5.0)]
#[tokio::test]
async fn restaurant_at_2_9_km_is_included(#[case] now: NaiveTime, #[case] radius_km: f64) {
    let near = RestaurantBuilder::new("near", "Near").km_north(2.9).build();
    let found = finder(repo_returning(vec![near]), GeoCache::disabled())
        .find_nearby(&origin(), now, radius_km)
        .await
        .expect("finder succeeds");
    assert_eq!(ids(&found), ["near"]);
}

#[rstest]
#[tokio::test]
async fn excludes_closed_and_out_of_radius_restaurants() {
    let records = vec![
        RestaurantBuilder::new("open", "Open").km_north(1.0).build(),
        RestaurantBuilder::new("far", "Far").km_north(4.0).build(),
        RestaurantBuilder::new("closing", "Closing")
            .hours(at(10, 0), at(21, 0))
            .build(),
        RestaurantBuilder::new("opening", "Opening")
            .hours(at(21, 0), at(23, 0))
            .build(),
    ];

    let found = finder(repo_returning(records), GeoCache::disabled())
        .find_nearby(&origin(), at(21, 0), 3.0)
        .await
        .expect("finder succeeds");

    assert_eq!(ids(&found), ["open"]);
}

#[rstest]
#[tokio::test]
async fn preserves_storage_order() {
    let records = vec![
        RestaurantBuilder::new("c", "C").km_north(2.0).build(),
        RestaurantBuilder::new("a", "A").build(),
        RestaurantBuilder::new("b", "B").km_north(1.0).build(),
    ];

    let found = finder(repo_returning(records), GeoCache::disabled())
        .find_nearby(&origin(), at(12, 0), 5.0)
        .await
        .expect("finder succeeds");

    assert_eq!(ids(&found), ["c", "a", "b"]);
}

#[rstest]
#[tokio::test]
async fn miss_writes_the_cache_radius_pool() {
    let records = vec![
        RestaurantBuilder::new("near", "Near").km_north(1.0).build(),
        RestaurantBuilder::new("mid", "Mid").km_north(4.0).build(),
        RestaurantBuilder::new("far", "Far").km_north(8.0).build(),
    ];
    let written = Arc::new(Mutex::new(None::<String>));
    let sink = Arc::clone(&written);

    let mut store = MockCacheStore::new();
    store.expect_get().times(1).return_once(|_| Ok(None));
    store
        .expect_set()
        .times(1)
        .returning(move |_, value| {
            *sink.lock().expect("sink lock") = Some(value.to_owned());
            Ok(())
        });
    store
        .expect_expire()
        .with(always(), always())
        .times(1)
        .returning(|_, _| Ok(()));

    let cache = GeoCache::new(Arc::new(store), Duration::from_secs(300));
    let found = finder(repo_returning(records), cache)
        .find_nearby(&origin(), at(9, 0), 3.0)
        .await
        .expect("finder succeeds");
    assert_eq!(ids(&found), ["near"]);

    let payload = written.lock().expect("sink lock").clone().expect("pool written");
    let pool: Vec<Restaurant> = serde_json::from_str(&payload).expect("pool decodes");
    assert_eq!(ids(&pool), ["near", "mid"]);
}

#[rstest]
#[tokio::test]
async fn hit_skips_the_scan_and_refilters_the_pool() {
    let pool = vec![
        RestaurantBuilder::new("near", "Near").km_north(1.0).build(),
        RestaurantBuilder::new("mid", "Mid").km_north(4.0).build(),
        RestaurantBuilder::new("closed", "Closed")
            .hours(at(18, 0), at(23, 0))
            .build(),
    ];
    let payload = serde_json::to_string(&pool).expect("encodes");

    let mut repo = MockRestaurantRepository::new();
    repo.expect_find_all().times(0);
    let mut store = MockCacheStore::new();
    store
        .expect_get()
        .times(1)
        .return_once(move |_| Ok(Some(payload)));

    let cache = GeoCache::new(Arc::new(store), Duration::from_secs(300));
    let found = finder(repo, cache)
        .find_nearby(&origin(), at(9, 0), 3.0)
        .await
        .expect("finder succeeds");

    assert_eq!(ids(&found), ["near"]);
}

#[rstest]
#[tokio::test]
async fn cache_write_failure_still_returns_results() {
    let records = vec![RestaurantBuilder::new("near", "Near").build()];
    let mut store = MockCacheStore::new();
    store.expect_get().times(1).return_once(|_| Ok(None));
    store
        .expect_set()
        .times(1)
        .returning(|_, _| Err(CacheStoreError::backend("connection reset")));

    let cache = GeoCache::new(Arc::new(store), Duration::from_secs(300));
    let found = finder(repo_returning(records), cache)
        .find_nearby(&origin(), at(12, 0), 5.0)
        .await
        .expect("finder degrades to uncached");

    assert_eq!(ids(&found), ["near"]);
}

#[rstest]
#[tokio::test]
async fn corrupt_snapshot_fails_the_call() {
    let mut repo = MockRestaurantRepository::new();
    repo.expect_find_all().times(0);
    let mut store = MockCacheStore::new();
    store
        .expect_get()
        .times(1)
        .return_once(|_| Ok(Some("[{]".to_owned())));

    let cache = GeoCache::new(Arc::new(store), Duration::from_secs(300));
    let err = finder(repo, cache)
        .find_nearby(&origin(), at(12, 0), 5.0)
        .await
        .expect_err("corrupt snapshot");

    assert!(matches!(err, FinderError::Cache(GeoCacheError::CorruptSnapshot { .. })));
}

#[rstest]
#[tokio::test]
async fn radius_wider_than_cached_pools_bypasses_the_cache() {
    let records = vec![RestaurantBuilder::new("far", "Far").km_north(7.0).build()];
    let mut store = MockCacheStore::new();
    store.expect_get().times(0);
    store.expect_set().times(0);

    let cache = GeoCache::new(Arc::new(store), Duration::from_secs(300));
    let found = finder(repo_returning(records), cache)
        .find_nearby(&origin(), at(12, 0), 10.0)
        .await
        .expect("finder succeeds");

    assert_eq!(ids(&found), ["far"]);
}

#[rstest]
#[tokio::test]
async fn repository_failures_propagate() {
    let mut repo = MockRestaurantRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(|| Err(RestaurantRepositoryError::connection("refused")));

    let err = finder(repo, GeoCache::disabled())
        .find_nearby(&origin(), at(12, 0), 5.0)
        .await
        .expect_err("repository down");

    assert!(matches!(err, FinderError::Repository(_)));
}
