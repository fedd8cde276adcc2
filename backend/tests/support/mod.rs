//! Shared helpers for integration tests.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveTime;
use nearby_eats::domain::ports::{MenuRepository, RestaurantRepository};
use nearby_eats::domain::{
    GeoCache, RestaurantQueryPorts, RestaurantQueryService, SearchCriteria, ServingRadiusPolicy,
};
use nearby_eats::outbound::catalogue::{InMemoryCatalogue, load_catalogue};

/// Centre of the fixture catalogue.
pub const CENTRE: (f64, f64) = (12.9716, 77.5946);

/// Simulated storage round-trip used by latency tests.
pub const ROUND_TRIP: Duration = Duration::from_millis(100);

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("catalogue.json")
}

pub fn fixture_catalogue() -> InMemoryCatalogue {
    load_catalogue(&fixture_path()).expect("fixture catalogue loads")
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time of day")
}

pub fn criteria(query: &str, at: NaiveTime) -> SearchCriteria {
    SearchCriteria::new(CENTRE.0, CENTRE.1, query, at).expect("valid centre")
}

/// Service over `repository` for both restaurants and menus.
pub fn service_over<R>(repository: R, cache: GeoCache, workers: usize) -> RestaurantQueryService
where
    R: RestaurantRepository + MenuRepository + 'static,
{
    let repository = Arc::new(repository);
    RestaurantQueryService::new(
        RestaurantQueryPorts {
            restaurants: repository.clone(),
            menus: repository,
            cache,
        },
        ServingRadiusPolicy::default(),
        workers,
    )
}

pub fn ids(found: &[nearby_eats::domain::Restaurant]) -> Vec<String> {
    found.iter().map(|r| r.id().to_string()).collect()
}
