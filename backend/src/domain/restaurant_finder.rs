//! Proximity browse with a cache-first read path.
//!
//! On a miss the finder scans the full catalogue, keeps restaurants inside
//! the cache radius and stores that pool under the geohash cell. Both paths
//! then apply the exact distance filter for the requested radius and the
//! opening-hours filter, so a pool written at one time of day never leaks
//! out-of-radius restaurants at another.

use std::sync::Arc;

use chrono::NaiveTime;
use thiserror::Error;
use tracing::{debug, warn};

use super::ports::{RestaurantRepository, RestaurantRepositoryError};
use super::{GeoCache, GeoCacheError, GeoPoint, Restaurant};

/// Failures raised by [`RestaurantFinder::find_nearby`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinderError {
    #[error(transparent)]
    Repository(#[from] RestaurantRepositoryError),
    #[error(transparent)]
    Cache(#[from] GeoCacheError),
}

/// Cache-first proximity query over the restaurant catalogue.
#[derive(Clone)]
pub struct RestaurantFinder {
    restaurants: Arc<dyn RestaurantRepository>,
    cache: GeoCache,
    cache_radius_km: f64,
}

impl RestaurantFinder {
    /// Build a finder whose cached pools cover `cache_radius_km`.
    ///
    /// Requests for a wider radius than the cached pools bypass the cache.
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        cache: GeoCache,
        cache_radius_km: f64,
    ) -> Self {
        Self {
            restaurants,
            cache,
            cache_radius_km,
        }
    }

    pub fn cache(&self) -> &GeoCache {
        &self.cache
    }

    /// Restaurants open at `now` and strictly closer than `radius_km` to
    /// `origin`, in storage order (miss) or snapshot order (hit).
    pub async fn find_nearby(
        &self,
        origin: &GeoPoint,
        now: NaiveTime,
        radius_km: f64,
    ) -> Result<Vec<Restaurant>, FinderError> {
        let pool = self.candidate_pool(origin, radius_km).await?;
        Ok(pool
            .into_iter()
            .filter(|restaurant| restaurant.is_open_close_by(origin, now, radius_km))
            .collect())
    }

    async fn candidate_pool(
        &self,
        origin: &GeoPoint,
        radius_km: f64,
    ) -> Result<Vec<Restaurant>, FinderError> {
        if radius_km > self.cache_radius_km {
            debug!(radius_km, cache_radius_km = self.cache_radius_km, "radius exceeds cached pools");
            return self.scan(origin, radius_km).await;
        }

        if let Some(cached) = self.cache.get(origin).await? {
            return Ok(cached);
        }

        let pool = self.scan(origin, self.cache_radius_km).await?;
        if let Err(error) = self.cache.put(origin, &pool).await {
            warn!(%error, "failed to populate geo cache; continuing uncached");
        }
        Ok(pool)
    }

    async fn scan(&self, origin: &GeoPoint, radius_km: f64) -> Result<Vec<Restaurant>, FinderError> {
        let all = self.restaurants.find_all().await?;
        Ok(all
            .into_iter()
            .filter(|restaurant| restaurant.is_within_km(origin, radius_km))
            .collect())
    }
}

impl std::fmt::Debug for RestaurantFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantFinder")
            .field("cache", &self.cache)
            .field("cache_radius_km", &self.cache_radius_km)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "restaurant_finder_tests.rs"]
mod tests;
