//! Builders wiring outbound adapters into HTTP state.

use std::io;
use std::sync::Arc;

use mockable::DefaultClock;
use tracing::{info, warn};

use nearby_eats::domain::{GeoCache, RestaurantQueryPorts, RestaurantQueryService};
use nearby_eats::inbound::http::state::{HttpState, SearchMode};
use nearby_eats::outbound::cache::{CachePoolConfig, RedisCacheStore};
use nearby_eats::outbound::catalogue::load_catalogue;
use nearby_eats::settings::ServiceSettings;

/// Connect the geo cache, or run uncached when Redis is absent or unreachable.
async fn build_geo_cache(settings: &ServiceSettings) -> GeoCache {
    let Some(url) = settings.redis_url() else {
        info!("no redis url configured; geo cache disabled");
        return GeoCache::disabled();
    };
    match RedisCacheStore::connect(&CachePoolConfig::new(url)).await {
        Ok(store) => GeoCache::new(Arc::new(store), settings.cache_ttl()),
        Err(error) => {
            warn!(%error, "redis unavailable; geo cache disabled");
            GeoCache::disabled()
        }
    }
}

/// Load the catalogue and assemble the HTTP dependency bundle.
///
/// # Errors
/// Returns [`io::Error`] when the catalogue seed cannot be read or parsed.
pub async fn build_http_state(settings: &ServiceSettings) -> io::Result<HttpState> {
    let catalogue_path = settings.catalogue_path();
    let catalogue = Arc::new(load_catalogue(&catalogue_path).map_err(io::Error::other)?);
    let cache = build_geo_cache(settings).await;
    let policy = settings.radius_policy();
    info!(
        catalogue = %catalogue_path.display(),
        restaurants = catalogue.restaurant_count(),
        menus = catalogue.menu_count(),
        cache_enabled = cache.is_enabled(),
        peak_radius_km = policy.peak_radius_km(),
        normal_radius_km = policy.normal_radius_km(),
        search_workers = settings.search_workers(),
        "restaurant catalogue loaded"
    );

    let service = RestaurantQueryService::new(
        RestaurantQueryPorts {
            restaurants: catalogue.clone(),
            menus: catalogue,
            cache,
        },
        policy,
        settings.search_workers(),
    );
    Ok(HttpState::new(
        Arc::new(service),
        Arc::new(DefaultClock),
        SearchMode::from_sequential_flag(settings.sequential_search),
    ))
}
