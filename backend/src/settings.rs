//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `NEARBY_EATS_*` environment variables and
//! configuration files, in that order of precedence.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{
    DEFAULT_CACHE_TTL, DEFAULT_NORMAL_RADIUS_KM, DEFAULT_PEAK_RADIUS_KM, DEFAULT_SEARCH_WORKERS,
    ServingRadiusPolicy,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

fn default_catalogue_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("catalogue.json")
}

/// Runtime settings for the restaurant discovery service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NEARBY_EATS")]
pub struct ServiceSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// JSON seed holding restaurants and menus.
    pub catalogue_path: Option<PathBuf>,
    /// Redis URL for the geo cache. The cache is disabled when absent.
    pub redis_url: Option<String>,
    /// Lifetime of cached geohash snapshots, in seconds.
    pub cache_ttl_seconds: Option<u64>,
    /// Concurrent strategy runs shared by all searches.
    pub search_workers: Option<usize>,
    pub peak_radius_km: Option<f64>,
    pub normal_radius_km: Option<f64>,
    /// Serve text queries with the sequential search.
    #[ortho_config(default = false)]
    pub sequential_search: bool,
}

impl ServiceSettings {
    /// Return the configured bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns the parse error when the configured address is malformed.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    pub fn catalogue_path(&self) -> PathBuf {
        self.catalogue_path
            .clone()
            .unwrap_or_else(default_catalogue_path)
    }

    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl_seconds
            .map_or(DEFAULT_CACHE_TTL, Duration::from_secs)
    }

    pub fn search_workers(&self) -> usize {
        self.search_workers.unwrap_or(DEFAULT_SEARCH_WORKERS)
    }

    /// Serving-radius policy built from the configured radii.
    pub fn radius_policy(&self) -> ServingRadiusPolicy {
        ServingRadiusPolicy::new(
            self.peak_radius_km.unwrap_or(DEFAULT_PEAK_RADIUS_KM),
            self.normal_radius_km.unwrap_or(DEFAULT_NORMAL_RADIUS_KM),
        )
    }
}
