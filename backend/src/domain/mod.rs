//! Domain primitives, ports and services for restaurant discovery.
//!
//! Purpose: keep proximity, opening-hours and search semantics free of
//! transport and storage concerns. Adapters reach the domain only through
//! [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - GeoPoint / distance_km: validated coordinates and haversine distance.
//! - Restaurant, Menu: read-only catalogue records.
//! - GeoCache, RestaurantFinder, RestaurantSearch: the proximity and search
//!   pipeline.
//! - RestaurantQueryService: implementation of the driving port.

pub mod error;
pub mod geo;
pub mod geo_cache;
pub mod opening_hours;
pub mod ports;
pub mod restaurant;
pub mod restaurant_finder;
pub mod restaurant_service;
pub mod search;
pub mod search_criteria;
pub mod serving_radius;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::geo::{CoordinateValidationError, EARTH_RADIUS_KM, GeoPoint, distance_km};
pub use self::geo_cache::{DEFAULT_CACHE_TTL, GeoCache, GeoCacheError};
pub use self::opening_hours::is_open;
pub use self::restaurant::{
    Menu, MenuItem, Restaurant, RestaurantDraft, RestaurantId, RestaurantValidationError,
};
pub use self::restaurant_finder::{FinderError, RestaurantFinder};
pub use self::restaurant_service::{RestaurantQueryPorts, RestaurantQueryService};
pub use self::search::{
    DEFAULT_SEARCH_WORKERS, RestaurantSearch, SearchError, SearchPorts, SearchScope, SearchStrategy,
};
pub use self::search_criteria::SearchCriteria;
pub use self::serving_radius::{
    DEFAULT_NORMAL_RADIUS_KM, DEFAULT_PEAK_RADIUS_KM, ServingRadiusPolicy,
};
pub use self::trace_id::TraceId;
