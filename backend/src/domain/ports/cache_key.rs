//! Geohash cache key shared by geo cache adapters.
use thiserror::Error;

use crate::domain::GeoPoint;

/// Number of geohash characters per cache bucket (roughly 153 m x 153 m).
pub const GEOHASH_PRECISION: usize = 7;

/// Cache key naming the geohash cell a coordinate falls in.
///
/// Any two points in the same cell map to the same key.
///
/// # Examples
/// ```
/// use nearby_eats::domain::GeoPoint;
/// use nearby_eats::domain::ports::GeoCacheKey;
///
/// let point = GeoPoint::new(57.64911, 10.40744).expect("valid point");
/// let key = GeoCacheKey::for_point(&point).expect("encodable");
/// assert_eq!(key.as_str(), "u4pruyd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeoCacheKey(String);

impl GeoCacheKey {
    /// Encode `point` into its precision-7 geohash cell.
    pub fn for_point(point: &GeoPoint) -> Result<Self, GeoCacheKeyError> {
        let coord = geohash::Coord {
            x: point.longitude(),
            y: point.latitude(),
        };
        geohash::encode(coord, GEOHASH_PRECISION)
            .map(Self)
            .map_err(|err| GeoCacheKeyError::Encoding {
                message: err.to_string(),
            })
    }

    /// Wrap an existing geohash string.
    pub fn new(value: impl Into<String>) -> Result<Self, GeoCacheKeyError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(GeoCacheKeyError::Empty);
        }
        if raw.trim() != raw {
            return Err(GeoCacheKeyError::ContainsWhitespace);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for GeoCacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for GeoCacheKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Errors returned when building a [`GeoCacheKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoCacheKeyError {
    #[error("geo cache key must not be empty")]
    Empty,
    #[error("geo cache key must not contain surrounding whitespace")]
    ContainsWhitespace,
    #[error("geohash encoding failed: {message}")]
    Encoding { message: String },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).expect("valid point")
    }

    #[rstest]
    fn keys_have_seven_characters() {
        let key = GeoCacheKey::for_point(&point(12.9716, 77.5946)).expect("encodable");
        assert_eq!(key.as_str().len(), GEOHASH_PRECISION);
    }

    #[rstest]
    fn nearby_points_share_a_cell() {
        let a = GeoCacheKey::for_point(&point(57.649_11, 10.407_44)).expect("encodable");
        let b = GeoCacheKey::for_point(&point(57.649_12, 10.407_45)).expect("encodable");
        assert_eq!(a, b);
    }

    #[rstest]
    fn distant_points_differ() {
        let a = GeoCacheKey::for_point(&point(12.9716, 77.5946)).expect("encodable");
        let b = GeoCacheKey::for_point(&point(12.9816, 77.5946)).expect("encodable");
        assert_ne!(a, b);
    }

    #[rstest]
    #[case("", GeoCacheKeyError::Empty)]
    #[case(" tdr1", GeoCacheKeyError::ContainsWhitespace)]
    fn rejects_malformed_raw_keys(#[case] raw: &str, #[case] expected: GeoCacheKeyError) {
        assert_eq!(GeoCacheKey::new(raw), Err(expected));
    }
}
