//! Immutable search input shared by proximity browse and text search.

use chrono::NaiveTime;

use super::geo::{CoordinateValidationError, GeoPoint};

/// Where, what and when a caller is searching.
///
/// An empty (or whitespace-only) query means "no text filter".
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    location: GeoPoint,
    query: String,
    at: NaiveTime,
}

impl SearchCriteria {
    /// Build criteria from raw coordinates.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveTime;
    /// use nearby_eats::domain::SearchCriteria;
    ///
    /// let at = NaiveTime::from_hms_opt(12, 0, 0).expect("valid time");
    /// let criteria = SearchCriteria::new(12.97, 77.59, "  tikka ", at).expect("valid");
    /// assert_eq!(criteria.query(), "tikka");
    /// assert!(SearchCriteria::new(100.0, 0.0, "", at).is_err());
    /// ```
    pub fn new(
        latitude: f64,
        longitude: f64,
        query: impl Into<String>,
        at: NaiveTime,
    ) -> Result<Self, CoordinateValidationError> {
        Ok(Self::at_point(GeoPoint::new(latitude, longitude)?, query, at))
    }

    pub fn at_point(location: GeoPoint, query: impl Into<String>, at: NaiveTime) -> Self {
        let query = query.into();
        Self {
            location,
            query: query.trim().to_owned(),
            at,
        }
    }

    pub fn location(&self) -> &GeoPoint {
        &self.location
    }

    /// Trimmed free-text query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn at(&self) -> NaiveTime {
        self.at
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}
