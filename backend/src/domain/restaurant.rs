//! Restaurant and menu records.
//!
//! Records are owned by the storage engine; the domain only reads them.
//! `Restaurant` validates through [`RestaurantDraft`] on every construction
//! path, including deserialisation of cached snapshots, so a snapshot with a
//! blank identifier or an impossible coordinate fails loudly.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geo::{CoordinateValidationError, GeoPoint};
use super::opening_hours::is_open;

/// Validation failures for restaurant records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RestaurantValidationError {
    #[error("restaurant id must not be empty")]
    EmptyId,
    #[error("restaurant id must not contain surrounding whitespace")]
    PaddedId,
    #[error(transparent)]
    Coordinates(#[from] CoordinateValidationError),
}

/// Unique, immutable restaurant identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RestaurantId(String);

impl RestaurantId {
    /// Validate a raw identifier.
    ///
    /// # Examples
    /// ```
    /// use nearby_eats::domain::RestaurantId;
    ///
    /// assert_eq!(RestaurantId::new("11").expect("valid").as_str(), "11");
    /// assert!(RestaurantId::new(" 11").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, RestaurantValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(RestaurantValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(RestaurantValidationError::PaddedId);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for RestaurantId {
    type Error = RestaurantValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RestaurantId> for String {
    fn from(value: RestaurantId) -> Self {
        value.0
    }
}

/// Unvalidated restaurant fields, also the serialised shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDraft {
    pub restaurant_id: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub opens_at: NaiveTime,
    pub closes_at: NaiveTime,
    #[serde(default)]
    pub attributes: Vec<String>,
}

/// A restaurant as stored in the catalogue.
///
/// Attribute tags are cuisine labels; duplicates may exist in storage but
/// matching treats them as a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RestaurantDraft", into = "RestaurantDraft")]
pub struct Restaurant {
    id: RestaurantId,
    name: String,
    city: String,
    image_url: String,
    location: GeoPoint,
    opens_at: NaiveTime,
    closes_at: NaiveTime,
    attributes: Vec<String>,
}

impl Restaurant {
    /// Validate a draft into a record.
    pub fn new(draft: RestaurantDraft) -> Result<Self, RestaurantValidationError> {
        let RestaurantDraft {
            restaurant_id,
            name,
            city,
            image_url,
            latitude,
            longitude,
            opens_at,
            closes_at,
            attributes,
        } = draft;
        Ok(Self {
            id: RestaurantId::new(restaurant_id)?,
            name,
            city,
            image_url,
            location: GeoPoint::new(latitude, longitude)?,
            opens_at,
            closes_at,
            attributes,
        })
    }

    pub fn id(&self) -> &RestaurantId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    pub fn opens_at(&self) -> NaiveTime {
        self.opens_at
    }

    pub fn closes_at(&self) -> NaiveTime {
        self.closes_at
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Whether the restaurant is open at `now` (exclusive bounds).
    pub fn is_open_at(&self, now: NaiveTime) -> bool {
        is_open(now, self.opens_at, self.closes_at)
    }

    /// Whether the restaurant is strictly closer than `radius_km` to `origin`.
    pub fn is_within_km(&self, origin: &GeoPoint, radius_km: f64) -> bool {
        origin.is_within_km(&self.location, radius_km)
    }

    /// Open at `now` and inside the serving radius around `origin`.
    pub fn is_open_close_by(&self, origin: &GeoPoint, now: NaiveTime, radius_km: f64) -> bool {
        self.is_open_at(now) && self.is_within_km(origin, radius_km)
    }
}

impl TryFrom<RestaurantDraft> for Restaurant {
    type Error = RestaurantValidationError;

    fn try_from(draft: RestaurantDraft) -> Result<Self, Self::Error> {
        Self::new(draft)
    }
}

impl From<Restaurant> for RestaurantDraft {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            restaurant_id: restaurant.id.into(),
            name: restaurant.name,
            city: restaurant.city,
            image_url: restaurant.image_url,
            latitude: restaurant.location.latitude(),
            longitude: restaurant.location.longitude(),
            opens_at: restaurant.opens_at,
            closes_at: restaurant.closes_at,
            attributes: restaurant.attributes,
        }
    }
}

/// A single dish on a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub item_id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub attributes: Vec<String>,
}

/// The menu of one restaurant. The restaurant link is by value only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub restaurant_id: RestaurantId,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}
