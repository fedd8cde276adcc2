//! Test utilities for the nearby-eats crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for tests or when the `test-support` feature is enabled.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{EARTH_RADIUS_KM, GeoPoint, Menu, MenuItem, Restaurant, RestaurantDraft};

/// Time of day helper for tests.
pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time of day")
}

/// Point `km` kilometres due north of `origin`.
///
/// Distances along a meridian are exact under the haversine formula, which
/// makes radius boundaries easy to place.
pub fn offset_north_km(origin: &GeoPoint, km: f64) -> GeoPoint {
    let delta = (km / EARTH_RADIUS_KM).to_degrees();
    GeoPoint::new(origin.latitude() + delta, origin.longitude()).expect("offset stays in range")
}

/// Central Bengaluru, the origin used across the test suites.
pub fn origin() -> GeoPoint {
    GeoPoint::new(12.9716, 77.5946).expect("valid origin")
}

/// Fluent builder for [`Restaurant`] fixtures.
///
/// Defaults to a restaurant at [`origin`] open 06:00–23:00 with no tags.
#[derive(Debug, Clone)]
pub struct RestaurantBuilder {
    draft: RestaurantDraft,
}

impl RestaurantBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        let point = origin();
        Self {
            draft: RestaurantDraft {
                restaurant_id: id.to_owned(),
                name: name.to_owned(),
                city: "Bengaluru".to_owned(),
                image_url: format!("https://images.example/{id}.jpg"),
                latitude: point.latitude(),
                longitude: point.longitude(),
                opens_at: at(6, 0),
                closes_at: at(23, 0),
                attributes: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn located(mut self, point: GeoPoint) -> Self {
        self.draft.latitude = point.latitude();
        self.draft.longitude = point.longitude();
        self
    }

    /// Place the restaurant `km` kilometres north of [`origin`].
    #[must_use]
    pub fn km_north(self, km: f64) -> Self {
        self.located(offset_north_km(&origin(), km))
    }

    #[must_use]
    pub fn hours(mut self, opens_at: NaiveTime, closes_at: NaiveTime) -> Self {
        self.draft.opens_at = opens_at;
        self.draft.closes_at = closes_at;
        self
    }

    #[must_use]
    pub fn attributes(mut self, attributes: &[&str]) -> Self {
        self.draft.attributes = attributes.iter().map(|tag| (*tag).to_owned()).collect();
        self
    }

    pub fn build(self) -> Restaurant {
        Restaurant::new(self.draft).expect("fixture restaurant is valid")
    }
}

/// Menu for `restaurant` with one item per `(name, attributes)` pair.
pub fn menu_for(restaurant: &Restaurant, items: &[(&str, &[&str])]) -> Menu {
    Menu {
        restaurant_id: restaurant.id().clone(),
        items: items
            .iter()
            .enumerate()
            .map(|(index, (name, attributes))| MenuItem {
                item_id: format!("{}-{index}", restaurant.id()),
                name: (*name).to_owned(),
                image_url: String::new(),
                price: 100.0,
                attributes: attributes.iter().map(|tag| (*tag).to_owned()).collect(),
            })
            .collect(),
    }
}

/// Clock frozen at a fixed local wall time.
#[derive(Debug, Clone, Copy)]
pub struct FixtureClock {
    local: DateTime<Local>,
}

impl FixtureClock {
    /// Clock reading `time` on an arbitrary fixed date.
    pub fn at(time: NaiveTime) -> Self {
        let naive = NaiveDate::from_ymd_opt(2024, 6, 3)
            .expect("valid date")
            .and_time(time);
        let local = Local
            .from_local_datetime(&naive)
            .earliest()
            .expect("fixture time exists in the local zone");
        Self { local }
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.local
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local.with_timezone(&Utc)
    }
}
