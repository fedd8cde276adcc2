//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, GeoPoint, RestaurantId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidNumber,
    OutOfRange,
    InvalidIdentifier,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidNumber => "invalid_number",
            ErrorCode::OutOfRange => "out_of_range",
            ErrorCode::InvalidIdentifier => "invalid_identifier",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const LATITUDE: FieldName = FieldName::new("latitude");
pub(crate) const LONGITUDE: FieldName = FieldName::new("longitude");
pub(crate) const RESTAURANT_ID: FieldName = FieldName::new("restaurantId");

fn field_error(field: FieldName, code: ErrorCode, message: String, value: Option<&str>) -> Error {
    let details = match value {
        Some(value) => json!({ "field": field.as_str(), "value": value, "code": code.as_str() }),
        None => json!({ "field": field.as_str(), "code": code.as_str() }),
    };
    Error::invalid_request(message).with_details(details)
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {name}"),
        None,
    )
}

fn require(value: Option<&str>, field: FieldName) -> Result<&str, Error> {
    match value.map(str::trim) {
        Some(raw) if !raw.is_empty() => Ok(raw),
        _ => Err(missing_field_error(field)),
    }
}

fn parse_degrees(value: Option<&str>, field: FieldName, limit: f64) -> Result<f64, Error> {
    let raw = require(value, field)?;
    let name = field.as_str();
    let degrees: f64 = raw.parse().map_err(|_| {
        field_error(
            field,
            ErrorCode::InvalidNumber,
            format!("{name} must be a decimal number"),
            Some(raw),
        )
    })?;
    if !degrees.is_finite() || degrees.abs() > limit {
        return Err(field_error(
            field,
            ErrorCode::OutOfRange,
            format!("{name} must be within [-{limit}, {limit}]"),
            Some(raw),
        ));
    }
    Ok(degrees)
}

/// Parse and range-check a coordinate pair from raw query values.
pub(crate) fn parse_location(
    latitude: Option<&str>,
    longitude: Option<&str>,
) -> Result<GeoPoint, Error> {
    let latitude = parse_degrees(latitude, LATITUDE, 90.0)?;
    let longitude = parse_degrees(longitude, LONGITUDE, 180.0)?;
    GeoPoint::new(latitude, longitude).map_err(|err| Error::invalid_request(err.to_string()))
}

pub(crate) fn parse_restaurant_id(value: Option<&str>) -> Result<RestaurantId, Error> {
    let raw = require(value, RESTAURANT_ID)?;
    RestaurantId::new(raw).map_err(|err| {
        field_error(
            RESTAURANT_ID,
            ErrorCode::InvalidIdentifier,
            err.to_string(),
            Some(raw),
        )
    })
}
