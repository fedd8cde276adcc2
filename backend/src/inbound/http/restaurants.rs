//! Restaurant discovery endpoints.
//!
//! ```text
//! GET /api/v1/restaurants?latitude=12.97&longitude=77.59&searchFor=tikka
//! GET /api/v1/menu?restaurantId=11
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Menu, MenuItem, Restaurant, SearchCriteria};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::{HttpState, SearchMode};
use crate::inbound::http::validation::{parse_location, parse_restaurant_id};

const TIME_FORMAT: &str = "%H:%M:%S";

/// Query parameters for the restaurant listing.
///
/// Coordinates arrive as raw strings so that missing and malformed values
/// produce field-level validation errors.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct RestaurantsQuery {
    /// Latitude of the caller in decimal degrees.
    #[param(example = "12.9716")]
    pub latitude: Option<String>,
    /// Longitude of the caller in decimal degrees.
    #[param(example = "77.5946")]
    pub longitude: Option<String>,
    /// Free-text query; empty or absent browses nearby restaurants.
    #[param(example = "tikka")]
    pub search_for: Option<String>,
}

/// Query parameters for the menu lookup.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct MenuQuery {
    #[param(example = "11")]
    pub restaurant_id: Option<String>,
}

/// Restaurant card returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    #[schema(example = "11")]
    pub restaurant_id: String,
    /// Display name with non-ASCII characters removed.
    #[schema(example = "Udupi Grand")]
    pub name: String,
    pub city: String,
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    #[schema(example = "08:00:00")]
    pub opens_at: String,
    #[schema(example = "23:00:00")]
    pub closes_at: String,
    pub attributes: Vec<String>,
}

fn ascii_only(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        let location = restaurant.location();
        Self {
            restaurant_id: restaurant.id().to_string(),
            name: ascii_only(restaurant.name()),
            city: restaurant.city().to_owned(),
            image_url: restaurant.image_url().to_owned(),
            latitude: location.latitude(),
            longitude: location.longitude(),
            opens_at: restaurant.opens_at().format(TIME_FORMAT).to_string(),
            closes_at: restaurant.closes_at().format(TIME_FORMAT).to_string(),
            attributes: restaurant.attributes().to_vec(),
        }
    }
}

/// Envelope for the restaurant listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantsResponse {
    pub restaurants: Vec<RestaurantResponse>,
}

/// A dish on a menu.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub item_id: String,
    #[schema(example = "Paneer Tikka")]
    pub name: String,
    pub image_url: String,
    #[schema(example = 240.0)]
    pub price: f64,
    pub attributes: Vec<String>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            item_id: item.item_id,
            name: item.name,
            image_url: item.image_url,
            price: item.price,
            attributes: item.attributes,
        }
    }
}

/// Menu of one restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub restaurant_id: String,
    pub items: Vec<MenuItemResponse>,
}

impl From<Menu> for MenuResponse {
    fn from(menu: Menu) -> Self {
        Self {
            restaurant_id: menu.restaurant_id.to_string(),
            items: menu.items.into_iter().map(MenuItemResponse::from).collect(),
        }
    }
}

/// Envelope for the menu lookup.
#[derive(Debug, Serialize, ToSchema)]
pub struct MenuEnvelope {
    pub menu: MenuResponse,
}

/// List open restaurants near the caller, optionally filtered by text.
#[utoipa::path(
    get,
    path = "/api/v1/restaurants",
    params(RestaurantsQuery),
    responses(
        (status = 200, description = "Matching restaurants", body = RestaurantsResponse),
        (status = 400, description = "Invalid coordinates", body = ErrorSchema),
        (status = 503, description = "Catalogue unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "listRestaurants"
)]
#[get("/restaurants")]
pub async fn list_restaurants(
    state: web::Data<HttpState>,
    query: web::Query<RestaurantsQuery>,
) -> ApiResult<web::Json<RestaurantsResponse>> {
    let query = query.into_inner();
    let location = parse_location(query.latitude.as_deref(), query.longitude.as_deref())?;
    let now = state.clock.local().time();
    let criteria = SearchCriteria::at_point(location, query.search_for.unwrap_or_default(), now);

    let found = if !criteria.has_query() {
        state.restaurants.find_nearby(&criteria).await?
    } else {
        match state.search_mode {
            SearchMode::Concurrent => state.restaurants.search_concurrent(&criteria).await?,
            SearchMode::Sequential => state.restaurants.search(&criteria).await?,
        }
    };
    debug!(count = found.len(), searched = criteria.has_query(), "restaurants listed");

    Ok(web::Json(RestaurantsResponse {
        restaurants: found.into_iter().map(RestaurantResponse::from).collect(),
    }))
}

/// Fetch the menu of one restaurant.
#[utoipa::path(
    get,
    path = "/api/v1/menu",
    params(MenuQuery),
    responses(
        (status = 200, description = "Restaurant menu", body = MenuEnvelope),
        (status = 400, description = "Missing restaurant identifier", body = ErrorSchema),
        (status = 404, description = "No menu for the restaurant", body = ErrorSchema),
        (status = 503, description = "Catalogue unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "getMenu"
)]
#[get("/menu")]
pub async fn get_menu(
    state: web::Data<HttpState>,
    query: web::Query<MenuQuery>,
) -> ApiResult<web::Json<MenuEnvelope>> {
    let restaurant_id = parse_restaurant_id(query.restaurant_id.as_deref())?;
    let menu = state.restaurants.menu(&restaurant_id).await?;
    Ok(web::Json(MenuEnvelope {
        menu: MenuResponse::from(menu),
    }))
}

#[cfg(test)]
#[path = "restaurants_tests.rs"]
mod tests;
