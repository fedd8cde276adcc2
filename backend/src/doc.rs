//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the restaurant discovery and health endpoints plus
//! the schema wrappers ([`ErrorSchema`], [`ErrorCodeSchema`]) that describe
//! domain errors without coupling domain types to utoipa.
//!
//! The generated document is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::restaurants::{
    MenuEnvelope, MenuItemResponse, MenuResponse, RestaurantResponse, RestaurantsResponse,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nearby eats API",
        description = "Find open restaurants near a location and read their menus."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::restaurants::list_restaurants,
        crate::inbound::http::restaurants::get_menu,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        RestaurantResponse,
        RestaurantsResponse,
        MenuItemResponse,
        MenuResponse,
        MenuEnvelope,
    )),
    tags(
        (name = "restaurants", description = "Restaurant browse, search and menus"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document.

    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn restaurant_schema_uses_camel_case_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let restaurant = schemas.get("RestaurantResponse").expect("restaurant schema");

        assert_object_schema_has_field(restaurant, "restaurantId");
        assert_object_schema_has_field(restaurant, "opensAt");
    }

    #[test]
    fn every_endpoint_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/restaurants",
            "/api/v1/menu",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
