//! OpenAPI documentation configuration.

use crate::api;
use crate::validation::ValidationIssue;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "casactl",
        description = "Property listings CRUD API over an in-memory repository."
    ),
    paths(
        api::handlers::properties::list_properties,
        api::handlers::properties::get_property,
        api::handlers::properties::create_property,
        api::handlers::properties::update_property,
        api::handlers::properties::delete_property,
    ),
    components(schemas(
        api::models::properties::PropertyType,
        api::models::properties::PropertyCreate,
        api::models::properties::PropertyUpdate,
        api::models::properties::PropertyResponse,
        api::models::properties::PropertyListResponse,
        ValidationIssue,
    )),
    tags(
        (name = "properties", description = "Property listing management")
    )
)]
pub struct ApiDoc;
