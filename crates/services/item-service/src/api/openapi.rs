//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::item_handler;
use domain::Item;

/// OpenAPI documentation for the item service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item Service",
        version = "0.1.0",
        description = "Item CRUD API backed by SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        item_handler::list_items,
        item_handler::create_item,
        item_handler::get_item,
        item_handler::update_item,
        item_handler::delete_item,
    ),
    components(
        schemas(
            Item,
            item_handler::CreateItemRequest,
            item_handler::UpdateItemRequest,
        )
    ),
    tags(
        (name = "Items", description = "Item management operations")
    )
)]
pub struct ApiDoc;
