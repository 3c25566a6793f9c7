use utoipa::{Modify, OpenApi};

use crate::features::businesses::{dtos as businesses_dtos, handlers as businesses_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories (public)
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::get_category_detail,
        // Businesses (public)
        businesses_handlers::list_businesses,
        businesses_handlers::get_business,
        // Locations (public)
        locations_handlers::list_locations,
        locations_handlers::get_location,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryTreeDto,
            categories_dtos::CategoryDetailDto,
            categories_dtos::BreadcrumbItemDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<categories_dtos::CategoryDetailDto>,
            // Businesses
            businesses_dtos::BusinessResponseDto,
            ApiResponse<Vec<businesses_dtos::BusinessResponseDto>>,
            ApiResponse<businesses_dtos::BusinessResponseDto>,
            // Locations
            locations_dtos::LocationResponseDto,
            ApiResponse<Vec<locations_dtos::LocationResponseDto>>,
            ApiResponse<locations_dtos::LocationResponseDto>,
        )
    ),
    tags(
        (name = "categories", description = "Category taxonomy (public)"),
        (name = "businesses", description = "Business listings (public)"),
        (name = "locations", description = "Locations covered by the directory (public)"),
    ),
    info(
        title = "Bizdir API",
        version = "0.1.0",
        description = "API documentation for the Bizdir local business directory",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
