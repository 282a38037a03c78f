use utoipa::{Modify, OpenApi};

use crate::features::catalog::{dtos as catalog_dtos, handlers as catalog_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Catalog
        catalog_handlers::list_products,
        catalog_handlers::get_product,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Catalog
            catalog_dtos::ProductResponseDto,
            catalog_dtos::VariantResponseDto,
            ApiResponse<Vec<catalog_dtos::ProductResponseDto>>,
            ApiResponse<catalog_dtos::ProductResponseDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CreateCategoryDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
        )
    ),
    tags(
        (name = "catalog", description = "Product listing and lookup (public)"),
        (name = "categories", description = "Product categories (public)"),
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Product catalog and category API",
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
