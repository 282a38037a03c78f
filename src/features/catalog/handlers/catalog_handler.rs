use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::catalog::dtos::{CatalogQueryParams, ProductResponseDto};
use crate::features::catalog::services::CatalogService;
use crate::shared::types::{ApiResponse, Meta};

/// List products (paginated, filterable)
///
/// `meta.total` counts every matching product regardless of paging.
#[utoipa::path(
    get,
    path = "/api/catalog",
    params(CatalogQueryParams),
    responses(
        (status = 200, description = "Page of products", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "catalog"
)]
pub async fn list_products(
    State(service): State<Arc<CatalogService>>,
    AppQuery(params): AppQuery<CatalogQueryParams>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let filter = params.to_filter()?;
    let (items, total) = service.list_products(&filter).await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Get product by code
#[utoipa::path(
    get,
    path = "/api/catalog/{code}",
    params(
        ("code" = String, Path, description = "Product code")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "catalog"
)]
pub async fn get_product(
    State(service): State<Arc<CatalogService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get_by_code(&code).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}
