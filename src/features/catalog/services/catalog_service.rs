use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::catalog::dtos::ProductResponseDto;
use crate::features::catalog::models::ProductFilter;
use crate::features::catalog::repositories::ProductRepository;

/// Read side of the catalog: queries storage and assembles responses
pub struct CatalogService {
    repository: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// One page of products matching `filter` and the total match count
    pub async fn list_products(
        &self,
        filter: &ProductFilter,
    ) -> Result<(Vec<ProductResponseDto>, i64)> {
        let result = self.repository.find_with_filter(filter).await?;
        let items = result.products.into_iter().map(|p| p.into()).collect();

        Ok((items, result.total))
    }

    /// Get product by code
    pub async fn get_by_code(&self, code: &str) -> Result<ProductResponseDto> {
        self.repository
            .find_by_code(code)
            .await?
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(format!("Product '{}' not found", code)))
    }
}
