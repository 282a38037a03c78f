use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::dtos::{CategoryResponseDto, CreateCategoryDto};
use crate::features::categories::repositories::CategoryRepository;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// List all categories
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.list_all().await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Create a category from an already validated DTO
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category = self.repository.create(dto.into()).await?;

        tracing::info!(
            "Category created: id={}, code={}",
            category.id,
            category.code
        );

        Ok(category.into())
    }
}
