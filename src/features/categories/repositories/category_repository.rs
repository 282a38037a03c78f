use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::is_unique_violation;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, NewCategory};

/// Storage capability for categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories in insertion order
    async fn list_all(&self) -> Result<Vec<Category>>;

    /// Insert a category and return it with its assigned id.
    /// A duplicate code yields [`AppError::Conflict`].
    async fn create(&self, category: NewCategory) -> Result<Category>;
}

/// PostgreSQL-backed category storage
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, code, name
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn create(&self, category: NewCategory) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (code, name)
            VALUES ($1, $2)
            RETURNING id, code, name
            "#,
        )
        .bind(&category.code)
        .bind(&category.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(format!("Category '{}' already exists", category.code))
            } else {
                AppError::Database(e)
            }
        })
    }
}
