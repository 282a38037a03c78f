use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::repositories::CategoryRepository;

/// In-memory category store for tests
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
    fail: bool,
}

impl InMemoryCategoryRepository {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: Mutex::new(categories),
            fail: false,
        }
    }

    /// Every call fails with a storage error
    pub fn failing() -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn check_available(&self) -> Result<()> {
        if self.fail {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>> {
        self.check_available()?;
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn create(&self, category: NewCategory) -> Result<Category> {
        self.check_available()?;
        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c.code == category.code) {
            return Err(AppError::Conflict(format!(
                "Category '{}' already exists",
                category.code
            )));
        }

        let id = categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let created = Category {
            id,
            code: category.code,
            name: category.name,
        };
        categories.push(created.clone());
        Ok(created)
    }
}
