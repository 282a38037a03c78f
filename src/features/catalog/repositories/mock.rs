use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::{AppError, Result};
use crate::features::catalog::models::{Product, ProductFilter, ProductListResult};
use crate::features::catalog::repositories::ProductRepository;

/// In-memory product store for tests. Products keep their insertion order.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
    fail: bool,
    last_filter: Mutex<Option<ProductFilter>>,
}

impl InMemoryProductRepository {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    /// Every call fails with a storage error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// The filter received by the most recent listing call
    pub fn last_filter(&self) -> Option<ProductFilter> {
        self.last_filter.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<()> {
        if self.fail {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

/// Whether a product satisfies both filter predicates, ignoring pagination
fn matches(filter: &ProductFilter, product: &Product) -> bool {
    let category_ok = filter
        .category_code()
        .is_none_or(|code| product.category.code == code);
    let price_ok = filter
        .price_less_than
        .is_none_or(|bound| product.price < bound);

    category_ok && price_ok
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_with_filter(&self, filter: &ProductFilter) -> Result<ProductListResult> {
        *self.last_filter.lock().unwrap() = Some(filter.clone());
        self.check_available()?;

        let matching: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| matches(filter, p))
            .collect();
        let total = matching.len() as i64;
        let products = matching
            .into_iter()
            .skip(filter.offset.max(0) as usize)
            .take(filter.limit.max(0) as usize)
            .cloned()
            .collect();

        Ok(ProductListResult { products, total })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Product>> {
        self.check_available()?;
        Ok(self.products.iter().find(|p| p.code == code).cloned())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::shared::test_helpers::sample_catalog;

    fn filter(category: Option<&str>, below: Option<i64>, offset: i64, limit: i64) -> ProductFilter {
        ProductFilter {
            category_code: category.map(str::to_string),
            price_less_than: below.map(Decimal::from),
            offset,
            limit,
        }
    }

    fn codes(result: &ProductListResult) -> Vec<&str> {
        result.products.iter().map(|p| p.code.as_str()).collect()
    }

    fn matching_codes(filter: &ProductFilter) -> Vec<String> {
        sample_catalog()
            .into_iter()
            .filter(|p| matches(filter, p))
            .map(|p| p.code)
            .collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert_eq!(matching_codes(&ProductFilter::default()).len(), 4);
        assert_eq!(matching_codes(&filter(Some(""), None, 0, 0)).len(), 4);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        assert!(matching_codes(&filter(Some("Clothing"), None, 0, 0)).is_empty());
    }

    #[test]
    fn test_price_bound_is_exclusive() {
        assert_eq!(
            matching_codes(&filter(None, Some(100), 0, 0)),
            vec!["PROD002", "PROD003"]
        );
    }

    #[tokio::test]
    async fn test_scenarios() {
        let repo = InMemoryProductRepository::with_products(sample_catalog());

        let clothing = repo
            .find_with_filter(&filter(Some("clothing"), None, 0, 10))
            .await
            .unwrap();
        assert_eq!(clothing.total, 2);
        assert_eq!(codes(&clothing), vec!["PROD001", "PROD004"]);

        let cheap = repo
            .find_with_filter(&filter(None, Some(100), 0, 10))
            .await
            .unwrap();
        assert_eq!(cheap.total, 2);
        assert_eq!(codes(&cheap), vec!["PROD002", "PROD003"]);

        let both = repo
            .find_with_filter(&filter(Some("clothing"), Some(120), 0, 10))
            .await
            .unwrap();
        assert_eq!(both.total, 1);
        assert_eq!(codes(&both), vec!["PROD001"]);
    }

    #[tokio::test]
    async fn test_page_size_follows_total_offset_and_limit() {
        let repo = InMemoryProductRepository::with_products(sample_catalog());

        for offset in 0..6 {
            for limit in 0..6 {
                let result = repo
                    .find_with_filter(&filter(None, None, offset, limit))
                    .await
                    .unwrap();
                let expected = (result.total - offset).max(0).min(limit);
                assert_eq!(result.total, 4);
                assert_eq!(result.products.len() as i64, expected);
            }
        }
    }

    #[tokio::test]
    async fn test_offset_beyond_total_keeps_total() {
        let repo = InMemoryProductRepository::with_products(sample_catalog());

        let result = repo
            .find_with_filter(&filter(Some("clothing"), None, 10, 10))
            .await
            .unwrap();

        assert_eq!(result.total, 2);
        assert!(result.products.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty_not_error() {
        let repo = InMemoryProductRepository::with_products(sample_catalog());

        let result = repo
            .find_with_filter(&filter(Some("furniture"), None, 0, 10))
            .await
            .unwrap();

        assert_eq!(result.total, 0);
        assert!(result.products.is_empty());
    }

    #[tokio::test]
    async fn test_records_last_filter() {
        let repo = InMemoryProductRepository::with_products(sample_catalog());
        let expected = filter(Some("shoes"), None, 3, 7);

        repo.find_with_filter(&expected).await.unwrap();

        assert_eq!(repo.last_filter(), Some(expected));
    }
}
