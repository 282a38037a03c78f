use rust_decimal::Decimal;

use crate::features::catalog::models::Variant;
use crate::features::categories::models::Category;

/// A product with its category and variants loaded
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub code: String,
    pub price: Decimal,
    pub category: Category,
    pub variants: Vec<Variant>,
}

/// Which products to return and how to page them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Exact, case-sensitive category code. Empty means no filter.
    pub category_code: Option<String>,
    /// Exclusive upper bound on the product's own price
    pub price_less_than: Option<Decimal>,
    pub offset: i64,
    pub limit: i64,
}

impl ProductFilter {
    /// Category code to filter on, if any
    pub fn category_code(&self) -> Option<&str> {
        self.category_code.as_deref().filter(|code| !code.is_empty())
    }
}

/// One page of products plus the unpaginated match count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListResult {
    pub products: Vec<Product>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_category_code_is_no_filter() {
        let filter = ProductFilter {
            category_code: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.category_code(), None);
    }

    #[test]
    fn test_category_code_is_kept_verbatim() {
        let filter = ProductFilter {
            category_code: Some("Clothing".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.category_code(), Some("Clothing"));
    }
}
