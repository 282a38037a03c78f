use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::{AppError, Result};
use crate::features::catalog::models::{Product, ProductFilter, Variant};
use crate::features::catalog::pricing::resolve_price;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Query params for listing the catalog
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogQueryParams {
    /// Number of matching products to skip (default: 0)
    #[serde(default)]
    #[param(minimum = 0)]
    pub offset: i64,
    /// Page size (default: 10, clamped to 1..=100)
    #[serde(default = "default_limit")]
    #[param(minimum = 1, maximum = 100)]
    pub limit: i64,
    /// Only products in this category code
    pub category: Option<String>,
    /// Only products whose price is strictly below this value
    #[serde(rename = "priceLessThan")]
    pub price_less_than: Option<String>,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl CatalogQueryParams {
    pub fn offset(&self) -> i64 {
        self.offset.max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }

    /// Build the storage filter, rejecting a malformed price bound
    pub fn to_filter(&self) -> Result<ProductFilter> {
        let price_less_than = self
            .price_less_than
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                Decimal::from_str(raw).map_err(|_| {
                    AppError::Validation("Invalid priceLessThan parameter".to_string())
                })
            })
            .transpose()?;

        Ok(ProductFilter {
            category_code: self.category.clone().filter(|code| !code.is_empty()),
            price_less_than,
            offset: self.offset(),
            limit: self.limit(),
        })
    }
}

/// Variant as exposed to clients, with its effective price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VariantResponseDto {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    pub sku: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

impl VariantResponseDto {
    pub fn new(variant: Variant, product_price: Decimal) -> Self {
        Self {
            id: variant.id,
            product_id: variant.product_id,
            name: variant.name,
            sku: variant.sku,
            price: resolve_price(variant.price, product_price),
        }
    }
}

/// Product as exposed to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: i64,
    pub code: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub category: CategoryResponseDto,
    pub variants: Vec<VariantResponseDto>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        let price = p.price;
        Self {
            id: p.id,
            code: p.code,
            price,
            category: p.category.into(),
            variants: p
                .variants
                .into_iter()
                .map(|v| VariantResponseDto::new(v, price))
                .collect(),
        }
    }
}
