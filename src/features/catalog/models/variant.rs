use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for a product variant (`product_variants` table)
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Variant {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    pub sku: String,
    /// `None` when the variant inherits the product price
    pub price: Option<Decimal>,
}
