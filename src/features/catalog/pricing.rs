//! Effective price of a variant.

use rust_decimal::Decimal;

/// Price shown for a variant.
///
/// A variant without its own price, or priced at exactly zero, inherits the
/// product price. Comparison is exact decimal equality.
pub fn resolve_price(variant_price: Option<Decimal>, product_price: Decimal) -> Decimal {
    match variant_price {
        Some(price) if !price.is_zero() => price,
        _ => product_price,
    }
}
